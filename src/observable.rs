use std::collections::HashMap;
use std::hash::Hash;

/// Implemented by anything routable through an [`Observable`]: an event
/// exposes a copyable kind tag that serves as the subscription key.
pub trait Event {
    type Kind: Copy + Eq + Hash;

    fn kind(&self) -> Self::Kind;
}

/// Handle returned by [`Observable::subscribe`]. Keep it to unsubscribe
/// later; drop it to stay subscribed for the lifetime of the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber<E> {
    id: SubscriptionId,
    handler: Box<dyn FnMut(&E)>,
}

/// Synchronous fan-out dispatcher, keyed by event kind.
///
/// Handlers registered for a kind run in registration order, within the
/// caller's stack frame; nothing is deferred or queued. The dispatcher
/// holds no state beyond its handler registry, so any emitter can embed
/// one regardless of domain.
pub struct Observable<E: Event> {
    subscribers: HashMap<E::Kind, Vec<Subscriber<E>>>,
    next_id: u64,
}

impl<E: Event> Observable<E> {
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers `handler` for `kind`. No deduplication: registering the
    /// same handler twice means two invocations per publish.
    pub fn subscribe<F>(&mut self, kind: E::Kind, handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscribers.entry(kind).or_default().push(Subscriber {
            id,
            handler: Box::new(handler),
        });
        id
    }

    /// Removes the registration behind `id`, reporting whether one existed.
    /// Remaining handlers keep their relative order.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for handlers in self.subscribers.values_mut() {
            if let Some(index) = handlers.iter().position(|s| s.id == id) {
                handlers.remove(index);
                return true;
            }
        }
        false
    }

    /// Invokes every handler registered for `event.kind()`, in registration
    /// order. Publishing a kind nobody subscribed to is a no-op.
    pub fn publish(&mut self, event: &E) {
        if let Some(handlers) = self.subscribers.get_mut(&event.kind()) {
            for subscriber in handlers.iter_mut() {
                (subscriber.handler)(event);
            }
        }
    }

    pub fn handler_count(&self, kind: E::Kind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }
}

impl<E: Event> Default for Observable<E> {
    fn default() -> Self {
        Self::new()
    }
}
