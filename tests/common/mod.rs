use std::cell::RefCell;
use std::rc::Rc;

use taskboard::domain::{BoardEvent, BoardEventKind};
use taskboard::Board;

/// Records every event published for the kinds it is attached to, in
/// publish order.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<BoardEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, board: &mut Board, kind: BoardEventKind) {
        let events = Rc::clone(&self.events);
        board.subscribe(kind, move |event| events.borrow_mut().push(event.clone()));
    }

    pub fn attach_all(&self, board: &mut Board) {
        for &kind in BoardEventKind::all() {
            self.attach(board, kind);
        }
    }

    pub fn events(&self) -> Vec<BoardEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}
