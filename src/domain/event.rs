use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::observable;

/// Domain events the board publishes after a successful mutation.
///
/// Payload cards are snapshots: subscribers read them freely while the
/// board keeps the authoritative copy. The serialized form is the external
/// contract, e.g. `{"type":"cardCreated","card":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BoardEvent {
    CardCreated { card: Card },
    CardUpdated { card: Card },
    CardMoved { card: Card },
}

/// Discriminant of [`BoardEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardEventKind {
    CardCreated,
    CardUpdated,
    CardMoved,
}

impl BoardEventKind {
    pub fn all() -> &'static [BoardEventKind] {
        &[
            BoardEventKind::CardCreated,
            BoardEventKind::CardUpdated,
            BoardEventKind::CardMoved,
        ]
    }
}

impl BoardEvent {
    /// The card snapshot carried by the event.
    pub fn card(&self) -> &Card {
        match self {
            BoardEvent::CardCreated { card }
            | BoardEvent::CardUpdated { card }
            | BoardEvent::CardMoved { card } => card,
        }
    }
}

impl observable::Event for BoardEvent {
    type Kind = BoardEventKind;

    fn kind(&self) -> BoardEventKind {
        match self {
            BoardEvent::CardCreated { .. } => BoardEventKind::CardCreated,
            BoardEvent::CardUpdated { .. } => BoardEventKind::CardUpdated,
            BoardEvent::CardMoved { .. } => BoardEventKind::CardMoved,
        }
    }
}
