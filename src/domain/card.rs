use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Card identifier. Assigned by the board, strictly increasing from 1,
/// never reused.
pub type CardId = u64;

/// A single task card. Plain data: stage membership and id uniqueness are
/// enforced by the board that owns the card, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
    pub stage: String,
    pub created_at: String,
    pub updated_at: String,
}

// Identity is `id` alone; text and stage do not participate.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
