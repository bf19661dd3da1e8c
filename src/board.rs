use std::collections::HashMap;

use chrono::Utc;

use crate::domain::{
    BoardError, BoardEvent, BoardEventKind, Card, CardId, Direction, StageSet,
};
use crate::observable::{Observable, SubscriptionId};

/// Text given to new cards when the configuration does not override it.
pub const DEFAULT_CARD_TEXT: &str = "New Task";

/// Authoritative owner of every card on the board.
///
/// All card mutation goes through the operations here; subscribers observe
/// the results as [`BoardEvent`]s carrying snapshots. Failed operations
/// change nothing and emit nothing.
pub struct Board {
    stages: StageSet,
    default_text: String,
    cards: HashMap<CardId, Card>,
    observers: Observable<BoardEvent>,
}

impl Board {
    pub fn new(stages: StageSet) -> Self {
        Self::with_default_text(stages, DEFAULT_CARD_TEXT)
    }

    /// A board whose new cards start with `text` instead of
    /// [`DEFAULT_CARD_TEXT`].
    pub fn with_default_text(stages: StageSet, text: impl Into<String>) -> Self {
        Self {
            stages,
            default_text: text.into(),
            cards: HashMap::new(),
            observers: Observable::new(),
        }
    }

    // ── Subscriptions ──────────────────────────────────────────

    pub fn subscribe<F>(&mut self, kind: BoardEventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&BoardEvent) + 'static,
    {
        self.observers.subscribe(kind, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ── Mutations ──────────────────────────────────────────────

    /// Creates a card with the next id, the default text and the first
    /// configured stage, then announces it. Cannot fail.
    ///
    /// Ids are `card count + 1`; with deletion unsupported they stay
    /// unique and strictly increasing.
    pub fn create_card(&mut self) -> Card {
        let now = Utc::now().to_rfc3339();
        let card = Card {
            id: self.cards.len() as CardId + 1,
            text: self.default_text.clone(),
            stage: self.stages.first().to_string(),
            created_at: now.clone(),
            updated_at: now,
        };
        self.cards.insert(card.id, card.clone());
        tracing::debug!(id = card.id, stage = card.stage.as_str(), "card created");
        self.observers
            .publish(&BoardEvent::CardCreated { card: card.clone() });
        card
    }

    /// Replaces the text of the card behind `id` and announces the change.
    pub fn update_card_text(
        &mut self,
        id: CardId,
        text: impl Into<String>,
    ) -> Result<Card, BoardError> {
        let Some(card) = self.cards.get_mut(&id) else {
            tracing::debug!(id, "text update for unknown card ignored");
            return Err(BoardError::NotFound(id));
        };
        card.text = text.into();
        card.updated_at = Utc::now().to_rfc3339();
        let snapshot = card.clone();
        tracing::debug!(id, "card text updated");
        self.observers.publish(&BoardEvent::CardUpdated {
            card: snapshot.clone(),
        });
        Ok(snapshot)
    }

    /// Shifts the card behind `id` to the adjacent stage in `direction`.
    /// A move past either end of the sequence leaves the card in its
    /// boundary stage.
    pub fn move_card(&mut self, id: CardId, direction: Direction) -> Result<Card, BoardError> {
        let Some(card) = self.cards.get_mut(&id) else {
            tracing::debug!(id, %direction, "move for unknown card ignored");
            return Err(BoardError::NotFound(id));
        };
        let Some(target) = self.stages.neighbor(&card.stage, direction) else {
            tracing::debug!(
                id,
                stage = card.stage.as_str(),
                %direction,
                "move past sequence end ignored"
            );
            return Err(BoardError::AtBoundary {
                id,
                stage: card.stage.clone(),
            });
        };
        card.stage = target.to_string();
        card.updated_at = Utc::now().to_rfc3339();
        let snapshot = card.clone();
        tracing::debug!(id, stage = snapshot.stage.as_str(), "card moved");
        self.observers.publish(&BoardEvent::CardMoved {
            card: snapshot.clone(),
        });
        Ok(snapshot)
    }

    pub fn move_card_left(&mut self, id: CardId) -> Result<Card, BoardError> {
        self.move_card(id, Direction::Left)
    }

    pub fn move_card_right(&mut self, id: CardId) -> Result<Card, BoardError> {
        self.move_card(id, Direction::Right)
    }

    // ── Read access ────────────────────────────────────────────

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Cards currently in `stage`, ordered by id.
    pub fn cards_in_stage(&self, stage: &str) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.values().filter(|c| c.stage == stage).collect();
        cards.sort_by_key(|c| c.id);
        cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn stages(&self) -> &StageSet {
        &self.stages
    }
}
