use crate::domain::card::CardId;

/// Failure modes of board operations.
///
/// Externally both degrade to silent no-ops: no mutation, no event. The
/// typed variants exist so callers and tests can tell the causes apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("card not found: {0}")]
    NotFound(CardId),

    #[error("card {id} is already at the end of the sequence in stage '{stage}'")]
    AtBoundary { id: CardId, stage: String },
}

/// Stage sequences rejected at configuration time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageSetError {
    #[error("stage sequence must not be empty")]
    Empty,

    #[error("duplicate stage name: {0}")]
    Duplicate(String),
}
