use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::StageSetError;

/// Move direction across the stage sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// The ordered pipeline stages cards can occupy, fixed once at startup.
/// Order defines the legal move directions; there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSet {
    names: Vec<String>,
}

impl StageSet {
    /// Builds a stage set from ordered names. The sequence must be
    /// non-empty and free of duplicates.
    pub fn new<I, S>(names: I) -> Result<Self, StageSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(StageSetError::Empty);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(StageSetError::Duplicate(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// The default three-stage flow.
    pub fn standard() -> Self {
        Self {
            names: vec!["open".into(), "processing".into(), "closed".into()],
        }
    }

    /// The stage newly created cards start in.
    pub fn first(&self) -> &str {
        &self.names[0]
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// The stage one position to the `direction` of `name`, or `None` when
    /// `name` sits at that end of the sequence (or is not a member at all).
    pub fn neighbor(&self, name: &str, direction: Direction) -> Option<&str> {
        let current = self.position(name)?;
        let target = current.checked_add_signed(direction.offset())?;
        self.get(target)
    }
}
