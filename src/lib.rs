//! Core of a client-side task board: a fixed, ordered sequence of pipeline
//! stages holding task cards that are created, edited and moved one stage
//! at a time.
//!
//! [`Board`] owns the card collection and is its only mutator; it announces
//! every successful change as a [`domain::BoardEvent`] through the generic
//! [`observable::Observable`] dispatcher, so presentation stays decoupled
//! from state. Frontends subscribe to events and translate user intents
//! into calls on the board's operations.

pub mod board;
pub mod config;
pub mod domain;
pub mod observable;

pub use board::{Board, DEFAULT_CARD_TEXT};
pub use config::Config;
