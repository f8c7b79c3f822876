//! Core engine types: identifiers, decks, cards, RNG, clock, configuration.
//!
//! This module contains the building blocks the rest of the crate is
//! assembled from. Nothing here mutates session state; the `engine` module
//! owns all transitions.

pub mod ids;
pub mod deck;
pub mod card;
pub mod rng;
pub mod clock;
pub mod config;
pub mod errors;

pub use ids::{CardId, PairId};
pub use deck::{Pair, TopicDeck};
pub use card::{Card, CardFace, CardState};
pub use rng::{DeckRng, DeckRngState};
pub use clock::{GameClock, ManualClock, SystemClock};
pub use config::{GameConfig, ScoringRules};
pub use errors::EngineError;
