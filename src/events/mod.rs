//! Notifications the engine emits.
//!
//! `select_card` and `tick` return the events they produced, in order, and
//! the engine also appends each one to its session log. UI code pattern
//! matches on these to update the display; the engine knows nothing about
//! rendering.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Final numbers for a won game, carried by `GameEvent::GameWon` and used to
/// build a result submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WinSummary {
    /// Score including the finalization bonus.
    pub final_score: u32,

    /// `final_score` as a rounded percentage of the scoring ceiling.
    pub normalized_percent: u32,

    pub moves: u32,

    pub total_pairs: u32,

    /// Start-to-finish duration in seconds.
    pub elapsed_seconds: f64,
}

/// One engine notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Input was ignored (locked board, repeated card, card not face
    /// down...). Nothing changed.
    NoOp,

    /// First flip of the session; the game clock is running from here and
    /// the host may start forwarding periodic `tick` calls.
    TimerStarted,

    /// A first card turned face up; waiting on its partner pick.
    FlipOnly { card: CardId },

    /// Pair resolved as a match. The board stays unlocked.
    Matched {
        first: CardId,
        second: CardId,
        /// Points this match awarded, bonuses included.
        points: u32,
        /// Session score after the award.
        score: u32,
    },

    /// Pair resolved as a mismatch; the board is locked until the settle
    /// delay passes.
    Mismatched { first: CardId, second: CardId },

    /// The settle delay elapsed: both mismatched cards are face down again
    /// and input is accepted.
    BoardUnlocked,

    /// Periodic elapsed-time notification while the session clock runs.
    TimerTick { elapsed_seconds: f64 },

    /// Every pair matched. Terminal; emitted exactly once per session.
    GameWon(WinSummary),
}

impl GameEvent {
    /// Events worth recording in the session log (everything but `NoOp`,
    /// which is silent by contract).
    #[must_use]
    pub fn is_loggable(&self) -> bool {
        !matches!(self, GameEvent::NoOp)
    }
}

/// A logged event with the clock reading it was emitted at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub at: Duration,
    pub event: GameEvent,
}

impl EventRecord {
    #[must_use]
    pub fn new(at: Duration, event: GameEvent) -> Self {
        Self { at, event }
    }
}
