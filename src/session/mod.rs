//! Per-game mutable state.
//!
//! Exactly one `SessionState` exists per active game, owned by the engine.
//! Every `select_card` branch either applies fully or leaves this struct
//! untouched; there are no partially-updated states to observe.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    /// Terminal; reached only when every pair is matched.
    Won,
}

/// Board sub-state, derived from the selection buffer and the lock flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardPhase {
    /// Nothing held; next selection becomes the first of a pair.
    Idle,
    /// One card held face up.
    OneSelected,
    /// Mismatch showing; input ignored until the settle timer fires.
    Locked,
}

/// Counters, timestamps, and the selection buffer for one game.
///
/// Timestamps are readings of the engine's `GameClock` (monotonic, relative
/// to the clock's origin). `started_at` stays `None` until the first card of
/// the session is flipped; the timer is lazy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Completed pair-selections (match or mismatch). A lone first flip does
    /// not count.
    pub moves: u32,

    pub score: u32,

    /// Consecutive matches without an intervening mismatch.
    pub correct_streak: u32,

    pub matched_pairs: u32,

    pub total_pairs: u32,

    /// Cards currently held face up and unresolved, in selection order.
    /// Never holds more than two.
    pub selected: SmallVec<[CardId; 2]>,

    /// True while a mismatch is showing and the settle timer is pending.
    pub input_locked: bool,

    pub started_at: Option<Duration>,

    /// Clock reading of the last completed move (set on match and mismatch,
    /// not on a lone first flip).
    pub last_move_at: Option<Duration>,

    pub ended_at: Option<Duration>,

    pub status: SessionStatus,
}

impl SessionState {
    /// Fresh state for a deck of `total_pairs`, all counters zeroed.
    #[must_use]
    pub fn new(total_pairs: u32) -> Self {
        Self {
            moves: 0,
            score: 0,
            correct_streak: 0,
            matched_pairs: 0,
            total_pairs,
            selected: SmallVec::new(),
            input_locked: false,
            started_at: None,
            last_move_at: None,
            ended_at: None,
            status: SessionStatus::InProgress,
        }
    }

    #[must_use]
    pub fn board_phase(&self) -> BoardPhase {
        if self.input_locked {
            BoardPhase::Locked
        } else if self.selected.len() == 1 {
            BoardPhase::OneSelected
        } else {
            BoardPhase::Idle
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == SessionStatus::Won
    }

    /// Wall-clock duration of the finished game, `None` while unfinished or
    /// never started.
    #[must_use]
    pub fn elapsed_seconds(&self) -> Option<f64> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start).as_secs_f64()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_zeroed() {
        let s = SessionState::new(5);
        assert_eq!(s.moves, 0);
        assert_eq!(s.score, 0);
        assert_eq!(s.correct_streak, 0);
        assert_eq!(s.matched_pairs, 0);
        assert_eq!(s.total_pairs, 5);
        assert!(s.selected.is_empty());
        assert!(!s.input_locked);
        assert_eq!(s.started_at, None);
        assert_eq!(s.status, SessionStatus::InProgress);
    }

    #[test]
    fn test_board_phase() {
        let mut s = SessionState::new(3);
        assert_eq!(s.board_phase(), BoardPhase::Idle);

        s.selected.push(CardId::new(0));
        assert_eq!(s.board_phase(), BoardPhase::OneSelected);

        s.selected.push(CardId::new(1));
        s.input_locked = true;
        assert_eq!(s.board_phase(), BoardPhase::Locked);
    }

    #[test]
    fn test_elapsed_seconds() {
        let mut s = SessionState::new(3);
        assert_eq!(s.elapsed_seconds(), None);

        s.started_at = Some(Duration::from_secs(2));
        assert_eq!(s.elapsed_seconds(), None);

        s.ended_at = Some(Duration::from_millis(9500));
        assert_eq!(s.elapsed_seconds(), Some(7.5));
    }
}
