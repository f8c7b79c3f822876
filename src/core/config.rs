//! Engine configuration: identity, timing windows, and scoring rules.
//!
//! Every constant that shapes play travels in a `GameConfig` handed to the
//! engine at construction. There are no module-level knobs; two engines with
//! different configs coexist in one process.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Scoring constants.
///
/// These are game-design numbers, not derived optima. The efficiency bonus
/// in particular is a heuristic: "realistic minimum" moves is `2n + 2`
/// exploration-inclusive flips, not a true optimal-play count, and
/// `max_possible_score` is a normalization ceiling rather than the maximum
/// over all strategies. Both are intentional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Base points per matched pair.
    pub match_points: u32,

    /// Extra points when a match lands within `speed_window` of the
    /// previous completed move.
    pub speed_bonus: u32,

    /// Window for the speed bonus.
    pub speed_window: Duration,

    /// Extra points every `streak_interval`-th consecutive match.
    pub streak_bonus: u32,

    /// Streak length granting `streak_bonus` (2 = every second match in a
    /// row). Zero disables the streak bonus.
    pub streak_interval: u32,

    /// Flat bonus for finishing the board.
    pub completion_bonus: u32,

    /// Bonus for finishing near the realistic minimum move count.
    pub efficiency_bonus: u32,

    /// Exploration moves granted on top of the `2n` theoretical floor.
    pub exploration_moves: u32,

    /// Extra moves beyond the realistic minimum that still earn the
    /// efficiency bonus.
    pub efficiency_slack_moves: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            match_points: 10,
            speed_bonus: 2,
            speed_window: Duration::from_secs(3),
            streak_bonus: 5,
            streak_interval: 2,
            completion_bonus: 20,
            efficiency_bonus: 15,
            exploration_moves: 2,
            efficiency_slack_moves: 3,
        }
    }
}

impl ScoringRules {
    /// Points for one matched pair.
    ///
    /// `streak` is the consecutive-match count including this match;
    /// `seconds_since_prior` the gap to the previous completed move. Both
    /// bonuses stack on the base.
    #[must_use]
    pub fn match_award(&self, streak: u32, seconds_since_prior: f64) -> u32 {
        let mut points = self.match_points;

        if seconds_since_prior < self.speed_window.as_secs_f64() {
            points += self.speed_bonus;
        }

        if self.streak_interval > 0 && streak % self.streak_interval == 0 {
            points += self.streak_bonus;
        }

        points
    }

    /// Heuristic "realistic minimum" number of moves to clear `total_pairs`.
    #[must_use]
    pub fn realistic_minimum_moves(&self, total_pairs: u32) -> u32 {
        total_pairs * 2 + self.exploration_moves
    }

    /// One-shot bonus applied when the last pair resolves: completion, plus
    /// efficiency when the move count stayed near the realistic minimum.
    #[must_use]
    pub fn finalization_bonus(&self, moves: u32, total_pairs: u32) -> u32 {
        let mut bonus = self.completion_bonus;

        if moves <= self.realistic_minimum_moves(total_pairs) + self.efficiency_slack_moves {
            bonus += self.efficiency_bonus;
        }

        bonus
    }

    /// Normalization ceiling for a deck of `total_pairs`: every pair fast
    /// and streaked, plus both finalization bonuses.
    #[must_use]
    pub fn max_possible_score(&self, total_pairs: u32) -> u32 {
        let streak_hits = if self.streak_interval > 0 {
            total_pairs / self.streak_interval
        } else {
            0
        };

        total_pairs * self.match_points
            + total_pairs * self.speed_bonus
            + streak_hits * self.streak_bonus
            + self.efficiency_bonus
            + self.completion_bonus
    }

    /// Score as a rounded 0–100 percentage of the ceiling.
    #[must_use]
    pub fn normalized_percent(&self, score: u32, total_pairs: u32) -> u32 {
        let max = self.max_possible_score(total_pairs);
        if max == 0 {
            return 0;
        }
        ((score as f64 / max as f64) * 100.0).round() as u32
    }
}

/// Complete engine configuration.
///
/// ```
/// use std::time::Duration;
/// use memoria::GameConfig;
///
/// let config = GameConfig::new(3).with_settle_delay(Duration::from_millis(750));
/// assert_eq!(config.game_id, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Identifier reported with win submissions.
    pub game_id: u32,

    /// Scoring constants.
    pub scoring: ScoringRules,

    /// How long a mismatched pair stays face up before the board unlocks.
    pub settle_delay: Duration,

    /// Cadence of the elapsed-time notifications while a session runs.
    pub tick_interval: Duration,
}

impl GameConfig {
    /// Configuration with the standard windows: 1000 ms settle, 1000 ms tick.
    #[must_use]
    pub fn new(game_id: u32) -> Self {
        Self {
            game_id,
            scoring: ScoringRules::default(),
            settle_delay: Duration::from_millis(1000),
            tick_interval: Duration::from_millis(1000),
        }
    }

    /// Replace the scoring rules.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the mismatch settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the elapsed-tick cadence.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
