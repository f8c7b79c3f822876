//! Win-result submission.
//!
//! After a win the host may report the outcome to the study-games backend.
//! Submission needs a signed-in user; without one it is skipped outright,
//! not treated as a failure. Either way the won session keeps its local
//! score and state; a sink error never flows back into the engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameConfig};
use crate::events::WinSummary;

/// The submission record, serialized with the backend's field names.
///
/// The backend reuses a quiz-shaped schema: the achieved score is reported
/// as `correct_challenges` and the scoring ceiling as `total_challenges`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAttempt {
    pub user_id: String,
    pub game_id: u32,
    pub correct_challenges: u32,
    pub total_challenges: u32,
    /// Whole seconds from first flip to win.
    pub time_spent: u64,
}

impl GameAttempt {
    /// Build an attempt from a finished game.
    #[must_use]
    pub fn from_summary(user_id: impl Into<String>, config: &GameConfig, summary: &WinSummary) -> Self {
        Self {
            user_id: user_id.into(),
            game_id: config.game_id,
            correct_challenges: summary.final_score,
            total_challenges: config.scoring.max_possible_score(summary.total_pairs),
            time_spent: summary.elapsed_seconds.max(0.0) as u64,
        }
    }
}

/// Where finished games are reported.
pub trait ResultSink {
    fn submit(&self, attempt: &GameAttempt) -> Result<(), EngineError>;
}

/// POSTs attempts as JSON to the backend's game-attempts endpoint.
#[derive(Debug)]
pub struct ApiResultSink {
    endpoint: String,
    agent: ureq::Agent,
}

impl ApiResultSink {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(10))
                .build(),
        }
    }
}

impl ResultSink for ApiResultSink {
    fn submit(&self, attempt: &GameAttempt) -> Result<(), EngineError> {
        self.agent
            .post(&self.endpoint)
            .send_json(attempt)
            .map_err(EngineError::from)?;
        log::debug!(
            "submitted attempt for user {} ({} pts)",
            attempt.user_id,
            attempt.correct_challenges
        );
        Ok(())
    }
}

/// Report a win, skipping silently when no user identity is available.
///
/// Returns the submitted attempt, or `None` when submission was skipped.
pub fn report_win(
    sink: &dyn ResultSink,
    user_id: Option<&str>,
    config: &GameConfig,
    summary: &WinSummary,
) -> Result<Option<GameAttempt>, EngineError> {
    let Some(user_id) = user_id else {
        log::debug!("no user identity, result submission skipped");
        return Ok(None);
    };

    let attempt = GameAttempt::from_summary(user_id, config, summary);
    sink.submit(&attempt)?;
    Ok(Some(attempt))
}
