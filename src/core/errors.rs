//! Crate-wide error taxonomy.
//!
//! Ignored input is not an error: `MatchEngine::select_card` reports it as a
//! `GameEvent::NoOp` and mutates nothing. Errors here are the failures a
//! caller must handle: bad decks, missing topics, collaborator I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The deck is empty or otherwise unusable. No session is created.
    #[error("deck has no pairs")]
    InvalidDeck,

    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    /// The topic service answered, but with a payload the catalog parser
    /// rejects (missing `success`, empty data, wrong shape).
    #[error("malformed topic payload: {0}")]
    TopicPayload(String),

    #[error("HTTP error: {0}")]
    Http(Box<ureq::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ureq::Error> for EngineError {
    fn from(error: ureq::Error) -> Self {
        EngineError::Http(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(EngineError::InvalidDeck.to_string(), "deck has no pairs");
        assert_eq!(
            EngineError::UnknownTopic("Quimica".to_string()).to_string(),
            "unknown topic: Quimica"
        );
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
