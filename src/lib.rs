//! # memoria
//!
//! A memory-matching game engine for term/definition study decks.
//!
//! Cards are dealt face-down from a topic deck (one term card and one
//! definition card per pair) and the player flips two at a time looking for
//! matches. The engine owns the deck, the flip sequence, scoring, timing,
//! and win detection; rendering and screen navigation are the host's job.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: each `MatchEngine` owns exactly one
//!    `SessionState`. Multiple simultaneous games are just multiple engines.
//!
//! 2. **Configuration over convention**: scoring constants, settle delay,
//!    and the game identifier travel in a `GameConfig` passed at
//!    construction, never hardcoded.
//!
//! 3. **Cooperative timing**: the engine owns no threads. The host drives it
//!    with two events, `select_card` and `tick`, and the injected
//!    `GameClock` makes the 1000 ms settle/tick windows deterministic under
//!    test.
//!
//! 4. **Collaborators at trait seams**: topic acquisition (`TopicSource`),
//!    best-record persistence (`RecordStore`), and result submission
//!    (`ResultSink`) are swappable; the engine itself never performs I/O.
//!
//! ## Modules
//!
//! - `core`: identifiers, decks, cards, RNG, clock, configuration, errors
//! - `session`: the per-game mutable state
//! - `events`: notifications the engine emits for the host to observe
//! - `engine`: the match state machine and its cooperative timers
//! - `topics`: deck sources (HTTP catalog, fallback file, in-memory)
//! - `records`: best-moves record stores
//! - `report`: win-result submission

pub mod core;
pub mod session;
pub mod events;
pub mod engine;
pub mod topics;
pub mod records;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    Card, CardFace, CardId, CardState,
    DeckRng, DeckRngState,
    EngineError,
    GameClock, ManualClock, SystemClock,
    GameConfig, ScoringRules,
    Pair, PairId, TopicDeck,
};

pub use crate::session::{BoardPhase, SessionState, SessionStatus};

pub use crate::events::{EventRecord, GameEvent, WinSummary};

pub use crate::engine::{EngineBuilder, MatchEngine};

pub use crate::topics::{ApiTopicSource, FileTopicSource, StaticTopicSource, TopicCatalog, TopicSource};

pub use crate::records::{FileRecordStore, MemoryRecordStore, RecordStore};

pub use crate::report::{report_win, ApiResultSink, GameAttempt, ResultSink};
