//! The match state machine.
//!
//! `MatchEngine` is driven by exactly two external events: a card selection
//! and a periodic tick. All mutation happens synchronously inside
//! `new_session`, `select_card`, and `tick`; the engine owns no threads and
//! never blocks. Its two delayed continuations (the mismatch settle timer
//! and the elapsed ticker) are plain `Option` deadlines read against the
//! injected clock, so at most one of each can be pending and a session
//! boundary cancels both by clearing them. A stale timer can never touch a
//! new session. Every transition takes `&mut self`, so concurrent re-entry
//! is ruled out at the type level; callers wanting to share an engine across
//! threads wrap it in their own lock.
//!
//! ## Board sub-state
//!
//! `Idle → (first flip) → OneSelected → (second flip) → resolving →`
//! either `Idle` (match, board stays unlocked) or `Locked → (settle delay)
//! → Idle` (mismatch). The session itself terminates in `Won` when the last
//! pair resolves.
//!
//! ```
//! use memoria::{EngineBuilder, GameConfig, ManualClock, Pair, TopicDeck};
//!
//! let deck = TopicDeck::new(vec![
//!     Pair::new("mitosis", "cell division"),
//!     Pair::new("osmosis", "solvent diffusion"),
//! ]).unwrap();
//!
//! let mut engine = EngineBuilder::new(GameConfig::new(3))
//!     .clock(ManualClock::new())
//!     .seed(42)
//!     .build();
//!
//! let cards = engine.new_session(&deck).unwrap();
//! assert_eq!(cards.len(), 4);
//! ```

use std::time::Duration;

use im::Vector;

use crate::core::{
    Card, CardId, CardState, DeckRng, EngineError, GameClock, GameConfig, SystemClock, TopicDeck,
};
use crate::events::{EventRecord, GameEvent, WinSummary};
use crate::session::{SessionState, SessionStatus};

/// Stand-in gap when no prior move exists. Large enough to never grant the
/// speed bonus; unreachable once a session has started, because the first
/// flip always sets `last_move_at`.
const NO_PRIOR_MOVE_SECS: f64 = 999.0;

/// Builder for a `MatchEngine`.
///
/// Defaults: real clock, entropy-seeded RNG. Tests swap in a `ManualClock`
/// and a fixed seed.
pub struct EngineBuilder {
    config: GameConfig,
    clock: Option<Box<dyn GameClock>>,
    rng: Option<DeckRng>,
}

impl EngineBuilder {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            clock: None,
            rng: None,
        }
    }

    /// Use a specific clock (e.g. `ManualClock` in tests).
    #[must_use]
    pub fn clock(mut self, clock: impl GameClock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Deal deterministically from a fixed seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(DeckRng::new(seed));
        self
    }

    /// Use a pre-built RNG (e.g. restored from a snapshot).
    #[must_use]
    pub fn rng(mut self, rng: DeckRng) -> Self {
        self.rng = Some(rng);
        self
    }

    #[must_use]
    pub fn build(self) -> MatchEngine {
        MatchEngine {
            config: self.config,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock::new())),
            rng: self.rng.unwrap_or_else(DeckRng::from_entropy),
            cards: Vec::new(),
            session: None,
            settle_due: None,
            tick_due: None,
            history: Vector::new(),
        }
    }
}

/// One engine, one game.
///
/// Construct via `MatchEngine::new` or `EngineBuilder`, start a game with
/// `new_session`, then forward card picks to `select_card` and a ~1 s
/// heartbeat to `tick`. Both return the notifications they produced, in
/// order.
#[derive(Debug)]
pub struct MatchEngine {
    config: GameConfig,
    clock: Box<dyn GameClock>,
    rng: DeckRng,
    cards: Vec<Card>,
    session: Option<SessionState>,
    /// Deadline of the pending mismatch unlock. `Some` only while the board
    /// is locked; the sole pending unlock at any time.
    settle_due: Option<Duration>,
    /// Next elapsed-tick deadline. `Some` only between the first flip and
    /// the win (or reset).
    tick_due: Option<Duration>,
    history: Vector<EventRecord>,
}

impl MatchEngine {
    /// Engine with the real clock and an entropy-seeded deal.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        EngineBuilder::new(config).build()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The dealt board, in layout order. Empty before the first session.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    #[must_use]
    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    /// Append-only log of everything emitted this session. `im::Vector`, so
    /// cloning a snapshot is O(1).
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// Start-to-finish seconds of the won game, `None` otherwise.
    #[must_use]
    pub fn elapsed_seconds(&self) -> Option<f64> {
        self.session.as_ref().and_then(SessionState::elapsed_seconds)
    }

    /// Final numbers once the session is won.
    #[must_use]
    pub fn summary(&self) -> Option<WinSummary> {
        let session = self.session.as_ref()?;
        if !session.is_won() {
            return None;
        }
        Some(WinSummary {
            final_score: session.score,
            normalized_percent: self
                .config
                .scoring
                .normalized_percent(session.score, session.total_pairs),
            moves: session.moves,
            total_pairs: session.total_pairs,
            elapsed_seconds: session.elapsed_seconds().unwrap_or(0.0),
        })
    }

    /// Deal a fresh board from `deck` and reset all counters.
    ///
    /// Cancels any pending settle timer and elapsed ticker from the previous
    /// session before touching state, and clears the event log. The timer
    /// stays lazy: `started_at` is set by the first flip, not here.
    pub fn new_session(&mut self, deck: &TopicDeck) -> Result<&[Card], EngineError> {
        if deck.is_empty() {
            return Err(EngineError::InvalidDeck);
        }

        self.cancel_timers();
        self.cards = deck.deal(&mut self.rng);
        self.session = Some(SessionState::new(deck.len()));
        self.history = Vector::new();

        log::debug!(
            "session started: {} pairs, {} cards dealt",
            deck.len(),
            self.cards.len()
        );

        Ok(&self.cards)
    }

    /// Abandon the current session: cancel both timers and drop the board.
    pub fn reset(&mut self) {
        self.cancel_timers();
        self.cards.clear();
        self.session = None;
        self.history = Vector::new();
        log::debug!("session reset");
    }

    /// Handle a card pick. The core transition function.
    ///
    /// Ignored input (locked board, repeat of the held card, card not face
    /// down, unknown id, no session, finished session) yields a `NoOp` with
    /// zero mutation. An overdue settle timer fires first, exactly as a
    /// timer callback would have run before this input in an event loop.
    pub fn select_card(&mut self, card_id: CardId) -> Vec<GameEvent> {
        let now = self.clock.now();
        let mut events = Vec::new();
        self.fire_settle_if_due(now, &mut events);
        self.apply_selection(now, card_id, &mut events);
        self.log_events(now, &events);
        events
    }

    /// The transition body. Pushes exactly one `NoOp` for ignored input and
    /// otherwise fully applies one flip or one resolution; no branch leaves
    /// the session half-written.
    fn apply_selection(&mut self, now: Duration, card_id: CardId, events: &mut Vec<GameEvent>) {
        let Some(session) = self.session.as_mut() else {
            events.push(GameEvent::NoOp);
            return;
        };
        if session.is_won()
            || session.input_locked
            || session.selected.first() == Some(&card_id)
        {
            events.push(GameEvent::NoOp);
            return;
        }
        match self.cards.get(card_id.index()) {
            Some(card) if card.is_face_down() => {}
            _ => {
                events.push(GameEvent::NoOp);
                return;
            }
        }

        // First flip of the session starts the clock and the ticker.
        if session.started_at.is_none() {
            session.started_at = Some(now);
            session.last_move_at = Some(now);
            self.tick_due = Some(now + self.config.tick_interval);
            events.push(GameEvent::TimerStarted);
        }

        self.cards[card_id.index()].state = CardState::FaceUp;

        if session.selected.is_empty() {
            // Holding the first of a pair; not a move yet.
            session.selected.push(card_id);
            events.push(GameEvent::FlipOnly { card: card_id });
        } else {
            let first_id = session.selected[0];
            session.selected.push(card_id);
            session.moves += 1;

            let is_match = self.cards[first_id.index()].pair == self.cards[card_id.index()].pair;
            if is_match {
                session.matched_pairs += 1;
                session.correct_streak += 1;

                let since_prior = session
                    .last_move_at
                    .map(|t| now.saturating_sub(t).as_secs_f64())
                    .unwrap_or(NO_PRIOR_MOVE_SECS);
                let points = self
                    .config
                    .scoring
                    .match_award(session.correct_streak, since_prior);
                session.score += points;

                self.cards[first_id.index()].state = CardState::Matched;
                self.cards[card_id.index()].state = CardState::Matched;
                session.selected.clear();

                events.push(GameEvent::Matched {
                    first: first_id,
                    second: card_id,
                    points,
                    score: session.score,
                });

                if session.matched_pairs == session.total_pairs {
                    session.ended_at = Some(now);
                    session.status = SessionStatus::Won;
                    self.tick_due = None;

                    let bonus = self
                        .config
                        .scoring
                        .finalization_bonus(session.moves, session.total_pairs);
                    session.score += bonus;

                    let summary = WinSummary {
                        final_score: session.score,
                        normalized_percent: self
                            .config
                            .scoring
                            .normalized_percent(session.score, session.total_pairs),
                        moves: session.moves,
                        total_pairs: session.total_pairs,
                        elapsed_seconds: session.elapsed_seconds().unwrap_or(0.0),
                    };
                    log::info!(
                        "game won: {} pts ({}%), {} moves, {:.1}s",
                        summary.final_score,
                        summary.normalized_percent,
                        summary.moves,
                        summary.elapsed_seconds
                    );
                    events.push(GameEvent::GameWon(summary));
                }
            } else {
                session.correct_streak = 0;
                session.input_locked = true;
                self.settle_due = Some(now + self.config.settle_delay);

                events.push(GameEvent::Mismatched {
                    first: first_id,
                    second: card_id,
                });
            }

            session.last_move_at = Some(now);
        }
    }

    /// The host's periodic heartbeat (~`tick_interval`).
    ///
    /// Fires the settle unlock when its delay has passed and emits an
    /// elapsed-time notification while the session clock runs.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let now = self.clock.now();
        let mut events = Vec::new();
        self.fire_settle_if_due(now, &mut events);

        if let (Some(due), Some(session)) = (self.tick_due, self.session.as_ref()) {
            if now >= due {
                if let Some(start) = session.started_at {
                    events.push(GameEvent::TimerTick {
                        elapsed_seconds: now.saturating_sub(start).as_secs_f64(),
                    });
                }
                self.tick_due = Some(now + self.config.tick_interval);
            }
        }

        self.log_events(now, &events);
        events
    }

    fn cancel_timers(&mut self) {
        self.settle_due = None;
        self.tick_due = None;
    }

    /// Run the mismatch unlock if its deadline has passed: the held cards
    /// (mismatched FaceUp by invariant; matched cards never stay selected)
    /// turn back over and input is accepted again.
    fn fire_settle_if_due(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        match self.settle_due {
            Some(due) if now >= due => {}
            _ => return,
        }
        self.settle_due = None;

        if let Some(session) = self.session.as_mut() {
            for id in session.selected.drain(..) {
                if let Some(card) = self.cards.get_mut(id.index()) {
                    card.state = CardState::FaceDown;
                }
            }
            session.input_locked = false;
            events.push(GameEvent::BoardUnlocked);
        }
    }

    fn log_events(&mut self, now: Duration, events: &[GameEvent]) {
        for event in events {
            if event.is_loggable() {
                self.history.push_back(EventRecord::new(now, event.clone()));
            }
        }
    }
}
