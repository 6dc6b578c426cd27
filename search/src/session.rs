//! Per-keystroke search orchestration with stale result suppression.

use crate::dedupe::dedupe;
use crate::matcher::fuzzy_match;
use crate::results::{Resolved, SessionEvent};
use glossa_core::Index;
use glossa_core::types::SearchConfig;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Receives every event the session emits.
///
/// Invoked while the session's state lock is held, so it must not call back
/// into the session. Forwarding to a channel is the usual implementation.
pub type EventSink = Arc<dyn Fn(SessionEvent) + Send + Sync>;

/// Identifies one search. Tokens increase with every input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Searching(QueryToken),
}

struct Latch {
    state: SessionState,
    last_issued: u64,
}

/// Shared by the session and its in-flight searches.
#[derive(Clone)]
struct Emitter {
    latch: Arc<Mutex<Latch>>,
    sink: EventSink,
}

impl Emitter {
    fn lock(&self) -> MutexGuard<'_, Latch> {
        self.latch.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Emits the result only if its token is still the active one.
    ///
    /// The check and the emission happen under one lock, so an input change
    /// cannot slip in between.
    fn emit_if_current(&self, completed: CompletedSearch) -> bool {
        let mut latch = self.lock();
        if latch.state != SessionState::Searching(completed.token) {
            debug!(
                query = %completed.query,
                token = completed.token.0,
                "discarding stale search result"
            );
            return false;
        }
        latch.state = SessionState::Idle;
        (self.sink)(SessionEvent::Results(completed.outcome));
        true
    }
}

/// A search that has been started but not run.
pub struct PendingSearch {
    token: QueryToken,
    query: String,
    index: Arc<Index>,
    config: SearchConfig,
}

impl PendingSearch {
    pub fn token(&self) -> QueryToken {
        self.token
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matches and dedupes against the index. Does not touch session state.
    pub fn run(self) -> CompletedSearch {
        let ranked = fuzzy_match(&self.query, self.index.aliases(), &self.config);
        let outcome = match dedupe(&ranked, &self.index) {
            Ok(mut entries) => {
                entries.truncate(self.config.result_limit);
                Resolved::from_entries(entries)
            }
            Err(miss) => {
                warn!(%miss, query = %self.query, "index lookup failed, reporting no match");
                Resolved::NoMatch
            }
        };

        CompletedSearch {
            token: self.token,
            query: self.query,
            outcome,
        }
    }
}

/// A finished search waiting to be accepted or discarded.
#[derive(Debug, Clone)]
pub struct CompletedSearch {
    pub token: QueryToken,
    pub query: String,
    pub outcome: Resolved,
}

/// Entry point for the UI: one session per input box.
pub struct SearchSession {
    index: Arc<Index>,
    config: SearchConfig,
    emitter: Emitter,
}

/// Create operations.
impl SearchSession {
    pub fn new(index: Arc<Index>, config: SearchConfig, sink: EventSink) -> Self {
        Self {
            index,
            config,
            emitter: Emitter {
                latch: Arc::new(Mutex::new(Latch {
                    state: SessionState::Idle,
                    last_issued: 0,
                })),
                sink,
            },
        }
    }
}

/// Search operations.
impl SearchSession {
    /// Handles an input change.
    ///
    /// Empty input clears synchronously and returns `None`. Otherwise the
    /// search runs on a new thread; the handle yields whether its result was
    /// emitted. Dropping the handle is fine.
    pub fn on_input_changed(&self, word: &str) -> Option<JoinHandle<bool>> {
        let pending = self.begin(word)?;
        let emitter = self.emitter.clone();
        Some(thread::spawn(move || emitter.emit_if_current(pending.run())))
    }

    /// Supersedes any active search with a new one for `word`.
    ///
    /// Empty input moves to `Idle` and emits `Cleared` immediately.
    pub fn begin(&self, word: &str) -> Option<PendingSearch> {
        let mut latch = self.emitter.lock();
        latch.last_issued += 1;
        let token = QueryToken(latch.last_issued);

        if word.is_empty() {
            latch.state = SessionState::Idle;
            (self.emitter.sink)(SessionEvent::Cleared);
            return None;
        }

        latch.state = SessionState::Searching(token);
        debug!(query = word, token = token.0, "search started");

        Some(PendingSearch {
            token,
            query: word.to_string(),
            index: Arc::clone(&self.index),
            config: self.config.clone(),
        })
    }

    /// Emits a finished search if it is still current. Returns whether it was.
    pub fn complete(&self, completed: CompletedSearch) -> bool {
        self.emitter.emit_if_current(completed)
    }

    pub fn state(&self) -> SessionState {
        self.emitter.lock().state
    }
}

/// Selection operations.
impl SearchSession {
    /// Resolves a candidate picked from a list directly through the index.
    pub fn on_candidate_selected(&self, alias: &str) -> Resolved {
        match self.index.lookup(alias) {
            Some(entry) => Resolved::Single(Arc::clone(entry)),
            None => Resolved::NoMatch,
        }
    }

    pub fn index(&self) -> &Index {
        &self.index
    }
}
