//! Glossa as-you-type search.
//!
//! Turns a live query into a ranked, deduplicated list of entries.
//!
//! # Design
//!
//! - `fuzzy_match` scores every alias of the index against the query with
//!   nucleo's fuzzy matcher. It is pure and synchronous.
//! - `dedupe` maps ranked aliases to their entries and keeps only the first
//!   (best ranked) occurrence of each title.
//! - `SearchSession` runs one search per input change on a worker thread.
//!   Every input change mints a new token; a finished search only reaches the
//!   caller if its token is still current. Older searches are never aborted,
//!   their results are dropped.
//!
//! # API
//!
//! - `on_input_changed()`: starts a search (or clears on empty input)
//! - `on_candidate_selected()`: direct alias lookup
//! - `begin()` / `PendingSearch::run()` / `complete()`: the same steps with the
//!   caller deciding where and when each one runs

mod config;
mod dedupe;
mod matcher;
mod results;
mod session;

pub use dedupe::{LookupMiss, dedupe};
pub use matcher::{MatchCandidate, fuzzy_match};
pub use results::{Resolved, SessionEvent};
pub use session::{
    CompletedSearch, EventSink, PendingSearch, QueryToken, SearchSession, SessionState,
};

pub use glossa_core::types::{CaseMatching, SearchConfig};
