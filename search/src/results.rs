//! Search output types.

use glossa_core::types::Entry;
use std::sync::Arc;

/// What a search or a selection resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A single entry, from a direct alias selection.
    Single(Arc<Entry>),
    /// Ranked, deduplicated entries. Never empty.
    Many(Vec<Arc<Entry>>),
    NoMatch,
}

impl Resolved {
    /// Wraps search output; an empty list becomes `NoMatch`.
    pub fn from_entries(entries: Vec<Arc<Entry>>) -> Self {
        if entries.is_empty() {
            Resolved::NoMatch
        } else {
            Resolved::Many(entries)
        }
    }

    pub fn entries(&self) -> &[Arc<Entry>] {
        match self {
            Resolved::Single(entry) => std::slice::from_ref(entry),
            Resolved::Many(entries) => entries,
            Resolved::NoMatch => &[],
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries().iter().map(|e| e.title()).collect()
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Resolved::NoMatch)
    }
}

/// Delivered to the session's sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Input became empty; any displayed results should be cleared.
    Cleared,
    /// Result of the most recent search.
    Results(Resolved),
}
