use crate::matcher::MatchCandidate;
use glossa_core::Index;
use glossa_core::types::Entry;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// A ranked alias had no entry in the index it was drawn from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("matched alias {alias:?} is missing from the index")]
pub struct LookupMiss {
    pub alias: String,
}

/// Resolves ranked aliases to entries, keeping the first occurrence of each
/// title so every entry appears once, at the rank of its best alias.
pub fn dedupe(
    ranked: &[MatchCandidate<'_>],
    index: &Index,
) -> Result<Vec<Arc<Entry>>, LookupMiss> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for candidate in ranked {
        let entry = index.get(candidate.key).ok_or_else(|| LookupMiss {
            alias: candidate.key.to_string(),
        })?;
        if seen.insert(entry.title()) {
            entries.push(Arc::clone(entry));
        }
    }

    Ok(entries)
}
