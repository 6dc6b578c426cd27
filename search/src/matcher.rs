//! Fuzzy subsequence matching over the alias sequence.

use crate::config::{case_matching, normalization};
use glossa_core::types::{Alias, SearchConfig};
use nucleo::pattern::{Atom, AtomKind};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};

/// One alias that matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate<'a> {
    pub key: &'a Alias,
    /// Higher is better. Zero for every candidate of an empty query.
    pub score: u32,
    /// Offsets of the matched characters in `key.chars()`, ascending.
    pub positions: Vec<usize>,
}

/// Matches `query` as a subsequence of each candidate and ranks the hits.
///
/// The nucleo score (contiguous runs, word boundaries) dominates. Within an
/// equal nucleo score an earlier first match wins, then a shorter candidate.
/// Remaining ties keep candidate order. An empty query returns every
/// candidate unranked.
///
/// Positions and lengths are counted in chars. The haystack is handed to
/// nucleo one char per slot (not one grapheme per slot), so nucleo's indices
/// are char offsets as well.
pub fn fuzzy_match<'a>(
    query: &str,
    candidates: &'a [Alias],
    config: &SearchConfig,
) -> Vec<MatchCandidate<'a>> {
    if query.is_empty() {
        return candidates
            .iter()
            .map(|key| MatchCandidate {
                key,
                score: 0,
                positions: Vec::new(),
            })
            .collect();
    }

    let atom = Atom::new(
        query,
        case_matching(config),
        normalization(config),
        AtomKind::Fuzzy,
        false,
    );
    let mut matcher = Matcher::new(NucleoConfig::DEFAULT);
    let mut chars: Vec<char> = Vec::new();
    let mut indices = Vec::new();

    let mut matches: Vec<MatchCandidate<'a>> = candidates
        .iter()
        .filter_map(|key| {
            indices.clear();
            chars.clear();
            chars.extend(key.chars());
            let len = chars.len();

            let haystack = if key.is_ascii() {
                Utf32Str::Ascii(key.as_bytes())
            } else {
                Utf32Str::Unicode(&chars)
            };
            let raw = atom.indices(haystack, &mut matcher, &mut indices)?;

            indices.sort_unstable();
            indices.dedup();
            let first = indices.first().map_or(0, |&i| i as usize);

            Some(MatchCandidate {
                key,
                score: rank(raw, first, len),
                positions: indices.iter().map(|&i| i as usize).collect(),
            })
        })
        .collect();

    // Stable: equal scores keep candidate order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Packs the nucleo score with earliness and brevity into one ordering key.
fn rank(raw: u16, first: usize, len: usize) -> u32 {
    let earliness = 255 - first.min(255) as u32;
    let brevity = 255 - len.min(255) as u32;
    (u32::from(raw) << 16) | (earliness << 8) | brevity
}
