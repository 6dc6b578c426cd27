//! Corpus loading and the alias index.
//!
//! Design:
//! - Each corpus unit becomes one `Entry` (title = file stem, body = full text).
//! - A unit may declare extra lookup keys on an `aliases: [...]` line; the title
//!   is always registered as an alias too.
//! - Registration is last-writer-wins per alias. The alias keeps its original
//!   position in the candidate sequence, so the sequence never holds duplicates.
//! - Loading never fails. Problems are collected in a `LoadReport` and logged,
//!   and the caller always gets a usable (possibly empty) `Index`.

mod aliases;

pub use aliases::parse_alias_list;

use crate::error::AliasParseError;
use crate::types::{Alias, AliasError, CorpusConfig, Entry};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Alias → entry lookup table plus the ordered candidate sequence.
///
/// Read-only once built; share it across searches behind an `Arc`.
#[derive(Debug, Default)]
pub struct Index {
    entries: HashMap<Alias, Arc<Entry>>,
    aliases: Vec<Alias>,
}

impl Index {
    /// Returns the entry registered under `alias`.
    pub fn get(&self, alias: &Alias) -> Option<&Arc<Entry>> {
        self.entries.get(alias)
    }

    /// Looks up a raw string, applying the same normalization as registration.
    pub fn lookup(&self, alias: &str) -> Option<&Arc<Entry>> {
        let alias = Alias::try_new(alias).ok()?;
        self.entries.get(&alias)
    }

    /// All known aliases in load order, without duplicates.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// True if nothing could be loaded.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// A non-fatal problem found while loading the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The alias line could not be parsed; only the title was registered.
    MalformedAliases {
        unit: String,
        error: AliasParseError,
    },
    /// One declared alias was rejected; the rest of the unit was registered.
    InvalidAlias {
        unit: String,
        raw: String,
        error: AliasError,
    },
    /// The unit's name is not a usable title; the unit was skipped.
    InvalidTitle { unit: String, error: AliasError },
    /// An alias was re-registered by a later unit, which now owns it.
    AliasOverwritten {
        alias: Alias,
        previous: String,
        current: String,
    },
    /// A file or directory could not be read.
    Unreadable { path: PathBuf, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedAliases { unit, error } => {
                write!(f, "{unit}: malformed alias line ({error}), registered by title only")
            }
            Diagnostic::InvalidAlias { unit, raw, error } => {
                write!(f, "{unit}: skipped alias {raw:?} ({error})")
            }
            Diagnostic::InvalidTitle { unit, error } => {
                write!(f, "{unit}: unusable title ({error}), unit skipped")
            }
            Diagnostic::AliasOverwritten {
                alias,
                previous,
                current,
            } => {
                write!(f, "alias {alias:?} moved from {previous:?} to {current:?}")
            }
            Diagnostic::Unreadable { path, reason } => {
                write!(f, "{}: unreadable ({reason})", path.display())
            }
        }
    }
}

/// Outcome of a corpus load besides the index itself.
#[derive(Debug, Default, Clone)]
pub struct LoadReport {
    /// Units that were registered (by title at least).
    pub units: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    /// Alias overwrites, which may indicate authoring mistakes in the corpus.
    pub fn overwrites(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::AliasOverwritten { .. }))
    }
}

/// Builds an `Index` one corpus unit at a time.
pub struct IndexBuilder {
    alias_prefix: String,
    index: Index,
    report: LoadReport,
}

impl IndexBuilder {
    pub fn new(alias_prefix: impl Into<String>) -> Self {
        Self {
            alias_prefix: alias_prefix.into(),
            index: Index::default(),
            report: LoadReport::default(),
        }
    }

    /// Registers one unit under its title and any declared aliases.
    pub fn add_unit(&mut self, name: &str, text: &str) {
        let title = match Alias::try_new(name) {
            Ok(title) => title,
            Err(error) => {
                self.record(Diagnostic::InvalidTitle {
                    unit: name.to_string(),
                    error,
                });
                return;
            }
        };

        let entry = Arc::new(Entry::new(title.as_str(), text));

        let declared = match self.alias_line(text) {
            None => Vec::new(),
            Some(list) => match parse_alias_list(list) {
                Ok(declared) => declared,
                Err(error) => {
                    self.record(Diagnostic::MalformedAliases {
                        unit: name.to_string(),
                        error,
                    });
                    Vec::new()
                }
            },
        };

        for raw in declared {
            match Alias::try_new(raw.as_str()) {
                Ok(alias) => self.register(alias, &entry),
                Err(error) => self.record(Diagnostic::InvalidAlias {
                    unit: name.to_string(),
                    raw,
                    error,
                }),
            }
        }
        self.register(title, &entry);

        self.report.units += 1;
    }

    /// Records a file or directory that could not be read.
    pub fn add_unreadable(&mut self, path: &Path, reason: impl fmt::Display) {
        self.record(Diagnostic::Unreadable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        });
    }

    pub fn finish(self) -> (Index, LoadReport) {
        (self.index, self.report)
    }

    /// Returns the text after the prefix on the first alias line, if any.
    fn alias_line<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.lines()
            .find_map(|line| line.strip_prefix(self.alias_prefix.as_str()))
    }

    fn register(&mut self, alias: Alias, entry: &Arc<Entry>) {
        match self.index.entries.insert(alias.clone(), Arc::clone(entry)) {
            None => self.index.aliases.push(alias),
            Some(previous) if Arc::ptr_eq(&previous, entry) => {}
            Some(previous) => self.record(Diagnostic::AliasOverwritten {
                alias,
                previous: previous.title().to_string(),
                current: entry.title().to_string(),
            }),
        }
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        warn!(%diagnostic, "corpus diagnostic");
        self.report.diagnostics.push(diagnostic);
    }
}

/// Loads every unit in `dir` whose extension matches the config.
///
/// Files are visited in name order so that the alias sequence and the winner
/// of any alias conflict are stable across runs.
pub fn load_dir(dir: &Path, config: &CorpusConfig) -> (Index, LoadReport) {
    let mut builder = IndexBuilder::new(config.alias_prefix.as_str());
    let extension = config.extension.trim_start_matches('.');

    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            builder.add_unreadable(dir, e);
            return builder.finish();
        }
    };

    let mut paths: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();
    paths.sort();

    for path in paths {
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            builder.add_unreadable(&path, "file name is not valid UTF-8");
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "loading corpus unit");
                builder.add_unit(stem, &text);
            }
            Err(e) => builder.add_unreadable(&path, e),
        }
    }

    let (index, report) = builder.finish();
    info!(
        dir = %dir.display(),
        units = report.units,
        aliases = index.len(),
        diagnostics = report.diagnostics.len(),
        "corpus loaded"
    );
    (index, report)
}
