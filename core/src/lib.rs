//! Glossa core library.
//!
//! Owns the data model (entries and their aliases), the corpus loader that
//! builds the alias index at startup, and the user-facing configuration.

pub mod corpus;
pub mod error;
pub mod types;

pub use corpus::{Diagnostic, Index, IndexBuilder, LoadReport, load_dir};
