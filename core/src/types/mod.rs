pub(crate) mod alias;
pub use alias::{Alias, AliasError, MAX_ALIAS_LENGTH};

pub(crate) mod config;
pub use config::{CaseMatching, ConfigError, CorpusConfig, GlossaConfig, SearchConfig};

pub(crate) mod entry;
pub use entry::Entry;
