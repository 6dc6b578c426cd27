mod app;

pub use app::{CaseMatching, ConfigError, CorpusConfig, GlossaConfig, SearchConfig};
