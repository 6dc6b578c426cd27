use glossa_core::types::{CaseMatching, SearchConfig};
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization};

pub(crate) fn case_matching(config: &SearchConfig) -> NucleoCaseMatching {
    match config.case_matching {
        CaseMatching::Sensitive => NucleoCaseMatching::Respect,
        CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
        CaseMatching::Smart => NucleoCaseMatching::Smart,
    }
}

pub(crate) fn normalization(config: &SearchConfig) -> Normalization {
    if config.unicode_normalization {
        Normalization::Smart
    } else {
        Normalization::Never
    }
}
