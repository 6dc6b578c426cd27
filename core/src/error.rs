use thiserror::Error;

/// Failure to read an `aliases: [...]` metadata line.
///
/// Positions are byte offsets into the text following the alias prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasParseError {
    #[error("alias list must start with '['")]
    MissingOpenBracket,

    #[error("alias list is missing its closing ']'")]
    UnterminatedList,

    #[error("unterminated string starting at byte {start}")]
    UnterminatedString { start: usize },

    #[error("unexpected character {found:?} at byte {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("invalid escape sequence '\\{found}' at byte {position}")]
    InvalidEscape { found: char, position: usize },

    #[error("unexpected input after closing ']' at byte {position}")]
    TrailingInput { position: usize },
}
