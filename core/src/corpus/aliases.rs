//! Parser for the bracketed alias list of a corpus unit.
//!
//! Grammar: `[` (string (`,` string)* `,`?)? `]`, where a string is single-
//! or double-quoted and may contain the escapes `\\`, `\"`, `\'`, `\n` and
//! `\t`. Whitespace is allowed between tokens. Corpus files may come from
//! third parties, so the list is read token by token and never evaluated.

use crate::error::AliasParseError;
use std::iter::Peekable;
use std::str::CharIndices;

/// Parses the text that follows the alias prefix, e.g. `["hound", 'pup']`.
pub fn parse_alias_list(input: &str) -> Result<Vec<String>, AliasParseError> {
    let mut cursor = Cursor::new(input);

    cursor.skip_whitespace();
    match cursor.next() {
        Some((_, '[')) => {}
        _ => return Err(AliasParseError::MissingOpenBracket),
    }

    let mut aliases = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.next() {
            None => return Err(AliasParseError::UnterminatedList),
            Some((_, ']')) => break,
            Some((start, quote @ ('"' | '\''))) => {
                aliases.push(cursor.quoted(start, quote)?);

                cursor.skip_whitespace();
                match cursor.next() {
                    None => return Err(AliasParseError::UnterminatedList),
                    Some((_, ',')) => {}
                    Some((_, ']')) => break,
                    Some((position, found)) => {
                        return Err(AliasParseError::UnexpectedChar { found, position });
                    }
                }
            }
            Some((position, found)) => {
                return Err(AliasParseError::UnexpectedChar { found, position });
            }
        }
    }

    cursor.skip_whitespace();
    if let Some((position, _)) = cursor.next() {
        return Err(AliasParseError::TrailingInput { position });
    }

    Ok(aliases)
}

struct Cursor<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    /// Reads a string body up to the closing `quote`. The opening quote at
    /// `start` has already been consumed.
    fn quoted(&mut self, start: usize, quote: char) -> Result<String, AliasParseError> {
        let mut out = String::new();
        loop {
            match self.next() {
                None => return Err(AliasParseError::UnterminatedString { start }),
                Some((_, c)) if c == quote => return Ok(out),
                Some((_, '\\')) => match self.next() {
                    None => return Err(AliasParseError::UnterminatedString { start }),
                    Some((_, c @ ('\\' | '"' | '\''))) => out.push(c),
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 't')) => out.push('\t'),
                    Some((position, found)) => {
                        return Err(AliasParseError::InvalidEscape { found, position });
                    }
                },
                Some((_, c)) => out.push(c),
            }
        }
    }
}
