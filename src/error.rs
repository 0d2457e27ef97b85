use thiserror::Error;

/// Errors raised while parsing a puzzle input. Any of these rejects the
/// whole file; no partial model is ever returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: cannot parse {token:?} as a number")]
    BadInt { line: usize, token: String },

    #[error("line {line}: {expected}")]
    Malformed { line: usize, expected: &'static str },

    #[error("line {line}: unexpected character {found:?}")]
    UnexpectedChar { line: usize, found: char },
}

impl ParseError {
    pub fn bad_int(line: usize, token: &str) -> ParseError {
        ParseError::BadInt { line, token: token.to_string() }
    }
}

/// Parse one integer token, reporting the offending token and 1-based line
/// number on failure.
pub fn parse_num(line: usize, token: &str) -> Result<u64, ParseError> {
    token.trim().parse().map_err(|_| ParseError::bad_int(line, token))
}
