use crate::syntax::TokenKind;
use thiserror::Error;

/// Errors raised while turning a pattern string into a syntax tree.
///
/// Compilation of a well-formed tree and matching never fail, so this type
/// only covers the front end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("syntax error at offset {offset}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        offset: usize,
    },

    #[error("syntax error at offset {offset}: escape character at end of pattern")]
    TrailingEscape { offset: usize },

    #[error("syntax error at offset {offset}: groups nested deeper than {limit}")]
    NestLimitExceeded { limit: u32, offset: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
