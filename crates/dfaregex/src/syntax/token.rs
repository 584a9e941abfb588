//! Tokens of the pattern language.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Character,
    Union,
    Star,
    Plus,
    LParen,
    RParen,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Character => "CHARACTER",
            TokenKind::Union => "UNION",
            TokenKind::Star => "STAR",
            TokenKind::Plus => "PLUS",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A token together with the character it was scanned from and its byte
/// offset in the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub value: char,
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub fn new(value: char, kind: TokenKind, offset: usize) -> Self {
        Self {
            value,
            kind,
            offset,
        }
    }

    pub fn eof(offset: usize) -> Self {
        Self::new('\0', TokenKind::Eof, offset)
    }
}
