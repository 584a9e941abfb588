//! Converts a pattern string into tokens.

use crate::error::{Error, Result};
use crate::syntax::token::{Token, TokenKind};

pub struct Lexer<'a> {
    pattern: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self { pattern }
    }

    /// Scan the whole pattern. The returned list does not end with an `Eof`
    /// token; the parser supplies one when the list runs out.
    ///
    /// A backslash makes the following character a literal, whatever it is.
    pub fn scan(&self) -> Result<Vec<Token>> {
        let mut tokens = Vec::with_capacity(self.pattern.len());
        let mut chars = self.pattern.char_indices();

        while let Some((offset, c)) = chars.next() {
            let token = match c {
                '|' => Token::new(c, TokenKind::Union, offset),
                '(' => Token::new(c, TokenKind::LParen, offset),
                ')' => Token::new(c, TokenKind::RParen, offset),
                '*' => Token::new(c, TokenKind::Star, offset),
                '+' => Token::new(c, TokenKind::Plus, offset),
                '\\' => match chars.next() {
                    Some((_, escaped)) => Token::new(escaped, TokenKind::Character, offset),
                    None => return Err(Error::TrailingEscape { offset }),
                },
                _ => Token::new(c, TokenKind::Character, offset),
            };
            tokens.push(token);
        }

        Ok(tokens)
    }
}
