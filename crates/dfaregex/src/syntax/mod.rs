//! Front end: pattern string to syntax tree.

mod ast;
mod lexer;
mod parser;
mod token;

pub use ast::Node;
pub use lexer::Lexer;
pub use parser::{DEFAULT_NEST_LIMIT, Parser};
pub use token::{Token, TokenKind};

use crate::error::Result;

/// Parse `pattern` into a syntax tree.
pub fn parse(pattern: &str) -> Result<Node> {
    Parser::new(pattern)?.parse()
}
