//! Recursive descent parser for the pattern language.
//!
//! ```text
//! expression -> subexpr EOF
//! subexpr    -> seq ('|' seq)*
//! seq        -> subseq | ε
//! subseq     -> repeat subseq | repeat
//! repeat     -> factor ('*' | '+')*
//! factor     -> '(' subexpr ')' | CHARACTER
//! ```
//!
//! Concatenation nests to the right and union to the left. A run of postfix
//! operators folds into one repetition (`a+*+` is `a*`), and groups may nest
//! at most [`DEFAULT_NEST_LIMIT`] deep unless configured otherwise.

use crate::error::{Error, Result};
use crate::syntax::ast::Node;
use crate::syntax::lexer::Lexer;
use crate::syntax::token::{Token, TokenKind};
use log::trace;

/// How deeply parenthesized groups may nest by default.
pub const DEFAULT_NEST_LIMIT: u32 = 250;

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    end: usize,
    depth: u32,
    nest_limit: u32,
}

impl Parser {
    pub fn new(pattern: &str) -> Result<Self> {
        let tokens = Lexer::new(pattern).scan()?;
        Ok(Self {
            tokens,
            position: 0,
            end: pattern.len(),
            depth: 0,
            nest_limit: DEFAULT_NEST_LIMIT,
        })
    }

    /// Set how deeply groups may nest before parsing fails with
    /// [`Error::NestLimitExceeded`].
    pub fn nest_limit(mut self, limit: u32) -> Self {
        self.nest_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Node> {
        let node = self.subexpr()?;
        self.expect(TokenKind::Eof)?;
        trace!("parsed {node}");
        Ok(node)
    }

    fn look(&self) -> Token {
        self.tokens
            .get(self.position)
            .copied()
            .unwrap_or_else(|| Token::eof(self.end))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.look();
        if token.kind != kind {
            return Err(Error::UnexpectedToken {
                expected: kind,
                found: token.kind,
                offset: token.offset,
            });
        }
        self.position += 1;
        Ok(token)
    }

    fn starts_factor(&self) -> bool {
        matches!(self.look().kind, TokenKind::Character | TokenKind::LParen)
    }

    fn subexpr(&mut self) -> Result<Node> {
        let mut node = self.seq()?;
        while self.look().kind == TokenKind::Union {
            self.position += 1;
            let right = self.seq()?;
            node = Node::union(node, right);
        }
        Ok(node)
    }

    fn seq(&mut self) -> Result<Node> {
        if self.starts_factor() {
            self.subseq()
        } else {
            Ok(Node::Empty)
        }
    }

    fn subseq(&mut self) -> Result<Node> {
        let mut heads = Vec::new();
        let mut node = self.repeat()?;
        while self.starts_factor() {
            heads.push(node);
            node = self.repeat()?;
        }
        while let Some(head) = heads.pop() {
            node = Node::concat(head, node);
        }
        Ok(node)
    }

    fn repeat(&mut self) -> Result<Node> {
        let mut node = self.factor()?;
        loop {
            match self.look().kind {
                TokenKind::Star => node = Node::repeat_star(node),
                TokenKind::Plus => node = Node::repeat_plus(node),
                _ => return Ok(node),
            }
            self.position += 1;
        }
    }

    fn factor(&mut self) -> Result<Node> {
        let token = self.look();
        if token.kind == TokenKind::LParen {
            if self.depth >= self.nest_limit {
                return Err(Error::NestLimitExceeded {
                    limit: self.nest_limit,
                    offset: token.offset,
                });
            }
            self.position += 1;
            self.depth += 1;
            let node = self.subexpr()?;
            self.expect(TokenKind::RParen)?;
            self.depth -= 1;
            return Ok(node);
        }
        let token = self.expect(TokenKind::Character)?;
        Ok(Node::Literal(token.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pattern: &str) -> Result<Node> {
        Parser::new(pattern)?.parse()
    }

    fn lit(c: char) -> Node {
        Node::Literal(c)
    }

    #[test]
    fn test_parse_union() {
        assert_eq!(parse("a|b").unwrap(), Node::union(lit('a'), lit('b')));
        assert_eq!(
            parse("a|b|c").unwrap(),
            Node::union(Node::union(lit('a'), lit('b')), lit('c'))
        );
    }

    #[test]
    fn test_parse_concat_nests_right() {
        assert_eq!(
            parse("abc").unwrap(),
            Node::concat(lit('a'), Node::concat(lit('b'), lit('c')))
        );
    }

    #[test]
    fn test_parse_repeat_binds_tightest() {
        assert_eq!(
            parse("ab*").unwrap(),
            Node::concat(lit('a'), Node::star(lit('b')))
        );
        assert_eq!(
            parse("(a|b)+").unwrap(),
            Node::plus(Node::union(lit('a'), lit('b')))
        );
        assert_eq!(parse("a*+").unwrap(), Node::star(lit('a')));
        assert_eq!(parse("a+*").unwrap(), Node::star(lit('a')));
        assert_eq!(parse("(a+)+").unwrap(), Node::plus(lit('a')));
    }

    #[test]
    fn test_parse_escape() {
        assert_eq!(
            parse(r"a\*").unwrap(),
            Node::concat(lit('a'), lit('*'))
        );
        assert_eq!(parse(r"\(").unwrap(), lit('('));
    }

    #[test]
    fn test_parse_empty_alternatives() {
        assert_eq!(parse("").unwrap(), Node::Empty);
        assert_eq!(parse("()").unwrap(), Node::Empty);
        assert_eq!(parse("a|").unwrap(), Node::union(lit('a'), Node::Empty));
        assert_eq!(parse("|a").unwrap(), Node::union(Node::Empty, lit('a')));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse("a)"),
            Err(Error::UnexpectedToken {
                expected: TokenKind::Eof,
                found: TokenKind::RParen,
                offset: 1,
            })
        );
        assert_eq!(
            parse("(ab"),
            Err(Error::UnexpectedToken {
                expected: TokenKind::RParen,
                found: TokenKind::Eof,
                offset: 3,
            })
        );
        assert_eq!(
            parse("*a"),
            Err(Error::UnexpectedToken {
                expected: TokenKind::Eof,
                found: TokenKind::Star,
                offset: 0,
            })
        );
        assert_eq!(parse("a\\"), Err(Error::TrailingEscape { offset: 1 }));
    }

    #[test]
    fn test_error_message() {
        let err = parse("(a").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error at offset 2: expected RPAREN, found EOF"
        );
    }

    #[test]
    fn test_parse_long_sequence() {
        let pattern = "ab".repeat(10_000);
        let mut node = &parse(&pattern).unwrap();
        let mut length = 1;
        while let Node::Concat(head, tail) = node {
            assert!(matches!(**head, Node::Literal(_)));
            length += 1;
            node = tail.as_ref();
        }

        assert_eq!(length, 20_000);
        assert_eq!(*node, lit('b'));
    }

    #[test]
    fn test_parse_stacked_postfix() {
        let pattern = format!("a{}", "+".repeat(10_000));
        assert_eq!(parse(&pattern).unwrap(), Node::plus(lit('a')));
    }

    #[test]
    fn test_nest_limit() {
        let nested = |depth: usize| format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

        assert_eq!(parse(&nested(250)).unwrap(), lit('a'));
        assert_eq!(
            parse(&nested(10_000)),
            Err(Error::NestLimitExceeded {
                limit: DEFAULT_NEST_LIMIT,
                offset: 250,
            })
        );
        assert_eq!(
            Parser::new("((a))").unwrap().nest_limit(1).parse(),
            Err(Error::NestLimitExceeded {
                limit: 1,
                offset: 1,
            })
        );
        assert!(Parser::new("(a)(b)").unwrap().nest_limit(1).parse().is_ok());
    }
}
