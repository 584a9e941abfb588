//! A small regular expression engine built on deterministic finite automata.
//!
//! Patterns support literals, `|`, `*`, `+`, grouping with parentheses and
//! `\` escapes. A pattern is parsed into a syntax tree, assembled into an
//! epsilon-NFA by Thompson construction, made epsilon-free, determinized by
//! subset construction and finally reduced by merging equivalent states.
//! Matching is always against the whole input.

pub mod automaton;
mod error;
mod regex;
pub mod syntax;

pub use error::{Error, Result};
pub use regex::{CompileConfig, Regex, RegexBuilder, assemble, compile, compile_with};

#[cfg(test)]
mod properties;
