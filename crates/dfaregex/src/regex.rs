//! Compiling syntax trees and patterns into matchers.

use crate::automaton::{Context, Dfa, Nfa, Runtime, to_dfa};
use crate::error::Result;
use crate::syntax::{DEFAULT_NEST_LIMIT, Node, Parser};
use log::debug;

/// Options for [`compile_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompileConfig {
    /// Merge equivalent DFA states after subset construction.
    pub minimize: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self { minimize: true }
    }
}

/// Assemble `node` into an epsilon-NFA with a fresh [`Context`].
pub fn assemble(node: &Node) -> Nfa {
    let mut ctx = Context::new();
    let nfa = node.assemble(&mut ctx).build();
    debug!(
        "assembled {} states, initial {}, accepts {}",
        ctx.minted(),
        nfa.initial(),
        nfa.accepts()
    );
    debug!("NFA rules:\n{}", nfa.rules());
    nfa
}

/// Compile a syntax tree into a minimized DFA.
pub fn compile(node: &Node) -> Dfa {
    compile_with(node, &CompileConfig::default())
}

pub fn compile_with(node: &Node, config: &CompileConfig) -> Dfa {
    let mut dfa = to_dfa(assemble(node));
    if config.minimize {
        dfa.minimize();
    }
    debug!("DFA rules:\n{}", dfa.rules());
    dfa
}

/// A compiled pattern.
///
/// # Example
///
/// ```
/// use dfaregex::Regex;
///
/// let re = Regex::new("(a|b)+").unwrap();
/// assert!(re.is_match("abba"));
/// assert!(!re.is_match(""));
/// ```
#[derive(Clone, Debug)]
pub struct Regex {
    pattern: String,
    dfa: Dfa,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self> {
        RegexBuilder::new(pattern).build()
    }

    /// Whether the whole of `input` is in the language of this pattern.
    pub fn is_match(&self, input: &str) -> bool {
        self.runtime().matches(input)
    }

    /// A fresh runtime over this pattern's DFA.
    pub fn runtime(&self) -> Runtime<'_> {
        self.dfa.runtime()
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

pub struct RegexBuilder {
    pattern: String,
    config: CompileConfig,
    nest_limit: u32,
}

impl RegexBuilder {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_owned(),
            config: CompileConfig::default(),
            nest_limit: DEFAULT_NEST_LIMIT,
        }
    }

    pub fn minimize(&mut self, yes: bool) -> &mut Self {
        self.config.minimize = yes;
        self
    }

    /// How deeply parenthesized groups may nest.
    pub fn nest_limit(&mut self, limit: u32) -> &mut Self {
        self.nest_limit = limit;
        self
    }

    pub fn build(&self) -> Result<Regex> {
        let node = Parser::new(&self.pattern)?
            .nest_limit(self.nest_limit)
            .parse()?;
        debug!("pattern {:?} parsed as {node}", self.pattern);
        Ok(Regex {
            pattern: self.pattern.clone(),
            dfa: compile_with(&node, &self.config),
        })
    }
}
