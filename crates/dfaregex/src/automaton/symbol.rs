//! Symbol types for automata transitions.

use std::fmt;

/// The input symbol of a transition rule.
///
/// `Epsilon` only ever appears in an NFA before epsilon elimination. A DFA
/// and the runtime see literal characters exclusively.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Symbol {
    Char(char),
    Epsilon,
}

/// Special symbol representing epsilon (empty) transitions.
pub const EPSILON: Symbol = Symbol::Epsilon;

/// Check if a symbol is an epsilon transition.
#[inline]
pub fn is_epsilon(symbol: Symbol) -> bool {
    symbol == EPSILON
}

impl Symbol {
    /// The literal character, or `None` for epsilon.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(c),
            Symbol::Epsilon => None,
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}
