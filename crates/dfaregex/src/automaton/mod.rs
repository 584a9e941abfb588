//! Finite automata for regular expression matching.
//!
//! This module provides the pipeline from a syntax tree to a matcher:
//! - Thompson construction of epsilon-NFA fragments
//! - Epsilon closure computation and epsilon elimination
//! - Subset construction (NFA to DFA conversion)
//! - Pairwise DFA state merging
//! - A DFA runtime for whole-string matching
//! - Graphviz DOT export

mod dfa;
mod dot;
mod fragment;
mod nfa;
mod rule;
mod runtime;
mod state;
mod subset_construction;
mod symbol;

pub use dfa::Dfa;
pub use dot::ToDot;
pub use fragment::Fragment;
pub use nfa::Nfa;
pub use rule::{DfaRules, NfaRules, Rule};
pub use runtime::Runtime;
pub use state::{Context, State, StateSet};
pub use subset_construction::{subset_construction, to_dfa};
pub use symbol::{EPSILON, Symbol, is_epsilon};
