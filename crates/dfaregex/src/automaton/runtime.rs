//! Single-pass matching over a compiled DFA.

use crate::automaton::dfa::Dfa;
use crate::automaton::state::State;

/// Replays DFA transitions over an input string.
///
/// A runtime borrows its DFA read-only and owns only the current-state
/// cursor, so any number of runtimes can share one DFA. Every call to
/// [`Runtime::matches`] starts over from the initial state.
#[derive(Debug, Clone)]
pub struct Runtime<'a> {
    dfa: &'a Dfa,
    current: State,
}

impl<'a> Runtime<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            current: dfa.initial(),
        }
    }

    /// The state the cursor is currently on.
    pub fn current(&self) -> State {
        self.current
    }

    /// Move the cursor back to the initial state.
    pub fn reset(&mut self) {
        self.current = self.dfa.initial();
    }

    /// Execute one transition. Returns `false` and leaves the cursor in
    /// place when no rule exists for the current state and `c`.
    fn transit(&mut self, c: char) -> bool {
        match self.dfa.transition(self.current, c) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    fn is_accept(&self) -> bool {
        self.dfa.is_accept(self.current)
    }

    /// Whether the DFA accepts `input` as a whole.
    ///
    /// Matching stops at the first character without a rule.
    pub fn matches(&mut self, input: &str) -> bool {
        self.reset();
        for c in input.chars() {
            if !self.transit(c) {
                return false;
            }
        }
        self.is_accept()
    }
}
