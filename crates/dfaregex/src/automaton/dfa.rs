//! Deterministic Finite Automaton (DFA) implementation with equivalent state
//! merging.

use crate::automaton::rule::DfaRules;
use crate::automaton::runtime::Runtime;
use crate::automaton::state::{State, StateSet};
use log::{debug, trace};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

/// A Deterministic Finite Automaton.
///
/// The transition function may be partial: a missing rule means the input
/// is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    /// Initial state
    initial: State,
    /// Final (accepting) states
    accepts: StateSet,
    /// Transitions: (source, symbol) -> destination
    rules: DfaRules,
}

impl Dfa {
    pub fn new(initial: State, accepts: StateSet, rules: DfaRules) -> Self {
        Self {
            initial,
            accepts,
            rules,
        }
    }

    /// Get the initial state.
    pub fn initial(&self) -> State {
        self.initial
    }

    /// Get the accept states.
    pub fn accepts(&self) -> &StateSet {
        &self.accepts
    }

    pub fn rules(&self) -> &DfaRules {
        &self.rules
    }

    pub fn is_accept(&self, state: State) -> bool {
        self.accepts.contains(state)
    }

    /// Get the transition from a state on a symbol.
    pub fn transition(&self, source: State, symbol: char) -> Option<State> {
        self.rules.get(source, symbol)
    }

    /// The initial state plus every rule destination, in ascending order.
    pub fn states(&self) -> BTreeSet<State> {
        let mut states: BTreeSet<State> = self.rules.destinations().collect();
        states.insert(self.initial);
        states
    }

    /// Create a runtime that matches input against this DFA.
    pub fn runtime(&self) -> Runtime<'_> {
        Runtime::new(self)
    }

    /// Merge equivalent states in place.
    ///
    /// Two states are equivalent when they agree on acceptance and have the
    /// same outgoing rules, destination for destination. Each pass groups the
    /// states by that signature and merges every group into its
    /// lowest-numbered member, which is the same outcome as checking the
    /// pairs `(i, j)` with `i < j` in ascending order and merging `j` into
    /// `i`.
    ///
    /// Merges can make further rows identical, so a single pass is not
    /// enough: passes repeat until one merges nothing, and calling
    /// `minimize` on its own output is a no-op.
    ///
    /// States that are only equivalent through each other (for example two
    /// states looping into one another) are never merged, so the result is
    /// not guaranteed to be the minimal DFA.
    pub fn minimize(&mut self) {
        let before = (self.states().len(), self.rules.len());
        let mut passes = 0;
        while self.merge_pass() > 0 {
            passes += 1;
        }
        debug!(
            "minimize: {} states / {} rules -> {} states / {} rules in {} merging passes",
            before.0,
            before.1,
            self.states().len(),
            self.rules.len(),
            passes
        );
    }

    /// One sweep over all states. Returns the number of merges.
    fn merge_pass(&mut self) -> usize {
        let rows = self.rules.rows();
        let mut survivors: HashMap<(bool, &[(char, State)]), State> = HashMap::new();
        let mut merged: HashMap<State, State> = HashMap::new();

        for q in self.states() {
            let row = rows.get(&q).map_or(&[][..], Vec::as_slice);
            match survivors.entry((self.is_accept(q), row)) {
                Entry::Occupied(entry) => {
                    trace!("merging {q} into {}", entry.get());
                    merged.insert(q, *entry.get());
                }
                Entry::Vacant(entry) => {
                    entry.insert(q);
                }
            }
        }

        if merged.is_empty() {
            return 0;
        }
        self.rules.merge_states(&merged);
        for &from in merged.keys() {
            self.accepts.remove(from);
        }
        if let Some(&to) = merged.get(&self.initial) {
            self.initial = to;
        }
        merged.len()
    }
}
