//! Non-deterministic finite automaton with epsilon transitions.

use crate::automaton::rule::NfaRules;
use crate::automaton::state::{State, StateSet};
use crate::automaton::symbol::{EPSILON, Symbol};
use log::debug;
use std::collections::{BTreeSet, HashMap};

/// A Non-deterministic Finite Automaton.
#[derive(Debug, Clone)]
pub struct Nfa {
    /// Initial state
    initial: State,
    /// Accept states
    accepts: StateSet,
    /// Transition function, possibly containing epsilon rules
    rules: NfaRules,
}

impl Nfa {
    pub fn new(initial: State, accepts: StateSet, rules: NfaRules) -> Self {
        Self {
            initial,
            accepts,
            rules,
        }
    }

    pub fn initial(&self) -> State {
        self.initial
    }

    pub fn accepts(&self) -> &StateSet {
        &self.accepts
    }

    pub fn rules(&self) -> &NfaRules {
        &self.rules
    }

    /// The initial state plus every state mentioned by a rule.
    pub fn states(&self) -> BTreeSet<State> {
        let mut states = self.rules.states();
        states.insert(self.initial);
        states
    }

    /// All literal symbols used (excluding epsilon).
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.rules.alphabet()
    }

    /// Destinations of `q` on `symbol`.
    pub fn destinations(&self, q: State, symbol: Symbol) -> Option<&StateSet> {
        self.rules.get(q, symbol)
    }

    pub fn has_epsilon(&self) -> bool {
        self.rules.has_epsilon()
    }

    /// Compute the epsilon closure of a single state: the smallest set that
    /// contains `state` and is closed under epsilon rules.
    pub fn epsilon_closure(&self, state: State) -> StateSet {
        let mut closure = StateSet::singleton(state);
        let mut stack = vec![state];

        while let Some(s) = stack.pop() {
            if let Some(destinations) = self.rules.get(s, EPSILON) {
                for dest in destinations.iter() {
                    if closure.insert(dest) {
                        stack.push(dest);
                    }
                }
            }
        }

        closure
    }

    /// Get the epsilon closure of a set of states.
    pub fn epsilon_closure_of(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::new();
        for state in states.iter() {
            if !closure.contains(state) {
                closure.union_with(&self.epsilon_closure(state));
            }
        }
        closure
    }

    /// Remove every epsilon rule without changing the accepted language.
    ///
    /// For every state `q` and literal `c`, the new destinations are the
    /// closures of everything reachable by `c` from the closure of `q`. When
    /// the closure of the initial state holds an accept state, the initial
    /// state itself becomes accepting so the empty string stays accepted.
    pub fn to_without_epsilon(&mut self) {
        let states = self.states();
        let alphabet = self.alphabet();
        let closures: HashMap<State, StateSet> = states
            .iter()
            .map(|&q| (q, self.epsilon_closure(q)))
            .collect();

        if closures
            .get(&self.initial)
            .is_some_and(|closure| closure.intersects(&self.accepts))
        {
            self.accepts.insert(self.initial);
        }

        let mut rules = NfaRules::new();
        for (&q, closure) in &closures {
            for &c in &alphabet {
                let mut dst = StateSet::new();
                for mid in closure.iter() {
                    let Some(next) = self.rules.get(mid, Symbol::Char(c)) else {
                        continue;
                    };
                    // every destination is in `states`, so its closure is cached
                    for n in next.iter() {
                        if let Some(expanded) = closures.get(&n) {
                            dst.union_with(expanded);
                        }
                    }
                }
                if !dst.is_empty() {
                    rules.add_all(q, Symbol::Char(c), &dst);
                }
            }
        }

        debug!(
            "epsilon elimination: {} rule keys -> {}",
            self.rules.len(),
            rules.len()
        );
        self.rules = rules;
    }

    /// Decide membership by simulating the automaton directly on sets of
    /// states. Works with or without epsilon rules.
    pub fn accepts_input(&self, input: &str) -> bool {
        let mut current = self.epsilon_closure(self.initial);

        for c in input.chars() {
            let mut reached = StateSet::new();
            for state in current.iter() {
                if let Some(destinations) = self.rules.get(state, Symbol::Char(c)) {
                    reached.union_with(destinations);
                }
            }
            current = self.epsilon_closure_of(&reached);

            // stuck: no state left to continue from
            if current.is_empty() {
                return false;
            }
        }

        current.intersects(&self.accepts)
    }
}
