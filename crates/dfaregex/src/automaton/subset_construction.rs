//! Subset construction algorithm for converting an NFA to a DFA.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::rule::DfaRules;
use crate::automaton::state::{State, StateSet};
use crate::automaton::symbol::Symbol;
use indexmap::IndexMap;
use log::{debug, trace};
use std::collections::VecDeque;

/// Convert an NFA into a DFA recognizing the same language: epsilon rules
/// are eliminated first, then the subset construction runs.
pub fn to_dfa(mut nfa: Nfa) -> Dfa {
    nfa.to_without_epsilon();
    subset_construction(&nfa)
}

/// Convert an epsilon-free NFA to a DFA using the powerset construction.
///
/// DFA state `q0` stands for `{nfa.initial}`. Every other subset reached is
/// numbered in discovery order. Symbols that lead nowhere from a subset get
/// no rule, so the resulting DFA is partial. Epsilon rules, if any remain,
/// are ignored.
pub fn subset_construction(nfa: &Nfa) -> Dfa {
    // Each DFA state corresponds to a set of NFA states, keyed by its
    // sorted member list so equal subsets always land on the same state
    let mut state_mapping: IndexMap<Vec<State>, State> = IndexMap::new();
    let mut accepts = StateSet::new();
    let mut rules = DfaRules::new();
    let alphabet = nfa.alphabet();

    let initial_set = StateSet::singleton(nfa.initial());
    let initial = State::new(0);
    state_mapping.insert(initial_set.to_vec(), initial);

    let mut worklist: VecDeque<(StateSet, State)> = VecDeque::new();
    worklist.push_back((initial_set, initial));

    while let Some((current_set, current)) = worklist.pop_front() {
        if current_set.intersects(nfa.accepts()) {
            accepts.insert(current);
        }

        for &c in &alphabet {
            // Compute the set of NFA states reachable on this symbol
            let mut next_set = StateSet::new();
            for q in current_set.iter() {
                if let Some(destinations) = nfa.destinations(q, Symbol::Char(c)) {
                    next_set.union_with(destinations);
                }
            }

            if next_set.is_empty() {
                continue;
            }

            let key = next_set.to_vec();
            let next = match state_mapping.get(&key) {
                Some(&existing) => existing,
                None => {
                    let fresh = State::new(state_mapping.len() as u32);
                    trace!("subset {next_set} becomes DFA state {fresh}");
                    state_mapping.insert(key, fresh);
                    worklist.push_back((next_set, fresh));
                    fresh
                }
            };

            rules.insert(current, c, next);
        }
    }

    debug!(
        "subset construction: {} DFA states, {} rules, {} accepting",
        state_mapping.len(),
        rules.len(),
        accepts.len()
    );

    Dfa::new(initial, accepts, rules)
}
