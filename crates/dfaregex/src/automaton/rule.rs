//! Transition rule maps.
//!
//! A rule is keyed by the pair `(source state, input symbol)`. The NFA map
//! keeps a set of destinations per key, the DFA map exactly one.

use crate::automaton::state::{State, StateSet};
use crate::automaton::symbol::{Symbol, is_epsilon};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// The key of a transition rule: (source, symbol).
pub type Rule = (State, Symbol);

/// Transition function of an NFA: (source, symbol) -> set of destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NfaRules {
    rules: HashMap<Rule, StateSet>,
}

impl NfaRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `destination` to the destinations of `(source, symbol)`.
    pub fn add(&mut self, source: State, symbol: Symbol, destination: State) {
        self.rules
            .entry((source, symbol))
            .or_default()
            .insert(destination);
    }

    /// Union `destinations` into the destinations of `(source, symbol)`.
    pub fn add_all(&mut self, source: State, symbol: Symbol, destinations: &StateSet) {
        self.rules
            .entry((source, symbol))
            .or_default()
            .union_with(destinations);
    }

    /// Merge another rule map into this one, unioning destination sets of
    /// keys present in both.
    pub fn merge(&mut self, other: NfaRules) {
        for (key, destinations) in other.rules {
            match self.rules.get_mut(&key) {
                Some(existing) => existing.union_with(&destinations),
                None => {
                    self.rules.insert(key, destinations);
                }
            }
        }
    }

    /// Destinations of `(source, symbol)`, if any rule exists.
    pub fn get(&self, source: State, symbol: Symbol) -> Option<&StateSet> {
        self.rules.get(&(source, symbol))
    }

    /// Number of rule keys.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every individual edge as (source, symbol, destination).
    pub fn transitions(&self) -> impl Iterator<Item = (State, Symbol, State)> + '_ {
        self.rules
            .iter()
            .flat_map(|(&(src, sym), dests)| dests.iter().map(move |dst| (src, sym, dst)))
    }

    /// Every state mentioned as a source or a destination.
    pub fn states(&self) -> BTreeSet<State> {
        let mut states = BTreeSet::new();
        for (&(src, _), dests) in &self.rules {
            states.insert(src);
            states.extend(dests.iter());
        }
        states
    }

    /// All literal symbols used (excluding epsilon), in ascending order.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.rules
            .keys()
            .filter_map(|&(_, symbol)| symbol.as_char())
            .collect()
    }

    /// Whether any epsilon rule remains.
    pub fn has_epsilon(&self) -> bool {
        self.rules.keys().any(|&(_, symbol)| is_epsilon(symbol))
    }

    fn sorted(&self) -> Vec<(&Rule, &StateSet)> {
        let mut rules: Vec<_> = self.rules.iter().collect();
        rules.sort_by_key(|(key, _)| **key);
        rules
    }
}

impl fmt::Display for NfaRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ((src, sym), dests)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{src}\t--['{sym}']-->\t{dests}")?;
        }
        Ok(())
    }
}

/// Transition function of a DFA: (source, character) -> destination.
///
/// Inserting a second destination for an existing key replaces the first, so
/// the map is functional by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfaRules {
    rules: HashMap<(State, char), State>,
}

impl DfaRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination of `(source, symbol)`, returning the previous one.
    pub fn insert(&mut self, source: State, symbol: char, destination: State) -> Option<State> {
        self.rules.insert((source, symbol), destination)
    }

    pub fn get(&self, source: State, symbol: char) -> Option<State> {
        self.rules.get(&(source, symbol)).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule as (source, symbol, destination).
    pub fn transitions(&self) -> impl Iterator<Item = (State, char, State)> + '_ {
        self.rules.iter().map(|(&(src, sym), &dst)| (src, sym, dst))
    }

    /// The outgoing rules of every source state, each sorted by symbol.
    pub fn rows(&self) -> HashMap<State, Vec<(char, State)>> {
        let mut rows: HashMap<State, Vec<(char, State)>> = HashMap::new();
        for (&(src, sym), &dst) in &self.rules {
            rows.entry(src).or_default().push((sym, dst));
        }
        for row in rows.values_mut() {
            row.sort_unstable();
        }
        rows
    }

    /// Every state that is the destination of some rule.
    pub fn destinations(&self) -> impl Iterator<Item = State> + '_ {
        self.rules.values().copied()
    }

    /// Fold every key of `merged` into its value: rules leaving a merged
    /// state are deleted and rules entering one are pointed at its
    /// replacement. No value may itself be a key.
    pub fn merge_states(&mut self, merged: &HashMap<State, State>) {
        self.rules.retain(|(src, _), _| !merged.contains_key(src));
        for dst in self.rules.values_mut() {
            if let Some(&to) = merged.get(dst) {
                *dst = to;
            }
        }
    }
}

impl fmt::Display for DfaRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rules: Vec<_> = self.transitions().collect();
        rules.sort_unstable();
        for (i, (src, sym, dst)) in rules.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{src}\t--['{sym}']-->\t{dst}")?;
        }
        Ok(())
    }
}
