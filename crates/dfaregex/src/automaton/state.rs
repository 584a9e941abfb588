//! State types for automata.

use fixedbitset::FixedBitSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An automaton state, identified by a non-negative integer.
///
/// States compare and order by their numeric identifier. They are plain
/// values: nothing about a state changes after it has been minted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(u32);

impl State {
    /// Create a state with the given identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The numeric identifier of this state.
    pub const fn id(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Mints fresh states while one syntax tree is assembled into an NFA.
///
/// The first state handed out is `q0`, and every later one is one greater
/// than its predecessor, so identifiers never collide within one assembly.
#[derive(Debug, Default)]
pub struct Context {
    minted: u32,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter and return the new identifier.
    pub fn increment(&mut self) -> u32 {
        let id = self.minted;
        self.minted += 1;
        id
    }

    /// Mint a fresh state.
    pub fn fresh_state(&mut self) -> State {
        State::new(self.increment())
    }

    /// Number of states minted so far.
    pub fn minted(&self) -> u32 {
        self.minted
    }
}

/// A set of states implemented using a growable bit set.
///
/// Equality and hashing look only at the members, never at the capacity of
/// the underlying bit set, so two sets built in a different order or with a
/// different capacity still compare equal when they hold the same states.
#[derive(Clone, Default)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create a new empty state set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty state set with room for states below `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Create a state set containing a single state.
    pub fn singleton(state: State) -> Self {
        let mut set = Self::with_capacity(state.index() + 1);
        set.insert(state);
        set
    }

    /// Insert a state into the set. Returns `true` if it was not present.
    pub fn insert(&mut self, state: State) -> bool {
        let idx = state.index();
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        !self.bits.put(idx)
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: State) -> bool {
        let idx = state.index();
        idx < self.bits.len() && self.bits.contains(idx)
    }

    /// Remove a state from the set.
    pub fn remove(&mut self, state: State) {
        let idx = state.index();
        if idx < self.bits.len() {
            self.bits.set(idx, false);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Get the number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over all states in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
        self.bits.ones().map(|i| State::new(i as u32))
    }

    /// Union this set with another, modifying self in place.
    pub fn union_with(&mut self, other: &StateSet) {
        if other.bits.len() > self.bits.len() {
            self.bits.grow(other.bits.len());
        }
        self.bits.union_with(&other.bits);
    }

    /// Check if this set intersects with another.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.bits.intersection(&other.bits).next().is_some()
    }

    /// Get a canonical representation for hashing (as a sorted vec).
    pub fn to_vec(&self) -> Vec<State> {
        self.iter().collect()
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for StateSet {}

impl Hash for StateSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for member in self.iter() {
            member.hash(state);
        }
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, state) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{state}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<State> for StateSet {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<State> for StateSet {
    fn extend<I: IntoIterator<Item = State>>(&mut self, iter: I) {
        for state in iter {
            self.insert(state);
        }
    }
}
