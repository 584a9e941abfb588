//! Thompson construction fragments.
//!
//! A `Fragment` is an NFA under construction: an initial state, a set of
//! accept states and the rules between them. Every constructor below draws
//! its new states from the shared [`Context`], so fragments built for
//! sibling subtrees never share a state and can be merged freely.

use crate::automaton::nfa::Nfa;
use crate::automaton::rule::NfaRules;
use crate::automaton::state::{Context, State, StateSet};
use crate::automaton::symbol::{EPSILON, Symbol};

#[derive(Debug, Clone)]
pub struct Fragment {
    initial: State,
    accepts: StateSet,
    rules: NfaRules,
}

impl Fragment {
    fn new(initial: State) -> Self {
        Self {
            initial,
            accepts: StateSet::new(),
            rules: NfaRules::new(),
        }
    }

    /// A fragment that accepts exactly the empty string: one state that is
    /// both initial and accepting, with no rules.
    pub fn empty(ctx: &mut Context) -> Self {
        let q = ctx.fresh_state();
        let mut frg = Self::new(q);
        frg.accepts.insert(q);
        frg
    }

    /// `q1 --c--> q2`
    pub fn literal(ctx: &mut Context, c: char) -> Self {
        let q1 = ctx.fresh_state();
        let q2 = ctx.fresh_state();

        let mut frg = Self::new(q1);
        frg.add_rule(q1, Symbol::Char(c), q2);
        frg.accepts.insert(q2);
        frg
    }

    /// A new initial state with epsilon rules into both operands. The
    /// accept states of both operands stay accepting.
    pub fn union(ctx: &mut Context, left: Fragment, right: Fragment) -> Self {
        let q0 = ctx.fresh_state();
        let (left_initial, right_initial) = (left.initial, right.initial);

        let mut frg = Self {
            initial: q0,
            accepts: left.accepts,
            rules: left.rules,
        };
        frg.absorb(right);
        frg.add_rule(q0, EPSILON, left_initial);
        frg.add_rule(q0, EPSILON, right_initial);
        frg
    }

    /// Epsilon rules from every accept state of `first` into `second`. Only
    /// the accept states of `second` remain accepting.
    pub fn concat(first: Fragment, second: Fragment) -> Self {
        let second_initial = second.initial;

        // concatenation chains fold from the right: `second` holds most rules
        let mut frg = Self {
            initial: first.initial,
            accepts: second.accepts,
            rules: second.rules,
        };
        frg.rules.merge(first.rules);
        for q in first.accepts.iter() {
            frg.add_rule(q, EPSILON, second_initial);
        }
        frg
    }

    /// Zero or more repetitions of `body`.
    ///
    /// ```text
    /// s1 --ε--> s2
    /// s1 --ε--> body.initial
    /// a  --ε--> s2, a --ε--> body.initial   for every accept a of body
    /// ```
    ///
    /// The accept states are `body.initial` and `s2`.
    pub fn star(ctx: &mut Context, body: Fragment) -> Self {
        let s1 = ctx.fresh_state();
        let s2 = ctx.fresh_state();
        let body_initial = body.initial;

        let mut frg = Self::new(s1);
        frg.rules = body.rules;
        frg.add_rule(s1, EPSILON, s2);
        frg.add_rule(s1, EPSILON, body_initial);
        for q in body.accepts.iter() {
            frg.add_rule(q, EPSILON, s2);
            frg.add_rule(q, EPSILON, body_initial);
        }
        frg.accepts.insert(body_initial);
        frg.accepts.insert(s2);
        frg
    }

    /// One mandatory pass through `first`, then zero or more passes through
    /// `rest`. Both must be independent assemblies of the same subtree.
    ///
    /// Unlike [`Fragment::concat`], the accept states of `first` stay
    /// accepting alongside those of the star skeleton.
    pub fn plus(ctx: &mut Context, first: Fragment, rest: Fragment) -> Self {
        let skeleton = Self::star(ctx, rest);
        let skeleton_initial = skeleton.initial;

        let mut frg = Self::new(first.initial);
        frg.rules = skeleton.rules;
        frg.rules.merge(first.rules);
        for q in first.accepts.iter() {
            frg.add_rule(q, EPSILON, skeleton_initial);
        }
        frg.accepts = first.accepts;
        frg.accepts.union_with(&skeleton.accepts);
        frg
    }

    /// Add a transition rule: `from --[symbol]--> next`.
    pub fn add_rule(&mut self, from: State, symbol: Symbol, next: State) {
        self.rules.add(from, symbol, next);
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

    /// Finalize the fragment into an NFA.
    pub fn build(self) -> Nfa {
        Nfa::new(self.initial, self.accepts, self.rules)
    }

    fn absorb(&mut self, other: Fragment) {
        self.rules.merge(other.rules);
        self.accepts.union_with(&other.accepts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: u32) -> State {
        State::new(id)
    }

    fn eps(frg: &Fragment, from: u32) -> Vec<State> {
        frg.rules()
            .get(q(from), EPSILON)
            .map(StateSet::to_vec)
            .unwrap_or_default()
    }

    #[test]
    fn test_literal_fragment() {
        let mut ctx = Context::new();
        let frg = Fragment::literal(&mut ctx, 'a');

        assert_eq!(frg.initial(), q(0));
        assert_eq!(frg.accepts().to_vec(), vec![q(1)]);
        assert_eq!(
            frg.rules().get(q(0), Symbol::Char('a')).unwrap().to_vec(),
            vec![q(1)]
        );
    }

    #[test]
    fn test_empty_fragment() {
        let mut ctx = Context::new();
        let frg = Fragment::empty(&mut ctx);

        assert_eq!(frg.accepts().to_vec(), vec![frg.initial()]);
        assert!(frg.rules().is_empty());
    }

    #[test]
    fn test_union_fragment() {
        let mut ctx = Context::new();
        let a = Fragment::literal(&mut ctx, 'a'); // q0 -> q1
        let b = Fragment::literal(&mut ctx, 'b'); // q2 -> q3
        let frg = Fragment::union(&mut ctx, a, b);

        assert_eq!(frg.initial(), q(4));
        assert_eq!(eps(&frg, 4), vec![q(0), q(2)]);
        assert_eq!(frg.accepts().to_vec(), vec![q(1), q(3)]);
    }

    #[test]
    fn test_concat_fragment() {
        let mut ctx = Context::new();
        let a = Fragment::literal(&mut ctx, 'a'); // q0 -> q1
        let b = Fragment::literal(&mut ctx, 'b'); // q2 -> q3
        let frg = Fragment::concat(a, b);

        assert_eq!(frg.initial(), q(0));
        assert_eq!(eps(&frg, 1), vec![q(2)]);
        assert_eq!(frg.accepts().to_vec(), vec![q(3)]);
        assert_eq!(ctx.minted(), 4);
    }

    #[test]
    fn test_star_fragment() {
        let mut ctx = Context::new();
        let a = Fragment::literal(&mut ctx, 'a'); // q0 -> q1
        let frg = Fragment::star(&mut ctx, a); // s1 = q2, s2 = q3

        assert_eq!(frg.initial(), q(2));
        assert_eq!(eps(&frg, 2), vec![q(0), q(3)]);
        assert_eq!(eps(&frg, 1), vec![q(0), q(3)]);
        assert_eq!(frg.accepts().to_vec(), vec![q(0), q(3)]);
    }

    #[test]
    fn test_plus_fragment() {
        let mut ctx = Context::new();
        let first = Fragment::literal(&mut ctx, 'a'); // q0 -> q1
        let rest = Fragment::literal(&mut ctx, 'a'); // q2 -> q3
        let frg = Fragment::plus(&mut ctx, first, rest); // s1 = q4, s2 = q5

        assert_eq!(frg.initial(), q(0));
        assert_eq!(eps(&frg, 1), vec![q(4)]);
        assert_eq!(eps(&frg, 4), vec![q(2), q(5)]);
        assert_eq!(frg.accepts().to_vec(), vec![q(1), q(2), q(5)]);
    }

    #[test]
    fn test_build_keeps_shape() {
        let mut ctx = Context::new();
        let frg = Fragment::literal(&mut ctx, 'z');
        let nfa = frg.build();

        assert_eq!(nfa.initial(), q(0));
        assert!(nfa.accepts().contains(q(1)));
        assert_eq!(nfa.rules().len(), 1);
    }
}
