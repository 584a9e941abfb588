use quickcheck::{Arbitrary, Gen, QuickCheck, Testable};

use crate::automaton::Dfa;
use crate::syntax::Node;
use crate::{CompileConfig, assemble, compile, compile_with};

const ALPHABET: &[char] = &['a', 'b', 'c'];

fn qc<T: Testable>(t: T) {
    QuickCheck::new().tests(500).max_tests(1_000).quickcheck(t);
}

/// A random syntax tree over a three letter alphabet, at most a few levels
/// deep so the automata stay small.
#[derive(Clone, Debug)]
struct Tree(Node);

impl Tree {
    fn node(g: &mut Gen, depth: u32) -> Node {
        let choice = if depth == 0 {
            *g.choose(&[0u8, 1, 1, 1]).unwrap()
        } else {
            *g.choose(&[0u8, 1, 2, 3, 4, 5]).unwrap()
        };
        match choice {
            0 => Node::Empty,
            1 => Node::Literal(*g.choose(ALPHABET).unwrap()),
            2 => Node::union(Self::node(g, depth - 1), Self::node(g, depth - 1)),
            3 => Node::concat(Self::node(g, depth - 1), Self::node(g, depth - 1)),
            4 => Node::star(Self::node(g, depth - 1)),
            _ => Node::plus(Self::node(g, depth - 1)),
        }
    }
}

impl Arbitrary for Tree {
    fn arbitrary(g: &mut Gen) -> Tree {
        Tree(Self::node(g, 4))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Tree>> {
        let children: Vec<Tree> = match &self.0 {
            Node::Empty | Node::Literal(_) => vec![],
            Node::Union(l, r) | Node::Concat(l, r) => {
                vec![Tree((**l).clone()), Tree((**r).clone())]
            }
            Node::Star(n) | Node::Plus(n) => vec![Tree((**n).clone())],
        };
        Box::new(children.into_iter())
    }
}

/// A short input over the same alphabet as [`Tree`].
#[derive(Clone, Debug)]
struct Input(String);

impl Arbitrary for Input {
    fn arbitrary(g: &mut Gen) -> Input {
        let len = usize::arbitrary(g) % 8;
        Input((0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Input>> {
        Box::new(self.0.shrink().map(Input))
    }
}

fn unminimized(node: &Node) -> Dfa {
    compile_with(node, &CompileConfig { minimize: false })
}

#[test]
fn dfa_agrees_with_nfa_simulation() {
    fn prop(tree: Tree, inputs: Vec<Input>) -> bool {
        let nfa = assemble(&tree.0);
        let dfa = unminimized(&tree.0);
        let mut rt = dfa.runtime();
        inputs
            .iter()
            .chain(std::iter::once(&Input(String::new())))
            .all(|input| rt.matches(&input.0) == nfa.accepts_input(&input.0))
    }
    qc(prop as fn(Tree, Vec<Input>) -> bool);
}

#[test]
fn minimized_dfa_agrees_with_nfa_simulation() {
    fn prop(tree: Tree, inputs: Vec<Input>) -> bool {
        let nfa = assemble(&tree.0);
        let dfa = compile(&tree.0);
        let mut rt = dfa.runtime();
        inputs
            .iter()
            .chain(std::iter::once(&Input(String::new())))
            .all(|input| rt.matches(&input.0) == nfa.accepts_input(&input.0))
    }
    qc(prop as fn(Tree, Vec<Input>) -> bool);
}

#[test]
fn epsilon_elimination_preserves_language() {
    fn prop(tree: Tree, inputs: Vec<Input>) -> bool {
        let nfa = assemble(&tree.0);
        let mut eliminated = nfa.clone();
        eliminated.to_without_epsilon();
        !eliminated.has_epsilon()
            && inputs
                .iter()
                .all(|input| eliminated.accepts_input(&input.0) == nfa.accepts_input(&input.0))
    }
    qc(prop as fn(Tree, Vec<Input>) -> bool);
}

#[test]
fn minimize_is_idempotent() {
    fn prop(tree: Tree) -> bool {
        let once = compile(&tree.0);
        let mut twice = once.clone();
        twice.minimize();
        once == twice
    }
    qc(prop as fn(Tree) -> bool);
}

#[test]
fn minimize_never_adds_states() {
    fn prop(tree: Tree) -> bool {
        let plain = unminimized(&tree.0);
        let minimized = compile(&tree.0);
        minimized.states().len() <= plain.states().len()
            && minimized.rules().len() <= plain.rules().len()
    }
    qc(prop as fn(Tree) -> bool);
}

#[test]
fn dfa_alphabet_comes_from_pattern() {
    fn prop(tree: Tree) -> bool {
        let nfa = assemble(&tree.0);
        let alphabet = nfa.alphabet();
        compile(&tree.0)
            .rules()
            .transitions()
            .all(|(_, c, _)| alphabet.contains(&c))
    }
    qc(prop as fn(Tree) -> bool);
}

#[test]
fn runtime_reuse_matches_fresh_runtime() {
    fn prop(tree: Tree, inputs: Vec<Input>) -> bool {
        let dfa = compile(&tree.0);
        let mut shared = dfa.runtime();
        inputs
            .iter()
            .all(|input| shared.matches(&input.0) == dfa.runtime().matches(&input.0))
    }
    qc(prop as fn(Tree, Vec<Input>) -> bool);
}
