//! Graphviz DOT export.
//!
//! Output is sorted by state and symbol so the same automaton always renders
//! to the same text.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::state::{State, StateSet};
use crate::automaton::symbol::Symbol;
use std::io::{self, Write};

/// Implemented by automata that can be rendered as a Graphviz digraph.
pub trait ToDot {
    /// Write the digraph to `out`.
    fn write_dot(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Render the digraph into a string.
    fn to_dot(&self) -> String {
        let mut buffer = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_dot(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl ToDot for Dfa {
    fn write_dot(&self, out: &mut dyn Write) -> io::Result<()> {
        let mut edges: Vec<(State, Symbol, State)> = self
            .rules()
            .transitions()
            .map(|(src, c, dst)| (src, Symbol::Char(c), dst))
            .collect();
        edges.sort_unstable();
        let states = self.states().into_iter().collect::<Vec<_>>();
        write_graph(out, "DFA", self.initial(), self.accepts(), &states, &edges)
    }
}

impl ToDot for Nfa {
    fn write_dot(&self, out: &mut dyn Write) -> io::Result<()> {
        let mut edges: Vec<(State, Symbol, State)> = self.rules().transitions().collect();
        edges.sort_unstable();
        let states = self.states().into_iter().collect::<Vec<_>>();
        write_graph(out, "NFA", self.initial(), self.accepts(), &states, &edges)
    }
}

fn write_graph(
    out: &mut dyn Write,
    name: &str,
    initial: State,
    accepts: &StateSet,
    states: &[State],
    edges: &[(State, Symbol, State)],
) -> io::Result<()> {
    writeln!(out, "digraph {name} {{")?;
    writeln!(out, "\trankdir=LR;")?;
    writeln!(out, "\tnode [fontsize=18];")?;
    writeln!(out, "\tedge [fontsize=18, labelfloat=false];")?;
    writeln!(out, "\t\"\" [shape=point];")?;
    writeln!(out, "\t\"\" -> {initial};")?;
    for &state in states {
        if accepts.contains(state) {
            writeln!(out, "\t{state} [shape=doublecircle];")?;
        } else {
            writeln!(out, "\t{state} [shape=circle];")?;
        }
    }
    for (src, symbol, dst) in edges {
        writeln!(out, "\t{src} -> {dst} [label=\"{}\"];", label(*symbol))?;
    }
    writeln!(out, "}}")
}

fn label(symbol: Symbol) -> String {
    match symbol {
        Symbol::Epsilon => "ε".to_string(),
        Symbol::Char(c) => {
            let mut label = String::from("'");
            match c {
                '"' | '\\' => {
                    label.push('\\');
                    label.push(c);
                }
                '\n' => label.push_str("\\\\n"),
                '\t' => label.push_str("\\\\t"),
                _ => label.push(c),
            }
            label.push('\'');
            label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::rule::{DfaRules, NfaRules};
    use crate::automaton::symbol::EPSILON;

    fn q(id: u32) -> State {
        State::new(id)
    }

    #[test]
    fn test_dfa_dot() {
        let mut rules = DfaRules::new();
        rules.insert(q(0), 'b', q(1));
        rules.insert(q(0), 'a', q(1));
        let dfa = Dfa::new(q(0), StateSet::singleton(q(1)), rules);

        let dot = dfa.to_dot();

        assert!(dot.starts_with("digraph DFA {\n\trankdir=LR;"));
        assert!(dot.contains("\t\"\" -> q0;\n"));
        assert!(dot.contains("\tq0 [shape=circle];\n"));
        assert!(dot.contains("\tq1 [shape=doublecircle];\n"));
        let a = dot.find("q0 -> q1 [label=\"'a'\"]").unwrap();
        let b = dot.find("q0 -> q1 [label=\"'b'\"]").unwrap();
        assert!(a < b);
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_nfa_dot_shows_epsilon() {
        let mut rules = NfaRules::new();
        rules.add(q(0), EPSILON, q(1));
        let nfa = Nfa::new(q(0), StateSet::singleton(q(1)), rules);

        let dot = nfa.to_dot();

        assert!(dot.starts_with("digraph NFA {"));
        assert!(dot.contains("q0 -> q1 [label=\"ε\"];"));
    }

    #[test]
    fn test_label_escapes_quotes() {
        assert_eq!(label(Symbol::Char('"')), "'\\\"'");
        assert_eq!(label(Symbol::Char('\\')), "'\\\\'");
        assert_eq!(label(Symbol::Char('x')), "'x'");
    }

    #[test]
    fn test_export_does_not_mutate() {
        let mut rules = DfaRules::new();
        rules.insert(q(0), 'a', q(1));
        let dfa = Dfa::new(q(0), StateSet::singleton(q(1)), rules);
        let before = dfa.clone();

        let _ = dfa.to_dot();

        assert_eq!(dfa, before);
    }
}
