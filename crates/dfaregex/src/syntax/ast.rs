//! Syntax tree of a pattern and its Thompson assembly.

use crate::automaton::{Context, Fragment};
use std::fmt;

/// A node of the pattern syntax tree.
///
/// Any value of this type is a well-formed tree; there is nothing to validate
/// before assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Matches only the empty string (an empty alternative or group).
    Empty,
    Literal(char),
    Union(Box<Node>, Box<Node>),
    Concat(Box<Node>, Box<Node>),
    Star(Box<Node>),
    Plus(Box<Node>),
}

impl Node {
    pub fn union(left: Node, right: Node) -> Node {
        Node::Union(Box::new(left), Box::new(right))
    }

    pub fn concat(left: Node, right: Node) -> Node {
        Node::Concat(Box::new(left), Box::new(right))
    }

    pub fn star(operand: Node) -> Node {
        Node::Star(Box::new(operand))
    }

    pub fn plus(operand: Node) -> Node {
        Node::Plus(Box::new(operand))
    }

    /// `operand*`, absorbing a repetition directly underneath: `x**` and
    /// `x+*` both become `x*`.
    pub fn repeat_star(mut operand: Node) -> Node {
        match operand {
            Node::Star(_) => operand,
            Node::Plus(ref mut inner) => {
                Node::star(std::mem::replace(inner.as_mut(), Node::Empty))
            }
            _ => Node::star(operand),
        }
    }

    /// `operand+`, absorbing a repetition directly underneath: `x++` is
    /// `x+` and `x*+` is `x*`.
    pub fn repeat_plus(operand: Node) -> Node {
        match operand {
            Node::Star(_) | Node::Plus(_) => operand,
            _ => Node::plus(operand),
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Node::Empty | Node::Literal(_))
    }

    /// Assemble this subtree into an NFA fragment, drawing fresh states from
    /// `ctx`.
    ///
    /// Chains of `Concat` (nested to the right) and `Union` (nested to the
    /// left) are walked in a loop, so a long pattern does not translate into
    /// deep recursion. States are still minted in left to right order.
    pub fn assemble(&self, ctx: &mut Context) -> Fragment {
        match self {
            Node::Empty => Fragment::empty(ctx),
            Node::Literal(c) => Fragment::literal(ctx, *c),
            Node::Union(..) => {
                let mut rights = Vec::new();
                let mut node = self;
                while let Node::Union(left, right) = node {
                    rights.push(right.as_ref());
                    node = left.as_ref();
                }
                let mut frg = node.assemble(ctx);
                while let Some(right) = rights.pop() {
                    let right = right.assemble(ctx);
                    frg = Fragment::union(ctx, frg, right);
                }
                frg
            }
            Node::Concat(..) => {
                let mut heads = Vec::new();
                let mut node = self;
                while let Node::Concat(head, tail) = node {
                    heads.push(head.assemble(ctx));
                    node = tail.as_ref();
                }
                let mut frg = node.assemble(ctx);
                while let Some(head) = heads.pop() {
                    frg = Fragment::concat(head, frg);
                }
                frg
            }
            Node::Star(operand) => {
                let body = operand.assemble(ctx);
                Fragment::star(ctx, body)
            }
            Node::Plus(operand) => {
                // the mandatory pass and the repeated tail need their own states
                let first = operand.assemble(ctx);
                let rest = operand.assemble(ctx);
                Fragment::plus(ctx, first, rest)
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => write!(f, "Empty"),
            Node::Literal(c) => write!(f, "Literal({c:?})"),
            Node::Union(..) => {
                let mut rights = Vec::new();
                let mut node = self;
                while let Node::Union(left, right) = node {
                    rights.push(right.as_ref());
                    node = left.as_ref();
                }
                for _ in 0..rights.len() {
                    f.write_str("Union(")?;
                }
                write!(f, "{node}")?;
                for right in rights.into_iter().rev() {
                    write!(f, ", {right})")?;
                }
                Ok(())
            }
            Node::Concat(..) => {
                let mut depth = 0;
                let mut node = self;
                while let Node::Concat(head, tail) = node {
                    write!(f, "Concat({head}, ")?;
                    depth += 1;
                    node = tail.as_ref();
                }
                write!(f, "{node}")?;
                for _ in 0..depth {
                    f.write_str(")")?;
                }
                Ok(())
            }
            Node::Star(operand) => write!(f, "Star({operand})"),
            Node::Plus(operand) => write!(f, "Plus({operand})"),
        }
    }
}

/// Tear the tree down with an explicit stack instead of recursing once per
/// level.
impl Drop for Node {
    fn drop(&mut self) {
        let shallow = match self {
            Node::Empty | Node::Literal(_) => true,
            Node::Union(left, right) | Node::Concat(left, right) => {
                left.is_leaf() && right.is_leaf()
            }
            Node::Star(operand) | Node::Plus(operand) => operand.is_leaf(),
        };
        if shallow {
            return;
        }

        let mut stack = vec![std::mem::replace(self, Node::Empty)];
        while let Some(mut node) = stack.pop() {
            match &mut node {
                Node::Empty | Node::Literal(_) => {}
                Node::Union(left, right) | Node::Concat(left, right) => {
                    stack.push(std::mem::replace(left.as_mut(), Node::Empty));
                    stack.push(std::mem::replace(right.as_mut(), Node::Empty));
                }
                Node::Star(operand) | Node::Plus(operand) => {
                    stack.push(std::mem::replace(operand.as_mut(), Node::Empty));
                }
            }
            // every child of `node` is now `Empty`, so dropping it is shallow
        }
    }
}
