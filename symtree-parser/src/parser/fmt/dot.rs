use std::fmt::{Display, Formatter, Result};
use crate::parser::{ast::Node, token::{Paren, Token}};

/// Fill color of constant nodes.
const CONSTANT_FILL: &str = "#FFFEC9";

/// Fill color of variable nodes.
const VARIABLE_FILL: &str = "#D7FFC9";

/// Fill color of operator and function nodes.
const OPERATOR_FILL: &str = "#C9E7FF";

/// Graphviz description of a tree.
///
/// Nodes are numbered in depth-first order. Each node is drawn as a filled box labelled with its
/// value, variable name, or operator name, with one edge to each child in operand order. A result
/// box can be attached with [`Dot::with_result`].
#[derive(Debug, Clone, Copy)]
pub struct Dot<'a> {
    root: &'a Node,
    result: Option<f64>,
}

impl<'a> Dot<'a> {
    /// Creates a graph description of the tree rooted at `root`.
    pub fn new(root: &'a Node) -> Self {
        Self { root, result: None }
    }

    /// Adds a detached `= value` box to the graph.
    pub fn with_result(self, result: f64) -> Self {
        Self { result: Some(result), ..self }
    }
}

/// Writes the node with the given id and its subtree. Returns the next unused id.
fn fmt_node(f: &mut Formatter, node: &Node, id: usize) -> std::result::Result<usize, std::fmt::Error> {
    let (label, fill) = match node.token() {
        Token::Constant(value) => (value.to_string(), CONSTANT_FILL),
        Token::Variable(var) => (var.to_string(), VARIABLE_FILL),
        Token::Paren(Paren::Open) => ("(".to_owned(), OPERATOR_FILL),
        Token::Paren(Paren::Close) => (")".to_owned(), OPERATOR_FILL),
        Token::Operator(op) => (op.kind.name().to_owned(), OPERATOR_FILL),
        Token::Function(func) => (func.kind.name().to_owned(), OPERATOR_FILL),
    };
    writeln!(
        f,
        "{} [label=\"{}\", shape=box, style=filled, color=\"grey\", fillcolor=\"{}\"];",
        id,
        label.replace('"', "\\\""),
        fill,
    )?;

    let mut next = id + 1;
    for child in node.children() {
        writeln!(f, "{}->{}", id, next)?;
        next = fmt_node(f, child, next)?;
    }
    Ok(next)
}

impl Display for Dot<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "digraph AST {{")?;
        fmt_node(f, self.root, 0)?;
        if let Some(result) = self.result {
            writeln!(f, "\"= {}\" [shape=box];", result)?;
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::parser::{parse, token::Interner};

    #[test]
    fn edges_in_operand_order() {
        let mut interner = Interner::new();
        let tree = parse("2 * (x - 1)", &mut interner).unwrap();

        assert_eq!(Dot::new(&tree).to_string(), concat!(
            "digraph AST {\n",
            "0 [label=\"MULTIPLICATION\", shape=box, style=filled, color=\"grey\", fillcolor=\"#C9E7FF\"];\n",
            "0->1\n",
            "1 [label=\"2\", shape=box, style=filled, color=\"grey\", fillcolor=\"#FFFEC9\"];\n",
            "0->2\n",
            "2 [label=\"SUBTRACTION\", shape=box, style=filled, color=\"grey\", fillcolor=\"#C9E7FF\"];\n",
            "2->3\n",
            "3 [label=\"x\", shape=box, style=filled, color=\"grey\", fillcolor=\"#D7FFC9\"];\n",
            "2->4\n",
            "4 [label=\"1\", shape=box, style=filled, color=\"grey\", fillcolor=\"#FFFEC9\"];\n",
            "}\n",
        ));
    }

    #[test]
    fn result_box() {
        let mut interner = Interner::new();
        let tree = parse("7", &mut interner).unwrap();
        let dot = Dot::new(&tree).with_result(7.0).to_string();

        assert!(dot.ends_with("\"= 7\" [shape=box];\n}\n"));
    }
}
