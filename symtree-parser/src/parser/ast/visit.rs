use crate::parser::token::{Function, Operator, Paren, Token, Variable};
use super::Node;

/// Per-token-kind behavior over expression trees.
///
/// [`Node::accept`] is the single place that matches on a node's [`Token`]. Recursive consumers
/// of trees implement this trait instead of matching themselves.
pub trait Visitor {
    /// The result of visiting a node.
    type Output;

    /// Visits a constant leaf.
    fn visit_constant(&mut self, node: &Node, value: f64) -> Self::Output;

    /// Visits a variable leaf.
    fn visit_variable(&mut self, node: &Node, var: &Variable) -> Self::Output;

    /// Visits an operator node. Its operands are the node's children.
    fn visit_operator(&mut self, node: &Node, op: &Operator) -> Self::Output;

    /// Visits a function node. Its argument is the node's only child.
    fn visit_function(&mut self, node: &Node, func: &Function) -> Self::Output;

    /// Visits a parenthesis leaf. Built trees never contain one, but hand-built trees can.
    fn visit_paren(&mut self, node: &Node, paren: Paren) -> Self::Output;
}

impl Node {
    /// Dispatches to the visitor method matching this node's token.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self.token() {
            Token::Constant(value) => visitor.visit_constant(self, *value),
            Token::Variable(var) => visitor.visit_variable(self, var),
            Token::Paren(paren) => visitor.visit_paren(self, *paren),
            Token::Operator(op) => visitor.visit_operator(self, op),
            Token::Function(func) => visitor.visit_function(self, func),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts leaves and internal nodes.
    #[derive(Default)]
    struct Counter {
        leaves: usize,
        internal: usize,
    }

    impl Visitor for Counter {
        type Output = ();

        fn visit_constant(&mut self, _: &Node, _: f64) {
            self.leaves += 1;
        }

        fn visit_variable(&mut self, _: &Node, _: &Variable) {
            self.leaves += 1;
        }

        fn visit_operator(&mut self, node: &Node, _: &Operator) {
            self.internal += 1;
            node.children().iter().for_each(|child| child.accept(self));
        }

        fn visit_function(&mut self, node: &Node, _: &Function) {
            self.internal += 1;
            node.children().iter().for_each(|child| child.accept(self));
        }

        fn visit_paren(&mut self, _: &Node, _: Paren) {}
    }

    #[test]
    fn dispatch_reaches_every_node() {
        let tree = Node::binary(
            Operator::add(),
            Node::constant(2.0, 0..1),
            Node::unary(Operator::neg(), Node::constant(3.0, 3..4), 2..4),
            0..4,
        );

        let mut counter = Counter::default();
        tree.accept(&mut counter);
        assert_eq!((counter.leaves, counter.internal), (2, 2));
    }
}
