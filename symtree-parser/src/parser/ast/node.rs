use crate::parser::token::{Function, Operator, OperatorKind, Token, Variable};
use std::ops::Range;

/// A node of an expression tree: a token and exactly [`Token::arity`] children.
///
/// Every node is owned by exactly one parent. [`Node`] does not implement [`Clone`]; a subtree
/// that must appear in several places is duplicated with an explicit copy. Nodes are immutable
/// once built. Rewrites consume a node and return its replacement.
#[derive(Debug)]
pub struct Node {
    token: Token,
    children: Vec<Node>,
    span: Range<usize>,
}

impl Node {
    /// Creates a node from a token and its children.
    ///
    /// # Panics
    ///
    /// Panics if the number of children differs from the token's arity.
    pub fn new(token: Token, children: Vec<Node>, span: Range<usize>) -> Self {
        assert_eq!(children.len(), token.arity(), "arity mismatch for {:?}", token);
        Self { token, children, span }
    }

    /// Creates a childless node.
    pub fn leaf(token: Token, span: Range<usize>) -> Self {
        Self::new(token, Vec::new(), span)
    }

    /// Creates a constant node.
    pub fn constant(value: f64, span: Range<usize>) -> Self {
        Self::leaf(Token::Constant(value), span)
    }

    /// Creates a variable node.
    pub fn variable(var: Variable, span: Range<usize>) -> Self {
        Self::leaf(Token::Variable(var), span)
    }

    /// Creates a node applying a prefix operator to one operand.
    pub fn unary(op: Operator, operand: Node, span: Range<usize>) -> Self {
        Self::new(Token::Operator(op), vec![operand], span)
    }

    /// Creates a node applying an infix operator to two operands.
    pub fn binary(op: Operator, lhs: Node, rhs: Node, span: Range<usize>) -> Self {
        Self::new(Token::Operator(op), vec![lhs, rhs], span)
    }

    /// Creates a node applying a function to its argument.
    pub fn function(func: Function, arg: Node, span: Range<usize>) -> Self {
        Self::new(Token::Function(func), vec![arg], span)
    }

    /// The token held by this node.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The children of this node, in operand order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The region of the source code this node was built from.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Consumes the node, returning its token, children and span.
    pub fn into_parts(self) -> (Token, Vec<Node>, Range<usize>) {
        (self.token, self.children, self.span)
    }

    /// Consumes the node, returning a node with the same token and span whose children have
    /// each been replaced by `f`.
    pub fn map_children(self, f: impl FnMut(Node) -> Node) -> Self {
        let children = self.children.into_iter().map(f).collect();
        Self { token: self.token, children, span: self.span }
    }

    /// If this node is the given operator kind applied to a single operand, returns the operand.
    pub fn unary_operand(&self, kind: OperatorKind) -> Option<&Node> {
        match (&self.token, self.children.as_slice()) {
            (Token::Operator(op), [operand]) if op.kind == kind => Some(operand),
            _ => None,
        }
    }

    /// If this node is the given operator kind applied to a single operand, returns the operand.
    /// Otherwise returns the node unchanged.
    pub fn into_unary_operand(self, kind: OperatorKind) -> Result<Node, Node> {
        if self.unary_operand(kind).is_none() {
            return Err(self);
        }

        let Node { token, children, span } = self;
        match <[Node; 1]>::try_from(children) {
            Ok([operand]) => Ok(operand),
            Err(children) => Err(Node { token, children, span }),
        }
    }

    /// Returns true if no variable occurs anywhere in this subtree.
    pub fn is_constant(&self) -> bool {
        !matches!(self.token, Token::Variable(_))
            && self.children.iter().all(Node::is_constant)
    }

    /// The number of nodes in this subtree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }
}

/// Structural equality. Spans are metadata and are ignored.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token && self.children == other.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::{FunctionKind, Interner};

    #[test]
    fn equality_ignores_spans() {
        let a = Node::binary(Operator::add(), Node::constant(1.0, 0..1), Node::constant(2.0, 4..5), 0..5);
        let b = Node::binary(Operator::add(), Node::constant(1.0, 0..0), Node::constant(2.0, 0..0), 0..0);
        assert_eq!(a, b);
    }

    #[test]
    fn constant_means_variable_free() {
        let mut interner = Interner::new();
        let x = interner.intern("x");

        let folded = Node::function(
            Function::new(FunctionKind::Sin),
            Node::binary(Operator::mul(), Node::constant(2.0, 0..0), Node::constant(3.0, 0..0), 0..0),
            0..0,
        );
        let free = Node::unary(Operator::neg(), Node::variable(x, 0..0), 0..0);

        assert!(folded.is_constant());
        assert!(!free.is_constant());
        assert_eq!(folded.size(), 4);
    }

    #[test]
    fn into_unary_operand() {
        let neg = Node::unary(Operator::neg(), Node::constant(1.0, 1..2), 0..2);
        assert_eq!(neg.into_unary_operand(OperatorKind::Neg), Ok(Node::constant(1.0, 1..2)));

        let plus = Node::unary(Operator::plus(), Node::constant(1.0, 1..2), 0..2);
        let unchanged = plus.into_unary_operand(OperatorKind::Neg).unwrap_err();
        assert_eq!(unchanged.span(), 0..2);
    }

    #[test]
    #[should_panic(expected = "arity mismatch")]
    fn arity_checked() {
        Node::new(Token::Operator(Operator::add()), vec![Node::constant(1.0, 0..0)], 0..0);
    }

    #[test]
    fn map_children_keeps_token() {
        let node = Node::unary(Operator::neg(), Node::constant(1.0, 0..0), 0..0);
        let mapped = node.map_children(|_| Node::constant(2.0, 0..0));
        assert_eq!(mapped, Node::unary(Operator::neg(), Node::constant(2.0, 0..0), 0..0));
    }
}
