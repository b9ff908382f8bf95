use symtree_parser::parser::{
    ast::{Node, Visitor},
    token::{Function, Interner, Operator, Paren, Token, Variable},
};

/// Returns a structurally independent duplicate of the tree rooted at `node`.
///
/// Variables are looked up in `interner` by name, so the copy refers to the interner's canonical
/// instance of each variable rather than to a new one.
pub fn copy(node: &Node, interner: &mut Interner) -> Node {
    node.accept(&mut Copier { interner })
}

/// Rebuilds each node with recursively copied children.
struct Copier<'a> {
    interner: &'a mut Interner,
}

impl Copier<'_> {
    fn branch(&mut self, token: Token, node: &Node) -> Node {
        let children = node.children()
            .iter()
            .map(|child| child.accept(self))
            .collect();
        Node::new(token, children, node.span())
    }
}

impl Visitor for Copier<'_> {
    type Output = Node;

    fn visit_constant(&mut self, node: &Node, value: f64) -> Node {
        Node::constant(value, node.span())
    }

    fn visit_variable(&mut self, node: &Node, var: &Variable) -> Node {
        Node::variable(self.interner.intern(var.name()), node.span())
    }

    fn visit_operator(&mut self, node: &Node, op: &Operator) -> Node {
        self.branch(Token::Operator(*op), node)
    }

    fn visit_function(&mut self, node: &Node, func: &Function) -> Node {
        self.branch(Token::Function(*func), node)
    }

    fn visit_paren(&mut self, node: &Node, paren: Paren) -> Node {
        Node::leaf(Token::Paren(paren), node.span())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symtree_parser::parser::parse;

    #[test]
    fn copy_is_equal() {
        let mut interner = Interner::new();
        let tree = parse("sin(x) * -(y + 2.5) ^ x", &mut interner).unwrap();
        let copied = copy(&tree, &mut interner);

        assert_eq!(copied, tree);
        assert_eq!(copied.span(), tree.span());
    }

    #[test]
    fn copy_reuses_interned_variables() {
        let mut interner = Interner::new();
        let tree = parse("x + x", &mut interner).unwrap();
        let copied = copy(&tree, &mut interner);

        let Token::Variable(original) = tree.children()[0].token() else {
            panic!("expected a variable");
        };
        let Token::Variable(duplicate) = copied.children()[1].token() else {
            panic!("expected a variable");
        };
        assert!(original.ptr_eq(duplicate));
        assert_eq!(interner.len(), 1);
    }
}
