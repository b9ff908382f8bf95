use crate::symbolic::{optimize::{Pass, Step}, step_collector::StepCollector};
use symtree_parser::parser::{ast::Node, token::OperatorKind};
use tracing::trace;

/// Collapses pairs of adjacent negations: `--f = f`.
///
/// Chains of even length vanish and chains of odd length become a single negation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleNegation;

/// Returns true if the node is a negation of a negation.
fn is_double_negation(node: &Node) -> bool {
    node.unary_operand(OperatorKind::Neg)
        .is_some_and(|inner| inner.unary_operand(OperatorKind::Neg).is_some())
}

impl Pass for DoubleNegation {
    fn name(&self) -> &'static str {
        "double-negation collapse"
    }

    fn rewrite(&self, node: Node, steps: &mut dyn StepCollector<Step>) -> Node {
        let mut node = node;
        while is_double_negation(&node) {
            let span = node.span();
            let grandchild = node.into_unary_operand(OperatorKind::Neg)
                .and_then(|inner| inner.into_unary_operand(OperatorKind::Neg));
            match grandchild {
                Ok(grandchild) => {
                    trace!(target: "optimize", ?span, "collapsing double negation");
                    steps.push(Step::CollapseDoubleNegation(span));
                    node = grandchild;
                },
                // not reached: both negations were checked above
                Err(rest) => {
                    node = rest;
                    break;
                },
            }
        }

        node.map_children(|child| self.rewrite(child, steps))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::numerical::eval::Eval;
    use symtree_parser::parser::{parse, token::Interner};

    fn run(source: &str) -> String {
        let mut interner = Interner::new();
        let tree = parse(source, &mut interner).unwrap();
        DoubleNegation.rewrite(tree, &mut ()).to_string()
    }

    #[test]
    fn chains() {
        assert_eq!(run("--x"), "x");
        assert_eq!(run("---x"), "-x");
        assert_eq!(run("----x"), "x");
        assert_eq!(run("-+-x"), "-+-x");
    }

    #[test]
    fn nested() {
        assert_eq!(run("--(1 - --2) * sin(--x)"), "(1 - 2) * sin(x)");
    }

    #[test]
    fn double_negation_of_subtree() {
        let mut interner = Interner::new();
        let inner = parse("2 * 3 + 4 / 5", &mut interner).unwrap();
        let expected = parse("2 * 3 + 4 / 5", &mut interner).unwrap();
        let tree = parse("--(2 * 3 + 4 / 5)", &mut interner).unwrap();

        let before = tree.eval_default().unwrap();
        let collapsed = DoubleNegation.rewrite(tree, &mut ());
        assert_eq!(collapsed, expected);
        assert_eq!(collapsed.eval_default().unwrap(), before);
        assert_eq!(inner.eval_default().unwrap(), before);
    }
}
