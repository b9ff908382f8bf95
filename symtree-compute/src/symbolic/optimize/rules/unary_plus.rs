use crate::symbolic::{optimize::{Pass, Step}, step_collector::StepCollector};
use symtree_parser::parser::{ast::Node, token::OperatorKind};
use tracing::trace;

/// Removes every unary plus: `+f = f`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnaryPlus;

impl Pass for UnaryPlus {
    fn name(&self) -> &'static str {
        "unary-plus elimination"
    }

    fn rewrite(&self, node: Node, steps: &mut dyn StepCollector<Step>) -> Node {
        let mut node = node;
        loop {
            let span = node.span();
            match node.into_unary_operand(OperatorKind::Plus) {
                Ok(operand) => {
                    trace!(target: "optimize", ?span, "removing unary plus");
                    steps.push(Step::RemoveUnaryPlus(span));
                    node = operand;
                },
                Err(unchanged) => {
                    node = unchanged;
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
    use symtree_parser::parser::{parse, token::Interner};

    fn run(source: &str) -> (String, Vec<Step>) {
        let mut interner = Interner::new();
        let tree = parse(source, &mut interner).unwrap();
        let mut steps = Vec::new();
        let result = UnaryPlus.rewrite(tree, &mut steps);
        (result.to_string(), steps)
    }

    #[test]
    fn removes_chains() {
        assert_eq!(run("++x").0, "x");
        assert_eq!(run("-+-+-5").0, "---5");
    }

    #[test]
    fn removes_nested() {
        let (result, steps) = run("+2 * (+x - +(+3))");
        assert_eq!(result, "2 * (x - 3)");
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn records_spans() {
        let (_, steps) = run("1 - +x");
        assert_eq!(steps, vec![Step::RemoveUnaryPlus(4..6)]);
    }

    #[test]
    fn idempotent() {
        let mut interner = Interner::new();
        let tree = parse("+(+1 + ++sin(+x))", &mut interner).unwrap();
        let once = UnaryPlus.rewrite(tree, &mut ());
        let copied = crate::symbolic::copy(&once, &mut interner);
        let twice = UnaryPlus.rewrite(copied, &mut ());
        assert_eq!(once, twice);
    }
}
