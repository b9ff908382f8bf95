//! Derivatives of the elementary functions, combined with the chain rule.

use super::{mul, Differentiator, Error};
use std::ops::Range;
use symtree_parser::parser::{
    ast::Node,
    token::{Function, FunctionKind, Operator},
};

/// `func(copy(f))`
fn apply(d: &mut Differentiator, kind: FunctionKind, f: &Node, span: &Range<usize>) -> Node {
    Node::function(Function::new(kind), d.copy(f), span.clone())
}

/// `g ^ 2`
fn squared(g: Node, span: &Range<usize>) -> Node {
    Node::binary(Operator::pow(), g, Node::constant(2.0, span.clone()), span.clone())
}

/// Computes the derivative of `kind(f)`:
///
/// - `sin(f)' = f' * cos(f)`
/// - `cos(f)' = f' * -sin(f)`
/// - `tan(f)' = f' / cos(f) ^ 2`
/// - `cot(f)' = f' / -(sin(f) ^ 2)`
/// - `ln(f)' = f' / f`
pub(super) fn chain_rule(
    d: &mut Differentiator,
    kind: FunctionKind,
    f: &Node,
    span: Range<usize>,
) -> Result<Node, Error> {
    let inner = d.diff(f)?;

    Ok(match kind {
        FunctionKind::Sin => mul(inner, apply(d, FunctionKind::Cos, f, &span), &span),
        FunctionKind::Cos => {
            let sin = apply(d, FunctionKind::Sin, f, &span);
            mul(inner, Node::unary(Operator::neg(), sin, span.clone()), &span)
        },
        FunctionKind::Tan => {
            let cos = apply(d, FunctionKind::Cos, f, &span);
            Node::binary(Operator::div(), inner, squared(cos, &span), span)
        },
        FunctionKind::Cot => {
            let sin = apply(d, FunctionKind::Sin, f, &span);
            let denominator = Node::unary(Operator::neg(), squared(sin, &span), span.clone());
            Node::binary(Operator::div(), inner, denominator, span)
        },
        FunctionKind::Ln => Node::binary(Operator::div(), inner, d.copy(f), span),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symtree_parser::parser::{parse, token::Interner};
    use crate::symbolic::derivative;

    fn d_dx(source: &str) -> String {
        let mut interner = Interner::new();
        let tree = parse(source, &mut interner).unwrap();
        derivative(&tree, "x", &mut interner).unwrap().to_string()
    }

    #[test]
    fn sin() {
        assert_eq!(d_dx("sin(x)"), "1 * cos(x)");
    }

    #[test]
    fn cos() {
        assert_eq!(d_dx("cos(x)"), "1 * -sin(x)");
    }

    #[test]
    fn tan() {
        assert_eq!(d_dx("tan(x)"), "1 / cos(x) ^ 2");
    }

    #[test]
    fn cot() {
        assert_eq!(d_dx("cot(x)"), "1 / -(sin(x) ^ 2)");
    }

    #[test]
    fn ln() {
        assert_eq!(d_dx("ln(x)"), "1 / x");
    }

    #[test]
    fn chain() {
        assert_eq!(d_dx("sin(2 * x)"), "(0 * x + 2 * 1) * cos(2 * x)");
    }
}
