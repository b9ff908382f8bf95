//! Symbolic differentiation.
//!
//! Every rule builds a new tree and never modifies its input. A subexpression that appears in
//! the result more than once is copied for each occurrence.

mod function;

use crate::numerical::eval::Eval;
use super::{copy::copy, error::{kind, Error}};
use std::ops::Range;
use symtree_parser::parser::{
    ast::{Node, Visitor},
    token::{Function, FunctionKind, Interner, Operator, OperatorKind, Paren, Variable},
};
use tracing::debug;

/// Computes the derivative of `f` with respect to the variable named `with`.
///
/// Variables other than `with` are treated as unknown functions of it: the derivative of `y` is
/// the interned placeholder variable `y'`. Returns [`Err`] with an
/// [`UnsupportedConstruct`](symtree_error::Category::UnsupportedConstruct) error if the tree
/// contains something the rule table does not cover, including powers whose base and exponent
/// both contain variables.
pub fn derivative(f: &Node, with: &str, interner: &mut Interner) -> Result<Node, Error> {
    let result = f.accept(&mut Differentiator { with, interner })?;
    debug!(target: "derivative", with, input_nodes = f.size(), output_nodes = result.size(), "differentiated");
    Ok(result)
}

/// State shared by the rules: the target variable and the interner used for copies and
/// placeholder names.
pub(crate) struct Differentiator<'a> {
    with: &'a str,
    interner: &'a mut Interner,
}

impl Differentiator<'_> {
    /// Differentiates a subtree.
    fn diff(&mut self, f: &Node) -> Result<Node, Error> {
        f.accept(self)
    }

    /// Copies a subtree.
    fn copy(&mut self, f: &Node) -> Node {
        copy(f, self.interner)
    }
}

/// `f * g`, spanning the node it was derived from.
fn mul(f: Node, g: Node, span: &Range<usize>) -> Node {
    Node::binary(Operator::mul(), f, g, span.clone())
}

/// `(+f)' = +(f')`, `(-f)' = -(f')`
fn prefix_rule(d: &mut Differentiator, op: &Operator, f: &Node, span: Range<usize>) -> Result<Node, Error> {
    Ok(Node::unary(*op, d.diff(f)?, span))
}

/// `(f + g)' = f' + g'`, `(f - g)' = f' - g'`
fn sum_rule(d: &mut Differentiator, op: &Operator, f: &Node, g: &Node, span: Range<usize>) -> Result<Node, Error> {
    Ok(Node::binary(*op, d.diff(f)?, d.diff(g)?, span))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(d: &mut Differentiator, f: &Node, g: &Node, span: Range<usize>) -> Result<Node, Error> {
    let lhs = mul(d.diff(f)?, d.copy(g), &span);
    let rhs = mul(d.copy(f), d.diff(g)?, &span);
    Ok(Node::binary(Operator::add(), lhs, rhs, span))
}

/// `(f / g)' = (f' * g - f * g') / (g * g)`
fn quotient_rule(d: &mut Differentiator, f: &Node, g: &Node, span: Range<usize>) -> Result<Node, Error> {
    let lhs = mul(d.diff(f)?, d.copy(g), &span);
    let rhs = mul(d.copy(f), d.diff(g)?, &span);
    let numerator = Node::binary(Operator::sub(), lhs, rhs, span.clone());
    let denominator = mul(d.copy(g), d.copy(g), &span);
    Ok(Node::binary(Operator::div(), numerator, denominator, span))
}

/// - `(C ^ D)' = 0`
/// - `(f ^ C)' = C * f' * f ^ (C - 1)`, with `C - 1` folded to a constant
/// - `(C ^ f)' = ln(C) * C ^ f * f'`
///
/// where `C` and `D` contain no variables.
fn power_rule(d: &mut Differentiator, base: &Node, exp: &Node, span: Range<usize>) -> Result<Node, Error> {
    match (base.is_constant(), exp.is_constant()) {
        (true, true) => Ok(Node::constant(0.0, span)),
        (false, true) => {
            let lowered = Node::constant(exp.eval_default()? - 1.0, exp.span());
            let scaled = mul(d.copy(exp), d.diff(base)?, &span);
            let power = Node::binary(Operator::pow(), d.copy(base), lowered, span.clone());
            Ok(mul(scaled, power, &span))
        },
        (true, false) => {
            let ln = Node::function(Function::new(FunctionKind::Ln), d.copy(base), base.span());
            let power = Node::binary(Operator::pow(), d.copy(base), d.copy(exp), span.clone());
            let outer = mul(ln, power, &span);
            Ok(mul(outer, d.diff(exp)?, &span))
        },
        (false, false) => Err(Error::new(vec![base.span(), exp.span()], kind::NonConstantPower)),
    }
}

/// Builds the error for an operator or function applied to an unsupported number of operands.
fn unsupported_arity(node: &Node, token: &str) -> Error {
    Error::new(vec![node.span()], kind::UnsupportedArity {
        token: token.to_owned(),
        arity: node.children().len(),
    })
}

impl Visitor for Differentiator<'_> {
    type Output = Result<Node, Error>;

    /// `C' = 0`
    fn visit_constant(&mut self, node: &Node, _: f64) -> Self::Output {
        Ok(Node::constant(0.0, node.span()))
    }

    /// `x' = 1` for the target variable, `y' = y'` (a placeholder) for any other.
    fn visit_variable(&mut self, node: &Node, var: &Variable) -> Self::Output {
        if var.name() == self.with {
            Ok(Node::constant(1.0, node.span()))
        } else {
            let placeholder = self.interner.intern(&var.derivative_name());
            Ok(Node::variable(placeholder, node.span()))
        }
    }

    fn visit_operator(&mut self, node: &Node, op: &Operator) -> Self::Output {
        let span = node.span();
        match (op.kind, node.children()) {
            (OperatorKind::Neg | OperatorKind::Plus, [f]) => prefix_rule(self, op, f, span),
            (OperatorKind::Add | OperatorKind::Sub, [f, g]) => sum_rule(self, op, f, g, span),
            (OperatorKind::Mul, [f, g]) => product_rule(self, f, g, span),
            (OperatorKind::Div, [f, g]) => quotient_rule(self, f, g, span),
            (OperatorKind::Pow, [f, g]) => power_rule(self, f, g, span),
            (op_kind, [_] | [_, _]) => Err(Error::new(vec![span], kind::UnsupportedToken {
                token: format!("{} with {} operand(s)", op_kind.name(), node.children().len()),
            })),
            (op_kind, _) => Err(unsupported_arity(node, op_kind.name())),
        }
    }

    fn visit_function(&mut self, node: &Node, func: &Function) -> Self::Output {
        match node.children() {
            [f] if func.arity == 1 => function::chain_rule(self, func.kind, f, node.span()),
            _ => Err(unsupported_arity(node, func.kind.name())),
        }
    }

    fn visit_paren(&mut self, node: &Node, _: Paren) -> Self::Output {
        Err(Error::new(vec![node.span()], kind::UnsupportedToken {
            token: "a parenthesis".to_owned(),
        }))
    }
}
