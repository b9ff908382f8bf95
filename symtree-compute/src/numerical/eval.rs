use super::{ctxt::Ctxt, error::{kind, Error}};
use symtree_parser::parser::{
    ast::{Node, Visitor},
    token::{Function, FunctionKind, Operator, OperatorKind, Paren, Variable},
};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context, in which no
    /// variable has a value.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Node {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        self.accept(&mut Evaluator { ctxt })
    }
}

/// Bottom-up evaluation with IEEE double arithmetic. Division by zero is not an error; it
/// produces an infinity or NaN like any other floating-point operation.
struct Evaluator<'a> {
    ctxt: &'a Ctxt,
}

impl Evaluator<'_> {
    /// Evaluates every child of the node, in order.
    fn operands(&mut self, node: &Node) -> Result<Vec<f64>, Error> {
        node.children()
            .iter()
            .map(|child| child.accept(self))
            .collect()
    }
}

/// Builds the error for a token with no arithmetic definition at the given arity.
fn unsupported(node: &Node, token: &str, arity: usize) -> Error {
    Error::new(vec![node.span()], kind::UnsupportedOperation {
        token: token.to_owned(),
        arity,
    })
}

impl Visitor for Evaluator<'_> {
    type Output = Result<f64, Error>;

    fn visit_constant(&mut self, _: &Node, value: f64) -> Self::Output {
        Ok(value)
    }

    fn visit_variable(&mut self, node: &Node, var: &Variable) -> Self::Output {
        self.ctxt.get_var(var.name()).ok_or_else(|| Error::new(vec![node.span()], kind::UnboundVariable {
            name: var.name().to_owned(),
        }))
    }

    fn visit_operator(&mut self, node: &Node, op: &Operator) -> Self::Output {
        let operands = self.operands(node)?;
        match (op.kind, operands.as_slice()) {
            (OperatorKind::Add, [a, b]) => Ok(a + b),
            (OperatorKind::Sub, [a, b]) => Ok(a - b),
            (OperatorKind::Mul, [a, b]) => Ok(a * b),
            (OperatorKind::Div, [a, b]) => Ok(a / b),
            (OperatorKind::Pow, [a, b]) => Ok(a.powf(*b)),
            (OperatorKind::Neg, [a]) => Ok(-a),
            (OperatorKind::Plus, [a]) => Ok(*a),
            (kind, operands) => Err(unsupported(node, kind.name(), operands.len())),
        }
    }

    fn visit_function(&mut self, node: &Node, func: &Function) -> Self::Output {
        let args = self.operands(node)?;
        let [arg] = args.as_slice() else {
            return Err(unsupported(node, func.kind.name(), args.len()));
        };

        Ok(match func.kind {
            FunctionKind::Sin => arg.sin(),
            FunctionKind::Cos => arg.cos(),
            FunctionKind::Tan => arg.tan(),
            FunctionKind::Cot => arg.tan().recip(),
            FunctionKind::Ln => arg.ln(),
        })
    }

    fn visit_paren(&mut self, node: &Node, _: Paren) -> Self::Output {
        Err(unsupported(node, "PARENTHESIS", 0))
    }
}
