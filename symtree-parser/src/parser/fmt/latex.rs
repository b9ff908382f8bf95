use std::fmt::{Formatter, Result};
use crate::parser::{
    ast::Node,
    token::{OperatorKind, Paren, Precedence, Token},
};
use super::{needs_parens, Latex, Side};

/// Writes `node` as LaTeX, wrapped in `\left(` and `\right)` if `parens` is true.
fn fmt_grouped(f: &mut Formatter, node: &Node, parens: bool) -> Result {
    if parens {
        write!(f, "\\left(")?;
        node.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        node.fmt_latex(f)
    }
}

/// Returns true if the node applies an operator to exactly one operand.
fn is_prefix(node: &Node) -> bool {
    matches!(node.token(), Token::Operator(op) if op.is_unary())
}

impl Latex for Node {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match (self.token(), self.children()) {
            (Token::Constant(value), _) => write!(f, "{}", value),
            (Token::Variable(var), _) => write!(f, "{}", var),
            (Token::Paren(Paren::Open), _) => write!(f, "\\left("),
            (Token::Paren(Paren::Close), _) => write!(f, "\\right)"),
            (Token::Operator(op), [operand]) => {
                write!(f, "{}", op.kind.symbol())?;
                let parens = matches!(
                    operand.token(),
                    Token::Operator(inner) if !inner.is_unary() && inner.precedence <= Precedence::TERM
                );
                fmt_grouped(f, operand, parens)
            },
            (Token::Operator(op), [num, den]) if op.kind == OperatorKind::Div => {
                write!(f, "\\frac{{")?;
                num.fmt_latex(f)?;
                write!(f, "}}{{")?;
                den.fmt_latex(f)?;
                write!(f, "}}")
            },
            (Token::Operator(op), [base, exp]) if op.kind == OperatorKind::Pow => {
                fmt_grouped(f, base, is_prefix(base) || needs_parens(op, base, Side::Left))?;
                write!(f, "^{{")?;
                exp.fmt_latex(f)?;
                write!(f, "}}")
            },
            (Token::Operator(op), [lhs, rhs]) => {
                fmt_grouped(f, lhs, needs_parens(op, lhs, Side::Left))?;
                match op.kind {
                    OperatorKind::Mul => write!(f, " \\cdot ")?,
                    kind => write!(f, " {} ", kind.symbol())?,
                }
                fmt_grouped(f, rhs, needs_parens(op, rhs, Side::Right))
            },
            (Token::Operator(op), operands) => {
                write!(f, "\\operatorname{{{}}}\\left(", op.kind.symbol())?;
                fmt_list(f, operands)?;
                write!(f, "\\right)")
            },
            (Token::Function(func), args) => {
                write!(f, "{}\\left(", func.kind.latex())?;
                fmt_list(f, args)?;
                write!(f, "\\right)")
            },
        }
    }
}

/// Writes comma-separated operands as LaTeX.
fn fmt_list(f: &mut Formatter, nodes: &[Node]) -> Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        node.fmt_latex(f)?;
    }
    Ok(())
}
