use std::fmt::{self, Display, Formatter};
use crate::parser::{ast::Node, token::{Paren, Token}};
use super::{needs_parens, Side};

/// Writes `node`, wrapped in parentheses if `parens` is true.
fn fmt_grouped(f: &mut Formatter, node: &Node, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

/// Compact infix notation, parenthesized only where needed to parse back into the same tree.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match (self.token(), self.children()) {
            (Token::Constant(value), _) => write!(f, "{}", value),
            (Token::Variable(var), _) => write!(f, "{}", var),
            (Token::Paren(Paren::Open), _) => write!(f, "("),
            (Token::Paren(Paren::Close), _) => write!(f, ")"),
            (Token::Operator(op), [operand]) => {
                write!(f, "{}", op.kind.symbol())?;
                let parens = matches!(operand.token(), Token::Operator(inner) if !inner.is_unary());
                fmt_grouped(f, operand, parens)
            },
            (Token::Operator(op), [lhs, rhs]) => {
                fmt_grouped(f, lhs, needs_parens(op, lhs, Side::Left))?;
                write!(f, " {} ", op.kind.symbol())?;
                fmt_grouped(f, rhs, needs_parens(op, rhs, Side::Right))
            },
            (Token::Operator(op), operands) => {
                write!(f, "{}(", op.kind.symbol())?;
                fmt_list(f, operands)?;
                write!(f, ")")
            },
            (Token::Function(func), args) => {
                write!(f, "{}(", func.kind.symbol())?;
                fmt_list(f, args)?;
                write!(f, ")")
            },
        }
    }
}

/// Writes comma-separated operands.
fn fmt_list(f: &mut Formatter, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}
