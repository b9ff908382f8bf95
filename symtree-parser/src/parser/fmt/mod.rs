//! Renderers for expression trees: compact infix text ([`Display`]), LaTeX ([`Latex`]), an
//! indented dump ([`Dump`]) and a Graphviz graph ([`Dot`]).

mod dot;
mod dump;
mod infix;
mod latex;

pub use dot::Dot;
pub use dump::Dump;

use std::fmt::{Display, Formatter, Result};
use super::{ast::Node, token::{Associativity, Operator, Token}};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Which operand of a binary operator a child is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Returns true if `child`, written as the given operand of the binary operator `parent`, must
/// be parenthesized to parse back into the same tree.
fn needs_parens(parent: &Operator, child: &Node, side: Side) -> bool {
    let Token::Operator(child_op) = child.token() else {
        return false;
    };
    if child_op.is_unary() {
        return false;
    }

    if child_op.precedence != parent.precedence {
        return child_op.precedence < parent.precedence;
    }

    match parent.associativity {
        Associativity::Left => side == Side::Right,
        Associativity::Right => side == Side::Left,
    }
}
