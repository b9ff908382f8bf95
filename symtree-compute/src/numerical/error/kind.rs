use ariadne::Fmt;
use symtree_attrs::ErrorKind;
use symtree_error::EXPR;

/// A variable was reached during evaluation, but it has no numeric value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no value", self.name),
    labels = ["this variable"],
    help = format!("only expressions without variables, such as {}, can be evaluated", "2 * (3 + 4)".fg(EXPR)),
    category = Evaluation,
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: String,
}

/// An operator or function was applied to a number of operands it has no arithmetic definition
/// for, or the tree contains a token that cannot be evaluated at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot evaluate {} with {} operand(s)", self.token, self.arity),
    labels = ["this expression"],
    category = UnsupportedConstruct,
)]
pub struct UnsupportedOperation {
    /// A description of the token, such as `MULTIPLICATION`.
    pub token: String,

    /// The number of operands it was applied to.
    pub arity: usize,
}
