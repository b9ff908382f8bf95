use ariadne::Fmt;
use symtree_attrs::ErrorKind;
use symtree_error::EXPR;

/// An operator or function was applied to a number of operands the differentiation rules do not
/// cover.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate {} with {} operand(s)", token, arity),
    labels = ["this expression"],
    help = "operators must take one or two operands, and functions exactly one",
    category = UnsupportedConstruct,
)]
pub struct UnsupportedArity {
    /// A description of the token, such as `MULTIPLICATION`.
    pub token: String,

    /// The number of operands.
    pub arity: usize,
}

/// A token has no differentiation rule.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate {}", token),
    labels = ["this expression"],
    category = UnsupportedConstruct,
)]
pub struct UnsupportedToken {
    /// A description of the token.
    pub token: String,
}

/// Both the base and the exponent of a power depend on a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot differentiate a power whose base and exponent both contain variables",
    labels = ["this base", "this exponent"],
    help = format!(
        "only powers like {} or {}, with a variable-free exponent or base, can be differentiated",
        "f^2".fg(EXPR),
        "2^f".fg(EXPR),
    ),
    category = UnsupportedConstruct,
)]
pub struct NonConstantPower;
