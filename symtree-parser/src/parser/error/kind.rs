use ariadne::Fmt;
use symtree_attrs::ErrorKind;
use symtree_error::EXPR;

/// A character that does not start any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid symbol found: `{}`", symbol),
    labels = ["this symbol"],
    help = format!("expressions may only contain numbers, names, parentheses, and {}", "+ - * / ^".fg(EXPR)),
    category = MalformedExpression,
)]
pub struct InvalidSymbol {
    /// The offending symbol.
    pub symbol: String,
}

/// A numeric literal could not be converted to a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number: `{}`", literal),
    labels = ["this literal"],
    category = MalformedExpression,
)]
pub struct InvalidNumber {
    /// The literal as written.
    pub literal: String,
}

/// A closing parenthesis has no matching opening parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing open parenthesis",
    labels = ["this parenthesis is never opened"],
    help = format!("add an opening parenthesis {} before it, or remove it", "(".fg(EXPR)),
    category = MalformedExpression,
)]
pub struct MissingOpenParenthesis;

/// An opening parenthesis is never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is never closed"],
    help = format!("add a closing parenthesis {} somewhere after it", ")".fg(EXPR)),
    category = MalformedExpression,
)]
pub struct UnclosedParenthesis;

/// An operator or function has fewer operands available than its arity.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too few operands",
    labels = [format!("this takes {} operand(s), but only {} {} available", expected, found, if *found == 1 { "is" } else { "are" })],
    help = format!("add an {} for it to act on", "expression".fg(EXPR)),
    category = MalformedExpression,
)]
pub struct TooFewOperands {
    /// The arity of the operator.
    pub expected: usize,

    /// The number of operands available.
    pub found: usize,
}

/// Operands are left over after every operator has been applied.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many operands",
    labels = std::iter::repeat("this operand is never combined with the others").take(*extra),
    help = format!("join the operands with an operator, such as {}", "*".fg(EXPR)),
    category = MalformedExpression,
)]
pub struct TooManyOperands {
    /// The number of operands left over, beyond the one that forms the tree.
    pub extra: usize,
}

/// The expression contains no tokens.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = ["expected an expression here"],
    category = MalformedExpression,
)]
pub struct EmptyExpression;
