pub mod func;
pub mod op;
pub mod var;

pub use func::{Function, FunctionKind};
pub use op::{Associativity, Operator, OperatorKind, Precedence};
pub use var::{Interner, Variable};

/// Whether a parenthesis opens or closes a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

/// A lexical unit of an expression.
///
/// Every consumer of tokens (the tree builder, the evaluator, the copier, the differentiator and
/// the renderers) matches on this enum exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Constant(f64),

    /// A named variable.
    Variable(Variable),

    /// An opening or closing parenthesis. Parentheses only exist in token streams; a built tree
    /// never contains them.
    Paren(Paren),

    /// A prefix or infix operator.
    Operator(Operator),

    /// An elementary function.
    Function(Function),
}

impl Token {
    /// The number of children a node holding this token has.
    pub fn arity(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable(_) | Self::Paren(_) => 0,
            Self::Operator(op) => op.arity,
            Self::Function(func) => func.arity,
        }
    }

    /// The precedence and associativity used to order this token on the builder's operator
    /// stack. Functions behave like right-associative operators of the highest precedence.
    pub fn binding(&self) -> Option<(Precedence, Associativity)> {
        match self {
            Self::Operator(op) => Some((op.precedence, op.associativity)),
            Self::Function(_) => Some((Precedence::PREFIX, Associativity::Right)),
            Self::Constant(_) | Self::Variable(_) | Self::Paren(_) => None,
        }
    }

    /// Returns true if this token can be the last token of a value: a constant, a variable, or a
    /// closing parenthesis. A `+` or `-` following such a token is binary; otherwise it is a
    /// prefix operator.
    pub fn ends_value(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_) | Self::Paren(Paren::Close))
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Function> for Token {
    fn from(func: Function) -> Self {
        Self::Function(func)
    }
}

impl From<Variable> for Token {
    fn from(var: Variable) -> Self {
        Self::Variable(var)
    }
}
