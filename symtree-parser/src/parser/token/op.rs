//! Operators, their precedence and their associativity.

use std::fmt::{self, Display, Formatter};

/// The binding strength of an operator or function.
///
/// The tree builder only ever compares precedences against each other, so any table of values
/// can be encoded; the constants below are the canonical table used by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(pub u32);

impl Precedence {
    /// Precedence of binary `+` and `-`.
    pub const TERM: Self = Self(1);

    /// Precedence of `*` and `/`.
    pub const FACTOR: Self = Self(2);

    /// Precedence of `^`.
    pub const POWER: Self = Self(3);

    /// Precedence of the prefix operators (negation, unary plus) and of functions. This is the
    /// highest precedence.
    pub const PREFIX: Self = Self(1000);
}

impl Display for Precedence {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The associativity of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The operator is left-associative, such as `+`, `-`, `*`, and `/`.
    ///
    /// Left-associative operators are evaluated from left to right: `a - b - c` is
    /// `(a - b) - c`.
    Left,

    /// The operator is right-associative, such as `^` and the prefix operators.
    ///
    /// Right-associative operators are evaluated from right to left: `a ^ b ^ c` is
    /// `a ^ (b ^ c)`.
    Right,
}

/// The operation that an [`Operator`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Plus,
    Pow,
}

impl OperatorKind {
    /// The symbol used to write the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add | Self::Plus => "+",
            Self::Sub | Self::Neg => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// The upper-case name of the operator, as used in tree dumps and graph labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "ADDITION",
            Self::Sub => "SUBTRACTION",
            Self::Mul => "MULTIPLICATION",
            Self::Div => "DIVISION",
            Self::Neg => "ARITHMETIC_NEGATION",
            Self::Plus => "UNARY_ADDITION",
            Self::Pow => "POWER",
        }
    }
}

/// An operator token: its kind plus everything the tree builder needs to place it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    /// The operation performed.
    pub kind: OperatorKind,

    /// The number of operands the operator takes.
    pub arity: usize,

    /// The binding strength of the operator.
    pub precedence: Precedence,

    /// How chains of operators with equal precedence group.
    pub associativity: Associativity,
}

impl Operator {
    /// Creates an operator with an arbitrary arity, precedence and associativity.
    pub fn new(
        kind: OperatorKind,
        arity: usize,
        precedence: Precedence,
        associativity: Associativity,
    ) -> Self {
        Self { kind, arity, precedence, associativity }
    }

    /// Binary addition, `a + b`.
    pub fn add() -> Self {
        Self::new(OperatorKind::Add, 2, Precedence::TERM, Associativity::Left)
    }

    /// Binary subtraction, `a - b`.
    pub fn sub() -> Self {
        Self::new(OperatorKind::Sub, 2, Precedence::TERM, Associativity::Left)
    }

    /// Multiplication, `a * b`.
    pub fn mul() -> Self {
        Self::new(OperatorKind::Mul, 2, Precedence::FACTOR, Associativity::Left)
    }

    /// Division, `a / b`.
    pub fn div() -> Self {
        Self::new(OperatorKind::Div, 2, Precedence::FACTOR, Associativity::Left)
    }

    /// Exponentiation, `a ^ b`.
    pub fn pow() -> Self {
        Self::new(OperatorKind::Pow, 2, Precedence::POWER, Associativity::Right)
    }

    /// Arithmetic negation, `-a`.
    pub fn neg() -> Self {
        Self::new(OperatorKind::Neg, 1, Precedence::PREFIX, Associativity::Right)
    }

    /// Unary plus, `+a`.
    pub fn plus() -> Self {
        Self::new(OperatorKind::Plus, 1, Precedence::PREFIX, Associativity::Right)
    }

    /// Returns true if the operator is a prefix operator taking a single operand.
    pub fn is_unary(&self) -> bool {
        self.arity == 1
    }
}
