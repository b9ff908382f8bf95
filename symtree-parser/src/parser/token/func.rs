//! Elementary functions.

/// The elementary function applied by a [`Function`] token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Sin,
    Cos,
    Tan,
    Cot,
    Ln,
}

impl FunctionKind {
    /// Returns the function with the given name, if there is one.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "cot" => Some(Self::Cot),
            "ln" => Some(Self::Ln),
            _ => None,
        }
    }

    /// The name used to call the function in source text.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Ln => "ln",
        }
    }

    /// The upper-case name of the function, as used in tree dumps and graph labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "SINE",
            Self::Cos => "COSINE",
            Self::Tan => "TANGENT",
            Self::Cot => "COTANGENT",
            Self::Ln => "NATURAL_LOG",
        }
    }

    /// The LaTeX command that typesets the function name.
    pub fn latex(self) -> &'static str {
        match self {
            Self::Sin => "\\sin",
            Self::Cos => "\\cos",
            Self::Tan => "\\tan",
            Self::Cot => "\\cot",
            Self::Ln => "\\ln",
        }
    }
}

/// A function token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Function {
    /// The function applied.
    pub kind: FunctionKind,

    /// The number of arguments. Every function the scanner produces takes exactly one.
    pub arity: usize,
}

impl Function {
    /// Creates a single-argument function token.
    pub fn new(kind: FunctionKind) -> Self {
        Self { kind, arity: 1 }
    }
}
