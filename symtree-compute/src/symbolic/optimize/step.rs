use std::{fmt::{self, Display, Formatter}, ops::Range};

/// A rewrite applied by an optimizer pass, with the span of the node it replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `+f` was replaced by `f`.
    RemoveUnaryPlus(Range<usize>),

    /// `--f` was replaced by `f`.
    CollapseDoubleNegation(Range<usize>),
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::RemoveUnaryPlus(span) => write!(f, "removed unary plus at {:?}", span),
            Self::CollapseDoubleNegation(span) => write!(f, "collapsed double negation at {:?}", span),
        }
    }
}
