//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Category`] each kind of error belongs to.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad class an error belongs to.
///
/// Callers use the category to decide how to present a failure: malformed input is the user's
/// mistake, unsupported constructs are a limitation of the differentiator, and evaluation errors
/// come from trying to compute a value that has no numeric meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// The token sequence cannot be reduced to exactly one tree.
    MalformedExpression,

    /// The tree contains an operator, function, or arity outside the supported rule set.
    UnsupportedConstruct,

    /// A numeric value was requested for a tree that has none, such as one containing a variable.
    Evaluation,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::MalformedExpression => write!(f, "malformed expression"),
            Self::UnsupportedConstruct => write!(f, "unsupported construct"),
            Self::Evaluation => write!(f, "evaluation error"),
        }
    }
}

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as a [`dyn Any`], so that it can be downcast to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// The category this error belongs to.
    fn category(&self) -> Category;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// The category of the underlying error kind.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns true if the underlying error kind is of type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the underlying error kind if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer, rendered against the given input.
    pub fn write_report(&self, src_id: &str, input: &str, w: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }

    /// Prints the report for this error to stderr, rendered against the given input.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {:?}", self.category(), self.kind)
    }
}

impl std::error::Error for Error {}
