use std::{io, path::PathBuf};
use symtree_error::Error as ExprError;

/// Utility enum to package errors that can occur while processing an expression.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed, differentiated, or evaluated.
    Expression(ExprError),

    /// An output file could not be written.
    Write(PathBuf, io::Error),
}

impl Error {
    /// Report this [`Error`] to stderr.
    ///
    /// Expression errors are rendered as `ariadne` reports pointing into `input`.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Expression(err) => {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    eprintln!("{} ({})", err, io_err);
                }
            },
            Self::Write(path, err) => eprintln!("could not write `{}`: {}", path.display(), err),
        }
    }
}

impl From<ExprError> for Error {
    fn from(err: ExprError) -> Self {
        Self::Expression(err)
    }
}
