//! Patzer engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Patzer engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the patzer engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A search was requested with a depth of zero plies.
    SearchDepthZero,
    /// The rules oracle rejected a move it generated itself,
    /// so the position's apply/undo bookkeeping cannot be trusted.
    OracleIllegalMove,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SearchDepthZero => "search depth zero",
            ErrorKind::OracleIllegalMove => "oracle illegal move",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the patzer engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) => *error_kind,
            Error::Message(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_displays_kind_and_message() {
        let simple = Error::from(ErrorKind::SearchDepthZero);
        assert_eq!(simple.to_string(), "search depth zero");
        assert_eq!(simple.kind(), ErrorKind::SearchDepthZero);

        let message = Error::from((ErrorKind::OracleIllegalMove, "move 7"));
        assert_eq!(message.to_string(), "oracle illegal move: move 7");
        assert_eq!(message.kind(), ErrorKind::OracleIllegalMove);
    }
}
