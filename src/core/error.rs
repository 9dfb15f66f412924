use std::fmt;

/// Failure taxonomy for catalog operations. Every failure is local and
/// recoverable: an operation either fully succeeds or performs no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: out-of-range rating, bad index, empty required field
    InvalidArgument,
    /// Unknown identifier, index out of current bounds, empty history
    NotFound,
    /// Duplicate identifier on insert, blocked artist on add
    Conflict,
    /// No state change was needed (e.g. unblocking a name never blocked)
    NoOp,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Error {
            kind,
            context: context.into(),
        }
    }

    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::InvalidArgument, context)
    }

    pub fn not_found(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::NotFound, context)
    }

    pub fn conflict(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::Conflict, context)
    }

    pub fn no_op(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::NoOp, context)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
