//! Errors raised while pulling from a sequence.

use thiserror::Error;

/// Failure of a single `advance` call.
///
/// Lazily evaluated constructors check their arguments on the first pull, so
/// most of these surface from [`Sequence::advance`](crate::Sequence::advance)
/// rather than from the constructor itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A precondition on an operator argument does not hold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A recursive definition asked for one of its own elements before that
    /// element was computed.
    #[error("recursive sequence demanded its own unevaluated element")]
    CyclicDemand,
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(%reason, "rejecting sequence argument");
        Error::InvalidArgument(reason)
    }
}

/// Result of a consumer or other fallible sequence operation.
pub type Result<T> = std::result::Result<T, Error>;
