//! Sequence error types.

use std::error::Error;
use std::fmt;

/// Errors returned by [`DynamicSequence`](crate::DynamicSequence) operations.
///
/// Validation always happens before any state change, so a returned error
/// never leaves the sequence partially mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// A construction parameter was rejected (negative capacity, or a
    /// growth configuration that could never make progress).
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },
    /// An index fell outside the valid range of the operation.
    ///
    /// Access, replace and remove accept `[0, len)`; insert accepts `[0, len]`.
    IndexOutOfBounds {
        /// The index supplied by the caller.
        index: isize,
        /// Number of elements in the sequence at the time of the call.
        len: usize,
    },
}

impl SequenceError {
    pub(crate) fn out_of_bounds(index: isize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for sequence of size {len}")
            }
        }
    }
}

impl Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_index_and_size() {
        let err = SequenceError::out_of_bounds(-1, 0);
        assert_eq!(
            err.to_string(),
            "index -1 is out of bounds for sequence of size 0"
        );
    }

    #[test]
    fn invalid_argument_message_carries_reason() {
        let err = SequenceError::InvalidArgument {
            reason: "capacity must be >= 0, got -5".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument: capacity must be >= 0, got -5"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: Error>(_: &E) {}
        assert_error(&SequenceError::out_of_bounds(3, 2));
    }
}
