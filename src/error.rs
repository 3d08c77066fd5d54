// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Error types for identifier allocation and encoding.
//!
//! Argument and encoding errors are always reported. Contract violations
//! (freeing something that is not currently issued) are reported only when
//! the factory can see them: range releases are always checked, single
//! releases only when liveness tracking is on. With tracking off a bad
//! single release is accepted and may later hand out a duplicate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type IdResult<T> = Result<T, IdError>;

/// Errors raised by the factory and the codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// A request was malformed, e.g. an empty range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The value does not fit the fixed encoding width.
    #[error("value {value} does not fit in {width} bytes")]
    EncodingOverflow { value: u64, width: usize },

    /// The caller released something the factory never issued, or
    /// released it twice.
    #[error("contract violation for id {value}: {reason}")]
    CallerContractViolation { value: u64, reason: &'static str },

    /// The input buffer ended before a whole value was read.
    #[error("truncated input: needed {needed} bytes, had {available}")]
    Truncated { needed: usize, available: usize },

    /// The input bytes are not a valid encoding.
    #[error("malformed encoding: {0}")]
    Malformed(&'static str),
}
