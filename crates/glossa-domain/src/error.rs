//! Error types for the domain layer

use thiserror::Error;

/// Errors raised when a domain invariant is violated
///
/// These are programming-contract violations, not runtime conditions to
/// recover from: a classification call either returns a complete result or
/// fails with one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Confidence score outside the [0.0, 1.0] range
    #[error("confidence {0} out of range [0.0, 1.0]")]
    ConfidenceOutOfRange(f64),

    /// Span interval is empty or inverted
    #[error("invalid span interval: start {start} must be less than end {end}")]
    InvalidInterval {
        /// Start offset of the rejected interval
        start: usize,
        /// End offset of the rejected interval
        end: usize,
    },

    /// Span carries no detection method
    #[error("span must carry at least one detection method")]
    NoMethods,
}
