//! Error types for the integration entry points and specialized builders.

use thiserror::Error;

/// Validation failure at an integration entry boundary.
///
/// These are the only errors the driver returns: once validation passes,
/// step-budget exhaustion and step-size degeneration terminate gracefully
/// with a partial [`Solution`](crate::driver::Solution) instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The series order must be at least 1.
    #[error("series order must be at least 1")]
    InvalidOrder,
    /// The absolute tolerance must be positive and finite.
    #[error("absolute tolerance must be positive and finite")]
    InvalidTolerance,
    /// The step cap must be at least 1.
    #[error("max_steps must be at least 1")]
    InvalidMaxSteps,
    /// Vector entry points need at least one state component.
    #[error("initial state must have at least one component")]
    EmptyState,
    /// Range-mode sample times must contain at least one point.
    #[error("sample times must not be empty")]
    EmptyRange,
    /// Range-mode sample times must be strictly monotone.
    #[error("sample times must be strictly monotone")]
    NonMonotoneRange,
}

/// Failure reported by a specialized jet builder.
///
/// A failure during the pre-loop probe downgrades the call to the generic
/// builder with a warning; it is never surfaced as an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JetError {
    /// The builder produced a non-finite coefficient.
    #[error("specialized jet builder produced a non-finite coefficient")]
    NonFinite,
    /// Builder-specific failure.
    #[error("specialized jet builder failed: {0}")]
    Failed(String),
}
