//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while checking core values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed mission: `{field}` {reason}")]
    MalformedMission {
        field:  &'static str,
        reason: String,
    },
}

/// Shorthand result type for `od-core`.
pub type CoreResult<T> = Result<T, CoreError>;
