//! Core error type.
//!
//! Sub-crates define their own error enums; the application unifies them
//! with `anyhow`.

use thiserror::Error;

use crate::BoundError;

/// The top-level error type for `tos-core`.
#[derive(Debug, Error)]
pub enum TosError {
    #[error("invalid time window: start {start_ms} ms is not before end {end_ms} ms")]
    InvalidWindow { start_ms: i64, end_ms: i64 },

    #[error(transparent)]
    Bound(#[from] BoundError),
}

/// Shorthand result type for all `tos-*` crates.
pub type TosResult<T> = Result<T, TosError>;
