//! Configuration error type shared by the `sc-*` crates.
//!
//! Sub-crates define their own error enums and wrap `ScError` as one variant
//! via `#[from]`, so a bad configuration surfaces unchanged at the builder.

use thiserror::Error;

use crate::StoreId;

/// Fatal construction-time errors.  None of these can occur once a run has
/// started.
#[derive(Debug, Error)]
pub enum ScError {
    #[error("unknown {kind} tier {name:?}")]
    UnknownTier { kind: &'static str, name: String },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("store {0} not found")]
    StoreNotFound(StoreId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sc-core`.
pub type ScResult<T> = Result<T, ScError>;
