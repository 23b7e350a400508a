//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface it.

use thiserror::Error;

/// Errors produced by `tc-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("{what} {value} is out of range")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
