//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `WeaveError` as one
//! variant via `#[from]`, so key-parsing failures surface unchanged no matter
//! which layer hit them.

use thiserror::Error;

/// The top-level error type for `wv-core` and a common base for sub-crates.
///
/// Malformed declarations fail fast at wiring time rather than producing
/// handlers that can never fire.
#[derive(Debug, Error)]
pub enum WeaveError {
    #[error("malformed event key {key:?}: {reason}")]
    MalformedEventKey { key: String, reason: &'static str },

    #[error("unknown @ui reference {name:?} in {context:?}")]
    UnknownUiName { name: String, context: String },
}

/// Shorthand result type for all `wv-*` crates.
pub type WeaveResult<T> = Result<T, WeaveError>;
