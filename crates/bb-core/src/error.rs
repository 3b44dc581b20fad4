//! # PanelError
//!
//! Centralized error handling for the Bloomboard core.
//! Nothing here is fatal: every failure degrades to a documented default.

use thiserror::Error;

/// The primary error type for all bb-core operations.
#[derive(Error, Debug)]
pub enum PanelError {
    /// Stored bytes did not parse as the expected JSON shape. Recovered
    /// locally by substituting the caller's default; never user-visible.
    #[error("malformed persisted record under key {key:?}")]
    MalformedRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A reaction name outside the fixed vocabulary. A programming-contract
    /// violation on the host side, surfaced as a rejected operation.
    #[error("invalid reaction kind {0:?}")]
    InvalidReactionKind(String),
}

/// A specialized Result type for Bloomboard logic.
pub type Result<T> = std::result::Result<T, PanelError>;
