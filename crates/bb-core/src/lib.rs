//! bloomboard/crates/bb-core/src/lib.rs
//!
//! The central domain models and interface definitions for the Bloomboard
//! interaction engine.

pub mod error;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
