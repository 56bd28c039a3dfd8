//! Public API traits and types for the dsig library
//!
//! This crate provides the public API surface shared by every dsig crate: the
//! error taxonomy, the `Result` alias, and the trait definitions implemented by
//! the signature schemes.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::{Serialize, SerializeSecret, Signature};
