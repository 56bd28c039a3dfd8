//! Trait definitions for dsig

pub mod serialize;
pub mod signature;

pub use serialize::{Serialize, SerializeSecret};
pub use signature::Signature;
