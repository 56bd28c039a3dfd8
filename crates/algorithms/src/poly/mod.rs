// Path: crates/algorithms/src/poly/mod.rs
//! Polynomial engine
//!
//! Arithmetic over R_q = Z_q[X]/(X^N + 1) with N = 256 and q = 8380417, plus the
//! coefficient-level helpers the signature scheme builds on.

pub mod decompose;
pub mod polynomial;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and functions.
pub mod prelude {
    pub use super::decompose::{decompose, high_bits, low_bits, use_hint};
    pub use super::polynomial::Polynomial;
    pub use super::sampling::{
        sample_centered, sample_sparse_ternary, sample_uniform, ByteSource,
    };
}
