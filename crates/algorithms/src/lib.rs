//! Lattice primitives for the dsig library
//!
//! This crate provides the building blocks the signature scheme composes:
//!
//! - [`poly`]: arithmetic in the negacyclic ring Z_q[X]/(X^256 + 1), high/low
//!   bits decomposition, fixed-width coefficient serialization and the samplers
//!   that turn expander output into coefficients.
//! - [`xof`]: the domain-separated seed expander, the only source of
//!   pseudorandomness once a seed has been drawn.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod poly;
pub mod xof;

pub use poly::polynomial::Polynomial;
pub use xof::{expand, DomainTag, Expander, ExpanderStream};
