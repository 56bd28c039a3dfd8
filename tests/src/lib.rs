//! Testing utilities for the dsig library
//!
//! A fixed corpus of seeds and messages plus helpers that build tampered
//! signatures through the public API, shared by the property suites in
//! `tests/tests` and the facade's integration tests.

pub mod corpus;
pub mod tamper;

pub use corpus::{corpus_keypair, corpus_messages, corpus_rng, CORPUS_SEEDS};
