//! Digital Signature Schemes
//!
//! This crate implements the CRYSTALS-Dilithium lattice signature scheme on top
//! of the ring and sampling primitives in `dsig-algorithms`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dilithium;

pub use dilithium::{
    generate, generate_with_rng, keypair_from_seed, keypair_with_rng, sign, sign_hedged, verify,
    Dilithium, Dilithium2, Dilithium3, Dilithium5, KeyPair, PrivateKey, PublicKey, Signature,
    Signer,
};
