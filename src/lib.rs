//! # dsig
//!
//! A pure Rust implementation of the CRYSTALS-Dilithium lattice signature core.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dsig = "0.3"
//! ```
//!
//! ```
//! use dsig::prelude::*;
//!
//! let keypair = dsig::sign::generate(2)?;
//! let sig = dsig::sign::sign(b"hello", keypair.private_key(), DEFAULT_MAX_SIGN_ATTEMPTS)?;
//! assert!(dsig::sign::verify(b"hello", &sig, keypair.public_key()));
//! # Ok::<(), dsig::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `sign` (default): key generation, signing and verification
//! - `algorithms`: ring arithmetic, the seed expander and the samplers on their own
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dsig-api`]: error taxonomy and the `Signature`/`Serialize` traits
//! - [`dsig-params`]: constants and the per-level parameter table
//! - [`dsig-algorithms`]: polynomial ring, expander and samplers
//! - [`dsig-sign`]: Dilithium key generation, signing and verification

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use dsig_api as api;
pub use dsig_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use dsig_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use dsig_sign as sign;

/// Common imports for dsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Serialize, SerializeSecret, Signature};

    // Parameters
    pub use crate::params::pqc::dilithium::{
        ParameterSet, SecurityLevel, DEFAULT_MAX_SIGN_ATTEMPTS,
    };

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{DomainTag, Polynomial};

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        Dilithium2, Dilithium3, Dilithium5, KeyPair, PrivateKey, PublicKey, Signer,
    };

    // Rng traits for key generation
    pub use rand::{CryptoRng, RngCore};

    // Wiping buffer returned by private key encodings
    pub use zeroize::Zeroizing;
}
