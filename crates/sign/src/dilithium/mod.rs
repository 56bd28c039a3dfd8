//! CRYSTALS-Dilithium key generation, signing and verification
//!
//! Keys and signatures are built on the ring, expander and samplers of
//! `dsig-algorithms`. The parameter sets come from `dsig-params`.
//!
//! Submodules:
//! - `polyvec.rs`: `PolyVec` and the public `Matrix` expanded from rho.
//! - `arithmetic.rs`: hint bits and their use on polynomial vectors.
//! - `sampling.rs`: seeded secret vectors, masking vectors, the message
//!   representative and the challenge.
//! - `keys.rs`: `PublicKey`, `PrivateKey`, `KeyPair` and `Signature`, each key
//!   owning its own matrix cache.
//! - `encoding.rs`: fixed-width byte encodings of keys and signatures.
//! - `sign.rs`: the core `keypair_internal`, `sign_internal` and
//!   `verify_internal` logic.
//! - `signer.rs`: stateless functions and the stateful `Signer`.
//!
//! Signing is deterministic by default. [`sign_hedged`] mixes caller
//! randomness into the masking seed instead.

use core::marker::PhantomData;
use dsig_api::{Error, Result as ApiResult, Signature as SignatureTrait};
use rand::{CryptoRng, RngCore};

mod arithmetic;
mod encoding;
mod keys;
mod polyvec;
mod sampling;
mod sign;
mod signer;

pub use arithmetic::Hints;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use polyvec::{Matrix, PolyVec};
pub use signer::{
    generate, generate_with_rng, keypair_from_seed, keypair_with_rng, sign, sign_hedged, verify,
    Signer,
};

use dsig_params::pqc::dilithium::{
    Dilithium2Params, Dilithium3Params, Dilithium5Params, DilithiumSchemeParams,
    DEFAULT_MAX_SIGN_ATTEMPTS,
};

/// Generic Dilithium signature structure parameterized by `P: DilithiumSchemeParams`.
///
/// One core implementation serves every level; `P` only selects the parameter set.
pub struct Dilithium<P: DilithiumSchemeParams> {
    _params: PhantomData<P>,
}

impl<P: DilithiumSchemeParams> SignatureTrait for Dilithium<P> {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = Signature;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        keypair_with_rng(&P::PARAMS, rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.private.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        if secret_key.params != P::PARAMS {
            return Err(Error::param(
                "sign",
                format!("{} key used with {}", secret_key.params.name, P::NAME),
            ));
        }
        sign(message, secret_key, DEFAULT_MAX_SIGN_ATTEMPTS)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool {
        public_key.params == P::PARAMS && verify(message, signature, public_key)
    }
}

/// Dilithium at NIST security level 2
pub type Dilithium2 = Dilithium<Dilithium2Params>;
/// Dilithium at NIST security level 3
pub type Dilithium3 = Dilithium<Dilithium3Params>;
/// Dilithium at NIST security level 5
pub type Dilithium5 = Dilithium<Dilithium5Params>;
