//! Core key generation, signing and verification.
//!
//! Signing is Fiat-Shamir with aborts: each attempt draws a fresh masking
//! vector y, commits to HighBits(A*y), derives the challenge from that
//! commitment and the message, and keeps the response z = y + c*s1 only when
//! it is short enough not to leak s1. Verification recomputes the commitment
//! from public data and the hints.
//!
//! Invariants:
//! - `||z||∞ <= gamma1 - beta` for every emitted signature
//! - at most omega hint bits per signature
//! - the challenge always has exactly tau entries in {-1, +1}
//!
//! Internal module - use the public functions in the parent module instead.

use super::arithmetic::{make_hints, use_hints};
use super::encoding::encode_w1;
use super::keys::{check_params, is_sparse_ternary, KeyPair, PrivateKey, PublicKey, Signature};
use super::polyvec::Matrix;
use super::sampling::{
    derive_challenge, message_representative, sample_mask_vec, sample_secret_vec,
};
use dsig_algorithms::xof::{expand, DomainTag, Expander};
use dsig_api::{validate, Error, Result};
use dsig_params::pqc::dilithium::{ParameterSet, CRH_BYTES, SEED_BYTES};
use log::{debug, trace, warn};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Key generation from a 32-byte seed zeta.
///
/// zeta expands into rho || sigma || K. A comes from rho, s1 and s2 from sigma,
/// and t = A*s1 + s2.
pub(crate) fn keypair_internal(params: &ParameterSet, zeta: &[u8; SEED_BYTES]) -> Result<KeyPair> {
    check_params(params)?;

    // Step 1: (rho, sigma, K) = Expand(zeta)
    let seeds = Zeroizing::new(expand(zeta, DomainTag::KeySeed, 3 * SEED_BYTES));
    let mut rho = [0u8; SEED_BYTES];
    let mut sigma = Zeroizing::new([0u8; SEED_BYTES]);
    let mut key = [0u8; SEED_BYTES];
    rho.copy_from_slice(&seeds[..SEED_BYTES]);
    sigma.copy_from_slice(&seeds[SEED_BYTES..2 * SEED_BYTES]);
    key.copy_from_slice(&seeds[2 * SEED_BYTES..]);

    // Step 2: A = ExpandA(rho)
    let matrix = Matrix::expand(&rho, params.k, params.l);

    // Step 3: s1, s2 with coefficients in [-eta, eta]
    let s1 = sample_secret_vec(&sigma, 0, params.l, params.eta)?;
    let s2 = sample_secret_vec(&sigma, params.l, params.k, params.eta)?;

    // Step 4: t = A*s1 + s2
    let t = matrix.mul_vec(&s1).add(&s2);

    let public = PublicKey::new(*params, rho, t, Some(matrix.clone()));

    // Step 5: tr = H(pk)
    let tr = public.digest();

    let private = PrivateKey::new(*params, rho, key, tr, s1, s2, Some(matrix));

    debug!("{}: generated key pair", params.name);
    Ok(KeyPair { public, private })
}

/// Signing with the rejection loop bounded by `max_attempts`.
///
/// `rnd` is mixed into the masking seed: all zeros gives deterministic
/// signatures, fresh randomness gives hedged ones.
pub(crate) fn sign_internal(
    sk: &PrivateKey,
    message: &[u8],
    rnd: &[u8; SEED_BYTES],
    max_attempts: u32,
) -> Result<Signature> {
    validate::parameter(max_attempts > 0, "sign", "max_attempts must be positive")?;
    let params = &sk.params;

    // Step 1: mu = H(tr || M)
    let mu = message_representative(&sk.tr, message);

    // Step 2: rho' = H(K || rnd || mu)
    let mut rho_prime = Zeroizing::new([0u8; CRH_BYTES]);
    Expander::new(DomainTag::MaskSeed)
        .absorb(&sk.key)
        .absorb(rnd)
        .absorb(&mu)
        .finalize()
        .fill(&mut rho_prime[..]);

    let matrix = sk.matrix();
    let z_bound = params.z_bound();

    for kappa in 0..max_attempts {
        // Step 3: y = ExpandMask(rho', kappa)
        let y = Zeroizing::new(sample_mask_vec(&rho_prime[..], kappa, params.l, params.gamma1)?);

        // Step 4: w = A*y, w1 = HighBits(w)
        let w = matrix.mul_vec(&y);
        let w1 = w.high_bits(params.gamma2);

        // Step 5: c = SampleInBall(H(mu || w1))
        let c = derive_challenge(&mu, &encode_w1(&w1), params.tau)?;

        // Step 6: z = y + c*s1
        let z = y.add(&sk.s1.scale(&c));
        if !z.check_norm(z_bound) {
            trace!("{}: attempt {} rejected, z exceeds bound", params.name, kappa);
            continue;
        }

        // Step 7: hints for HighBits(w - c*s2)
        let cs2 = sk.s2.scale(&c);
        let (h, hint_count) = make_hints(&w, &cs2, params.gamma2);
        if hint_count > params.omega {
            trace!(
                "{}: attempt {} rejected, {} hints exceed {}",
                params.name,
                kappa,
                hint_count,
                params.omega
            );
            continue;
        }

        debug!("{}: signed after {} attempt(s)", params.name, kappa + 1);
        return Ok(Signature {
            params: *params,
            c,
            z,
            h,
        });
    }

    warn!(
        "{}: signing gave up after {} attempts",
        params.name, max_attempts
    );
    Err(Error::RetryExhausted {
        algorithm: params.name,
        attempts: max_attempts,
    })
}

/// Verification. Never errors: every failure is `false`.
pub(crate) fn verify_internal(pk: &PublicKey, message: &[u8], sig: &Signature) -> bool {
    let params = &pk.params;

    // Step 1: shape checks
    if let Err(reason) = params.check() {
        debug!("{}: malformed parameter set: {}", params.name, reason);
        return false;
    }
    if sig.params != *params {
        debug!(
            "{}: signature was made under {}",
            params.name, sig.params.name
        );
        return false;
    }
    if sig.z.len() != params.l || sig.h.len() != params.k || pk.t.len() != params.k {
        debug!("{}: dimension mismatch", params.name);
        return false;
    }
    if !is_sparse_ternary(&sig.c, params.tau) {
        debug!("{}: challenge is not {}-sparse ternary", params.name, params.tau);
        return false;
    }
    if sig.h.count() > params.omega {
        debug!("{}: too many hints", params.name);
        return false;
    }

    // Step 2: ||z|| <= gamma1 - beta
    if !sig.z.check_norm(params.z_bound()) {
        debug!("{}: z exceeds bound", params.name);
        return false;
    }

    // Step 3: mu = H(H(pk) || M)
    let mu = message_representative(&pk.digest(), message);

    // Step 4: w' = A*z - c*t
    let w_prime = pk.matrix().mul_vec(&sig.z).sub(&pk.t.scale(&sig.c));

    // Step 5: w1' = UseHint(h, w')
    let w1 = use_hints(&sig.h, &w_prime, params.gamma2);

    // Step 6: c' = SampleInBall(H(mu || w1'))
    let c_prime = match derive_challenge(&mu, &encode_w1(&w1), params.tau) {
        Ok(c) => c,
        Err(e) => {
            debug!("{}: challenge derivation failed: {}", params.name, e);
            return false;
        }
    };

    // Step 7: c == c'
    let matches: bool = sig
        .c
        .to_bytes()
        .ct_eq(&c_prime.to_bytes())
        .into();
    if !matches {
        debug!("{}: challenge mismatch", params.name);
    }
    matches
}
