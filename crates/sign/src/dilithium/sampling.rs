//! Seeded sampling of secret vectors, masking vectors and challenges.

use super::polyvec::PolyVec;
use dsig_algorithms::poly::sampling::{sample_centered, sample_sparse_ternary};
use dsig_algorithms::xof::{expand, DomainTag, Expander};
use dsig_algorithms::Polynomial;
use dsig_api::Result;
use dsig_params::pqc::dilithium::{CRH_BYTES, SEED_BYTES};

/// Samples `len` polynomials bounded by eta from sigma.
///
/// Polynomial i is drawn from the Small stream over `sigma || (offset + i)`,
/// the index as a little-endian u16. s1 uses offset 0 and s2 offset l, so the
/// two vectors never share a stream.
pub(crate) fn sample_secret_vec(
    sigma: &[u8; SEED_BYTES],
    offset: usize,
    len: usize,
    eta: u32,
) -> Result<PolyVec> {
    let polys = (0..len)
        .map(|i| {
            let nonce = ((offset + i) as u16).to_le_bytes();
            let mut stream = Expander::new(DomainTag::Small)
                .absorb(sigma)
                .absorb(&nonce)
                .finalize();
            sample_centered(&mut stream, eta)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PolyVec::from_polys(polys))
}

/// Samples the masking vector y for attempt `kappa`.
///
/// Polynomial i is drawn from the Mask stream over
/// `rho' || kappa (u32 LE) || i (u16 LE)` with coefficients in [-gamma1, gamma1].
pub(crate) fn sample_mask_vec(
    rho_prime: &[u8],
    kappa: u32,
    len: usize,
    gamma1: u32,
) -> Result<PolyVec> {
    let polys = (0..len)
        .map(|i| {
            let mut stream = Expander::new(DomainTag::Mask)
                .absorb(rho_prime)
                .absorb(&kappa.to_le_bytes())
                .absorb(&(i as u16).to_le_bytes())
                .finalize();
            sample_centered(&mut stream, gamma1)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PolyVec::from_polys(polys))
}

/// Message representative mu = Expand(tr || message) under Message
pub(crate) fn message_representative(tr: &[u8; SEED_BYTES], message: &[u8]) -> [u8; CRH_BYTES] {
    let mut stream = Expander::new(DomainTag::Message)
        .absorb(tr)
        .absorb(message)
        .finalize();
    let mut mu = [0u8; CRH_BYTES];
    stream.fill(&mut mu);
    mu
}

/// Digest tr of an encoded public key
pub(crate) fn public_key_digest(pk_bytes: &[u8]) -> [u8; SEED_BYTES] {
    let mut tr = [0u8; SEED_BYTES];
    tr.copy_from_slice(&expand(pk_bytes, DomainTag::PublicKeyDigest, SEED_BYTES));
    tr
}

/// Derives the challenge polynomial from mu and the encoded commitment w1
pub(crate) fn derive_challenge(mu: &[u8], w1_bytes: &[u8], tau: usize) -> Result<Polynomial> {
    let mut stream = Expander::new(DomainTag::Challenge)
        .absorb(mu)
        .absorb(w1_bytes)
        .finalize();
    sample_sparse_ternary(&mut stream, tau)
}
