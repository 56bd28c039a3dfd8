//! sampling.rs - Coefficient samplers driven by an expander stream
//!
//! None of these samplers touch system randomness. They consume bytes from a
//! [`ByteSource`], normally an [`ExpanderStream`](crate::xof::ExpanderStream),
//! so the same seed always yields the same polynomial.

use super::polynomial::{reduce_i64, Polynomial};
use dsig_api::{validate, Result};
use dsig_params::pqc::dilithium::{DILITHIUM_N, DILITHIUM_Q};

const N: usize = DILITHIUM_N;
const Q: u32 = DILITHIUM_Q;

/// Number of sign bits drawn up front by [`sample_sparse_ternary`]
pub const MAX_SPARSE_WEIGHT: usize = 64;

/// A deterministic stream of bytes
pub trait ByteSource {
    /// Fills `out` with the next bytes of the stream
    fn fill(&mut self, out: &mut [u8]);

    /// Next byte
    fn next_byte(&mut self) -> u8 {
        let mut b = [0u8; 1];
        self.fill(&mut b);
        b[0]
    }

    /// Next 4 bytes as a little-endian word
    fn next_word(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.fill(&mut b);
        u32::from_le_bytes(b)
    }
}

/// Samples a polynomial with coefficients uniform mod q.
///
/// Each coefficient is a little-endian 4-byte word reduced mod q.
pub fn sample_uniform<S: ByteSource + ?Sized>(src: &mut S) -> Polynomial {
    let mut poly = Polynomial::zero();
    let mut buf = [0u8; 4 * N];
    src.fill(&mut buf);
    for (dst, chunk) in poly.coeffs.iter_mut().zip(buf.chunks_exact(4)) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        *dst = word % Q;
    }
    poly
}

/// Samples a polynomial with every centered coefficient in [-bound, bound].
///
/// A coefficient is `word mod (2 * bound + 1) - bound`, where `word` is one
/// byte when the range fits in a byte and a little-endian 4-byte word otherwise.
pub fn sample_centered<S: ByteSource + ?Sized>(src: &mut S, bound: u32) -> Result<Polynomial> {
    validate::parameter(
        bound <= (Q - 1) / 2,
        "centered sampler",
        "bound must not exceed (q - 1) / 2",
    )?;

    let modulus = 2 * bound + 1;
    let mut poly = Polynomial::zero();

    if modulus <= 256 {
        let mut buf = [0u8; N];
        src.fill(&mut buf);
        for (dst, &b) in poly.coeffs.iter_mut().zip(buf.iter()) {
            let v = (b as u32 % modulus) as i64 - bound as i64;
            *dst = reduce_i64(v);
        }
    } else {
        for dst in poly.coeffs.iter_mut() {
            let v = (src.next_word() % modulus) as i64 - bound as i64;
            *dst = reduce_i64(v);
        }
    }

    Ok(poly)
}

/// Samples a polynomial with exactly `weight` coefficients in {-1, +1} and the
/// rest zero, using an inside-out Fisher-Yates shuffle.
///
/// The first 8 bytes of the stream are the sign bits. Then for each
/// i in N - weight..N a position j <= i is drawn by rejection from single bytes,
/// c[i] takes the old c[j] and c[j] takes the next sign.
pub fn sample_sparse_ternary<S: ByteSource + ?Sized>(
    src: &mut S,
    weight: usize,
) -> Result<Polynomial> {
    validate::parameter(
        weight >= 1 && weight <= MAX_SPARSE_WEIGHT && weight <= N,
        "sparse ternary sampler",
        "weight must lie in [1, 64]",
    )?;

    let mut sign_bytes = [0u8; 8];
    src.fill(&mut sign_bytes);
    let mut signs = u64::from_le_bytes(sign_bytes);

    let mut poly = Polynomial::zero();
    for i in (N - weight)..N {
        let j = loop {
            let j = src.next_byte() as usize;
            if j <= i {
                break j;
            }
        };
        poly.coeffs[i] = poly.coeffs[j];
        poly.coeffs[j] = if signs & 1 == 1 { Q - 1 } else { 1 };
        signs >>= 1;
    }

    Ok(poly)
}
