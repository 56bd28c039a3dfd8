//! High/low bits decomposition of ring elements.
//!
//! Every r in [0, q) is written as r = r1 * alpha + r0 (mod q) with
//! alpha = 2 * gamma2 and r0 in (-gamma2, gamma2]. The values r with
//! r - r0 = q - 1 would produce the out-of-range bucket (q - 1) / alpha; those
//! are folded into bucket 0 with r0 decreased by one, so r1 always lies in
//! [0, m) where m = (q - 1) / alpha.

use super::polynomial::{reduce_i64, Polynomial};
use dsig_params::pqc::dilithium::{DILITHIUM_N, DILITHIUM_Q};

/// Split `r` into `(high, low)` for step `2 * gamma2`.
///
/// `gamma2` must satisfy `(q - 1) % (2 * gamma2) == 0`.
#[inline]
pub fn decompose(r: u32, gamma2: u32) -> (u32, i32) {
    let alpha = 2 * gamma2 as i64;
    let r = (r % DILITHIUM_Q) as i64;

    let mut r0 = r % alpha;
    if r0 > gamma2 as i64 {
        r0 -= alpha;
    }

    if r - r0 == DILITHIUM_Q as i64 - 1 {
        return (0, (r0 - 1) as i32);
    }
    (((r - r0) / alpha) as u32, r0 as i32)
}

/// High part of [`decompose`]
#[inline]
pub fn high_bits(r: u32, gamma2: u32) -> u32 {
    decompose(r, gamma2).0
}

/// Low part of [`decompose`], in (-gamma2 - 1, gamma2]
#[inline]
pub fn low_bits(r: u32, gamma2: u32) -> i32 {
    decompose(r, gamma2).1
}

/// Whether adding `z` to `r` moves its high bits.
#[inline]
pub fn make_hint(r: u32, z: i64, gamma2: u32) -> bool {
    let moved = reduce_i64(r as i64 + z);
    high_bits(r, gamma2) != high_bits(moved, gamma2)
}

/// Recover the high bits of `r + z` from `r` and the hint bit for `z`.
///
/// Valid whenever |z| <= gamma2: the bucket can only move by one step, in the
/// direction given by the sign of the low part of `r`.
#[inline]
pub fn use_hint(hint: bool, r: u32, gamma2: u32) -> u32 {
    let m = (DILITHIUM_Q - 1) / (2 * gamma2);
    let (r1, r0) = decompose(r, gamma2);
    if !hint {
        return r1;
    }
    if r0 > 0 {
        (r1 + 1) % m
    } else {
        (r1 + m - 1) % m
    }
}

impl Polynomial {
    /// Coefficient-wise decomposition into (high, low) polynomials.
    ///
    /// The low polynomial stores each centered low part in canonical form.
    pub fn decompose(&self, gamma2: u32) -> (Polynomial, Polynomial) {
        let mut high = Polynomial::zero();
        let mut low = Polynomial::zero();
        for i in 0..DILITHIUM_N {
            let (r1, r0) = decompose(self.coeffs[i], gamma2);
            high.coeffs[i] = r1;
            low.coeffs[i] = reduce_i64(r0 as i64);
        }
        (high, low)
    }

    /// Coefficient-wise high bits
    pub fn high_bits(&self, gamma2: u32) -> Polynomial {
        let mut high = Polynomial::zero();
        for (dst, &c) in high.coeffs.iter_mut().zip(self.coeffs.iter()) {
            *dst = high_bits(c, gamma2);
        }
        high
    }
}
