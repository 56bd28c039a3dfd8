//! Hint arithmetic over polynomial vectors.
//!
//! The signer knows w and publishes hints for w - c*s2; the verifier can only
//! compute w' = A*z - c*t, which equals w - c*s2. A set hint bit tells the
//! verifier that the high bits of w' sit one bucket away from those of w.

use super::polyvec::PolyVec;
use dsig_algorithms::poly::decompose::{make_hint, use_hint};
use dsig_algorithms::Polynomial;
use dsig_params::pqc::dilithium::DILITHIUM_N;

/// Per-coefficient hint bits, one row per polynomial of w
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hints {
    pub(crate) rows: Vec<[bool; DILITHIUM_N]>,
}

impl Hints {
    /// `rows` rows with no hint set
    pub fn empty(rows: usize) -> Self {
        Self {
            rows: vec![[false; DILITHIUM_N]; rows],
        }
    }

    /// Builds hints from (row, coefficient) positions
    pub fn from_positions(rows: usize, positions: &[(usize, usize)]) -> Self {
        let mut hints = Self::empty(rows);
        for &(row, col) in positions {
            if row < rows && col < DILITHIUM_N {
                hints.rows[row][col] = true;
            }
        }
        hints
    }

    /// Number of rows (k)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Hint bit at `row`, coefficient `col`
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    /// Total number of set hint bits
    pub fn count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&b| b).count())
            .sum()
    }

    /// Set positions of one row, ascending
    pub fn row_positions(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[row]
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| i)
    }
}

/// Hints for recovering HighBits(w) from w - c*s2.
///
/// Returns the hints and their count. `cs2` is c*s2; each of its centered
/// coefficients must be bounded by gamma2.
pub(crate) fn make_hints(w: &PolyVec, cs2: &PolyVec, gamma2: u32) -> (Hints, usize) {
    let mut hints = Hints::empty(w.len());
    let mut count = 0;
    for (row, (wi, ci)) in w.polys.iter().zip(cs2.polys.iter()).enumerate() {
        let r = wi - ci;
        for j in 0..DILITHIUM_N {
            if make_hint(r.coefficient(j), ci.centered(j) as i64, gamma2) {
                hints.rows[row][j] = true;
                count += 1;
            }
        }
    }
    (hints, count)
}

/// Applies hints to w' and returns the corrected high bits
pub(crate) fn use_hints(hints: &Hints, w_prime: &PolyVec, gamma2: u32) -> PolyVec {
    let mut out = PolyVec::zero(w_prime.len());
    for (row, (dst, src)) in out.polys.iter_mut().zip(w_prime.polys.iter()).enumerate() {
        let mut coeffs = [0u32; DILITHIUM_N];
        for (j, c) in coeffs.iter_mut().enumerate() {
            *c = use_hint(hints.rows[row][j], src.coefficient(j), gamma2);
        }
        *dst = Polynomial::from_array(coeffs);
    }
    out
}
