//! Polynomial vectors and the public matrix A.

use dsig_algorithms::poly::sampling::sample_uniform;
use dsig_algorithms::xof::{DomainTag, Expander};
use dsig_algorithms::Polynomial;
use dsig_api::{validate, Result};
use dsig_params::pqc::dilithium::{POLY_BYTES, SEED_BYTES};
use zeroize::Zeroize;

/// An ordered vector of polynomials (length k or l depending on role)
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct PolyVec {
    pub(crate) polys: Vec<Polynomial>,
}

impl PolyVec {
    /// A vector of `len` zero polynomials
    pub fn zero(len: usize) -> Self {
        Self {
            polys: vec![Polynomial::zero(); len],
        }
    }

    /// Wraps existing polynomials
    pub fn from_polys(polys: Vec<Polynomial>) -> Self {
        Self { polys }
    }

    /// Number of polynomials
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// True for the empty vector
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// The polynomials in index order
    pub fn polys(&self) -> &[Polynomial] {
        &self.polys
    }

    /// Element-wise sum. Both vectors must have the same length.
    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len(), other.len());
        Self {
            polys: self
                .polys
                .iter()
                .zip(other.polys.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    /// Element-wise difference. Both vectors must have the same length.
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len(), other.len());
        Self {
            polys: self
                .polys
                .iter()
                .zip(other.polys.iter())
                .map(|(a, b)| a - b)
                .collect(),
        }
    }

    /// Multiplies every entry by the ring element `c`
    pub fn scale(&self, c: &Polynomial) -> Self {
        Self {
            // c on the left: the challenge is sparse and mul skips its zero terms
            polys: self.polys.iter().map(|p| c * p).collect(),
        }
    }

    /// True when every centered coefficient lies in [-bound, bound]
    pub fn check_norm(&self, bound: i64) -> bool {
        self.polys.iter().all(|p| p.check_norm(bound))
    }

    /// Largest absolute centered coefficient over the whole vector
    pub fn infinity_norm(&self) -> u32 {
        self.polys.iter().map(|p| p.infinity_norm()).max().unwrap_or(0)
    }

    /// Entry-wise high bits for step 2 * gamma2
    pub fn high_bits(&self, gamma2: u32) -> Self {
        Self {
            polys: self.polys.iter().map(|p| p.high_bits(gamma2)).collect(),
        }
    }

    /// Appends the concatenated polynomial encodings to `out`
    pub fn write_into(&self, out: &mut Vec<u8>) {
        for p in &self.polys {
            p.write_into(out);
        }
    }

    /// Decodes `len` consecutive polynomials
    pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Self> {
        validate::length("polynomial vector", bytes.len(), len * POLY_BYTES)?;
        let polys = bytes
            .chunks_exact(POLY_BYTES)
            .map(Polynomial::from_bytes)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { polys })
    }
}

/// The k x l public matrix A, stored row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    entries: Vec<Polynomial>,
}

impl Matrix {
    /// Expands `rho` into a `rows` x `cols` matrix of uniform polynomials.
    ///
    /// Entry (i, j) is sampled from the Matrix stream over `rho || i || j`.
    /// Dimensions must fit in one byte each.
    pub fn expand(rho: &[u8; SEED_BYTES], rows: usize, cols: usize) -> Self {
        let mut entries = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let mut stream = Expander::new(DomainTag::Matrix)
                    .absorb(rho)
                    .absorb(&[i as u8, j as u8])
                    .finalize();
                entries.push(sample_uniform(&mut stream));
            }
        }
        Self {
            rows,
            cols,
            entries,
        }
    }

    /// Number of rows (k)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (l)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at row `i`, column `j`
    pub fn entry(&self, i: usize, j: usize) -> &Polynomial {
        &self.entries[i * self.cols + j]
    }

    /// Matrix-vector product A * v, with `v` of length `cols`
    pub fn mul_vec(&self, v: &PolyVec) -> PolyVec {
        debug_assert_eq!(v.len(), self.cols);
        let mut out = PolyVec::zero(self.rows);
        for (i, acc) in out.polys.iter_mut().enumerate() {
            for (j, vj) in v.polys.iter().enumerate() {
                *acc = &*acc + &(self.entry(i, j) * vj);
            }
        }
        out
    }
}
