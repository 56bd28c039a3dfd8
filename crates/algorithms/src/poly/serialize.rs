//! serialize.rs - Fixed-width coefficient encoding
//!
//! A polynomial is N little-endian u32 words, each holding the canonical
//! coefficient in [0, q). Vectors are the concatenation of their polynomials.

use super::polynomial::Polynomial;
use dsig_api::{validate, Error, Result};
use dsig_params::pqc::dilithium::{COEFF_BYTES, DILITHIUM_Q, POLY_BYTES};

impl Polynomial {
    /// Encodes the polynomial as N little-endian u32 words
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(POLY_BYTES);
        self.write_into(&mut out);
        out
    }

    /// Appends the encoding to `out`
    pub fn write_into(&self, out: &mut Vec<u8>) {
        for &c in self.coeffs.iter() {
            out.extend_from_slice(&c.to_le_bytes());
        }
    }

    /// Decodes exactly [`POLY_BYTES`] bytes, rejecting any word >= q
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("polynomial", bytes.len(), POLY_BYTES)?;

        let mut poly = Polynomial::zero();
        for (i, (dst, chunk)) in poly
            .coeffs
            .iter_mut()
            .zip(bytes.chunks_exact(COEFF_BYTES))
            .enumerate()
        {
            let c = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            if c >= DILITHIUM_Q {
                return Err(Error::encoding(
                    "polynomial",
                    format!("coefficient {} is {}, not below q", i, c),
                ));
            }
            *dst = c;
        }
        Ok(poly)
    }
}
