//! Fixed-width byte encodings for keys and signatures.
//!
//! Layouts:
//! - public key: rho || t
//! - private key: rho || K || tr || s1 || s2
//! - signature: c || z || h
//!
//! Polynomials are N little-endian u32 words. The challenge c is written as tau
//! (position, sign) byte pairs with strictly increasing positions, sign 0 for
//! +1 and 1 for -1. Hints are omega position bytes, grouped by row and zero
//! padded, followed by k cumulative row counters.

use super::arithmetic::Hints;
use super::keys::{check_params, PrivateKey, PublicKey, Signature};
use super::polyvec::PolyVec;
use dsig_algorithms::Polynomial;
use dsig_api::{validate, Error, Result, Serialize, SerializeSecret};
use dsig_params::pqc::dilithium::{
    ParameterSet, SecurityLevel, DILITHIUM_N, DILITHIUM_Q, POLY_BYTES, SEED_BYTES,
};
use zeroize::Zeroizing;

/// Commitment encoding for the challenge hash: one byte per coefficient of w1
pub(crate) fn encode_w1(w1: &PolyVec) -> Vec<u8> {
    let mut out = Vec::with_capacity(w1.len() * DILITHIUM_N);
    for p in w1.polys() {
        out.extend(p.as_coeffs_slice().iter().map(|&c| c as u8));
    }
    out
}

fn read_seed(bytes: &[u8]) -> [u8; SEED_BYTES] {
    let mut seed = [0u8; SEED_BYTES];
    seed.copy_from_slice(&bytes[..SEED_BYTES]);
    seed
}

/// Writes the challenge as (position, sign) pairs
fn pack_challenge(c: &Polynomial, out: &mut Vec<u8>) {
    for i in 0..DILITHIUM_N {
        match c.centered(i) {
            1 => out.extend_from_slice(&[i as u8, 0]),
            -1 => out.extend_from_slice(&[i as u8, 1]),
            _ => {}
        }
    }
}

fn unpack_challenge(bytes: &[u8], tau: usize) -> Result<Polynomial> {
    validate::length("signature challenge", bytes.len(), 2 * tau)?;

    let mut coeffs = [0u32; DILITHIUM_N];
    let mut last: Option<u8> = None;
    for pair in bytes.chunks_exact(2) {
        let (pos, sign) = (pair[0], pair[1]);
        if last.map_or(false, |prev| pos <= prev) {
            return Err(Error::encoding(
                "signature challenge",
                "positions must be strictly increasing",
            ));
        }
        coeffs[pos as usize] = match sign {
            0 => 1,
            1 => DILITHIUM_Q - 1,
            other => {
                return Err(Error::encoding(
                    "signature challenge",
                    format!("sign byte {} is neither 0 nor 1", other),
                ))
            }
        };
        last = Some(pos);
    }
    Ok(Polynomial::from_array(coeffs))
}

fn pack_hints(h: &Hints, omega: usize, out: &mut Vec<u8>) {
    let mut positions = Vec::with_capacity(omega);
    let mut counters = Vec::with_capacity(h.len());
    for row in 0..h.len() {
        positions.extend(h.row_positions(row).map(|j| j as u8));
        counters.push(positions.len() as u8);
    }
    positions.resize(omega, 0);
    out.extend_from_slice(&positions);
    out.extend_from_slice(&counters);
}

fn unpack_hints(bytes: &[u8], k: usize, omega: usize) -> Result<Hints> {
    validate::length("signature hints", bytes.len(), omega + k)?;
    let (positions, counters) = bytes.split_at(omega);

    let mut hints = Hints::empty(k);
    let mut start = 0usize;
    for (row, &end) in counters.iter().enumerate() {
        let end = end as usize;
        if end < start || end > omega {
            return Err(Error::encoding("signature hints", "row counters out of order"));
        }
        for idx in start..end {
            if idx > start && positions[idx] <= positions[idx - 1] {
                return Err(Error::encoding(
                    "signature hints",
                    "positions within a row must be strictly increasing",
                ));
            }
            hints.rows[row][positions[idx] as usize] = true;
        }
        start = end;
    }
    if positions[start..].iter().any(|&b| b != 0) {
        return Err(Error::encoding("signature hints", "non-zero padding"));
    }
    Ok(hints)
}

fn check_short(v: &PolyVec, eta: u32) -> Result<()> {
    if !v.check_norm(eta as i64) {
        return Err(Error::encoding(
            "private key",
            format!("secret coefficient outside [-{0}, {0}]", eta),
        ));
    }
    Ok(())
}

impl PublicKey {
    /// Encodes rho || t
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.params.public_key_bytes());
        out.extend_from_slice(&self.rho);
        self.t.write_into(&mut out);
        out
    }

    /// Decodes a public key produced under `level`
    pub fn from_bytes(level: SecurityLevel, bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with_params(level.params(), bytes)
    }

    /// Decodes a public key produced under an explicit parameter set
    pub fn from_bytes_with_params(params: ParameterSet, bytes: &[u8]) -> Result<Self> {
        check_params(&params)?;
        validate::length("public key", bytes.len(), params.public_key_bytes())?;
        let rho = read_seed(bytes);
        let t = PolyVec::from_bytes(&bytes[SEED_BYTES..], params.k)?;
        Ok(PublicKey::new(params, rho, t, None))
    }
}

impl PrivateKey {
    /// Encodes rho || K || tr || s1 || s2 into a buffer wiped on drop
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(Vec::with_capacity(self.params.private_key_bytes()));
        out.extend_from_slice(&self.rho);
        out.extend_from_slice(&self.key);
        out.extend_from_slice(&self.tr);
        self.s1.write_into(&mut out);
        self.s2.write_into(&mut out);
        out
    }

    /// Decodes a private key produced under `level`
    pub fn from_bytes(level: SecurityLevel, bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with_params(level.params(), bytes)
    }

    /// Decodes a private key produced under an explicit parameter set.
    ///
    /// Rejects secret coefficients outside [-eta, eta].
    pub fn from_bytes_with_params(params: ParameterSet, bytes: &[u8]) -> Result<Self> {
        check_params(&params)?;
        validate::length("private key", bytes.len(), params.private_key_bytes())?;
        let rho = read_seed(bytes);
        let key = read_seed(&bytes[SEED_BYTES..]);
        let tr = read_seed(&bytes[2 * SEED_BYTES..]);

        let s1_start = 3 * SEED_BYTES;
        let s2_start = s1_start + params.l * POLY_BYTES;
        let s1 = PolyVec::from_bytes(&bytes[s1_start..s2_start], params.l)?;
        let s2 = PolyVec::from_bytes(&bytes[s2_start..], params.k)?;
        check_short(&s1, params.eta)?;
        check_short(&s2, params.eta)?;

        Ok(PrivateKey::new(params, rho, key, tr, s1, s2, None))
    }
}

impl Signature {
    /// Encodes c || z || h
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.params.signature_bytes());
        pack_challenge(&self.c, &mut out);
        self.z.write_into(&mut out);
        pack_hints(&self.h, self.params.omega, &mut out);
        out
    }

    /// Decodes a signature produced under `level`
    pub fn from_bytes(level: SecurityLevel, bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with_params(level.params(), bytes)
    }

    /// Decodes a signature produced under an explicit parameter set
    pub fn from_bytes_with_params(params: ParameterSet, bytes: &[u8]) -> Result<Self> {
        check_params(&params)?;
        validate::length("signature", bytes.len(), params.signature_bytes())?;
        let z_start = params.challenge_bytes();
        let h_start = z_start + params.l * POLY_BYTES;

        let c = unpack_challenge(&bytes[..z_start], params.tau)?;
        let z = PolyVec::from_bytes(&bytes[z_start..h_start], params.l)?;
        let h = unpack_hints(&bytes[h_start..], params.k, params.omega)?;
        Signature::from_parts(params, c, z, h)
    }
}

impl Serialize for PublicKey {
    type Context = SecurityLevel;

    fn to_bytes(&self) -> Vec<u8> {
        PublicKey::to_bytes(self)
    }

    fn from_bytes(level: SecurityLevel, bytes: &[u8]) -> Result<Self> {
        PublicKey::from_bytes(level, bytes)
    }
}

impl SerializeSecret for PrivateKey {
    type Context = SecurityLevel;

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        PrivateKey::to_bytes(self)
    }

    fn from_bytes(level: SecurityLevel, bytes: &[u8]) -> Result<Self> {
        PrivateKey::from_bytes(level, bytes)
    }
}

impl Serialize for Signature {
    type Context = SecurityLevel;

    fn to_bytes(&self) -> Vec<u8> {
        Signature::to_bytes(self)
    }

    fn from_bytes(level: SecurityLevel, bytes: &[u8]) -> Result<Self> {
        Signature::from_bytes(level, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsig_params::pqc::dilithium::DILITHIUM2;

    #[test]
    fn test_challenge_layout() {
        let mut coeffs = [0i64; 8];
        coeffs[2] = 1;
        coeffs[7] = -1;
        let c = Polynomial::from_signed(&coeffs).unwrap();
        let mut out = Vec::new();
        pack_challenge(&c, &mut out);
        assert_eq!(out, vec![2, 0, 7, 1]);
        assert_eq!(unpack_challenge(&out, 2).unwrap(), c);
    }

    #[test]
    fn test_challenge_rejects_malformed() {
        assert!(unpack_challenge(&[7, 0, 2, 0], 2).is_err());
        assert!(unpack_challenge(&[2, 0, 2, 1], 2).is_err());
        assert!(unpack_challenge(&[2, 0, 7, 2], 2).is_err());
        assert!(unpack_challenge(&[2, 0], 2).is_err());
    }

    #[test]
    fn test_hint_layout() {
        let h = Hints::from_positions(3, &[(0, 4), (0, 9), (2, 1)]);
        let mut out = Vec::new();
        pack_hints(&h, 5, &mut out);
        assert_eq!(out, vec![4, 9, 1, 0, 0, 2, 2, 3]);
        assert_eq!(unpack_hints(&out, 3, 5).unwrap(), h);
    }

    #[test]
    fn test_hints_reject_malformed() {
        // counters decreasing
        assert!(unpack_hints(&[4, 9, 1, 0, 0, 2, 1, 3], 3, 5).is_err());
        // counter beyond omega
        assert!(unpack_hints(&[4, 9, 1, 0, 0, 2, 2, 6], 3, 5).is_err());
        // unsorted row
        assert!(unpack_hints(&[9, 4, 1, 0, 0, 2, 2, 3], 3, 5).is_err());
        // dirty padding
        assert!(unpack_hints(&[4, 9, 1, 0, 7, 2, 2, 3], 3, 5).is_err());
    }

    #[test]
    fn test_w1_encoding_is_one_byte_per_coefficient() {
        let w1 = PolyVec::from_polys(vec![
            Polynomial::from_signed(&[43, 1]).unwrap(),
            Polynomial::from_signed(&[0, 0, 7]).unwrap(),
        ]);
        let bytes = encode_w1(&w1);
        assert_eq!(bytes.len(), 2 * DILITHIUM_N);
        assert_eq!(&bytes[..2], &[43, 1]);
        assert_eq!(bytes[DILITHIUM_N + 2], 7);
    }

    #[test]
    fn test_wrong_lengths() {
        let params = DILITHIUM2;
        assert!(matches!(
            PublicKey::from_bytes(SecurityLevel::Level2, &[0u8; 10]),
            Err(Error::InvalidLength { .. })
        ));
        assert!(matches!(
            Signature::from_bytes(SecurityLevel::Level2, &vec![0u8; params.signature_bytes() + 1]),
            Err(Error::InvalidLength { .. })
        ));
        assert!(PrivateKey::from_bytes(SecurityLevel::Level2, &[]).is_err());
    }
}
