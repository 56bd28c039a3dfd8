//! Key and signature types.
//!
//! Both key types own a lazily computed copy of the matrix A. The cache is
//! filled once per key value on first use and then shared read-only, so one key
//! can be used from several threads and two keys never see each other's matrix.

use core::fmt;
use std::sync::OnceLock;

use super::arithmetic::Hints;
use super::polyvec::{Matrix, PolyVec};
use super::sampling::public_key_digest;
use dsig_algorithms::Polynomial;
use dsig_api::{validate, Error, Result};
use dsig_params::pqc::dilithium::{ParameterSet, SecurityLevel, DILITHIUM_N, SEED_BYTES};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Dilithium public key: the matrix seed rho and t = A*s1 + s2
#[derive(Clone)]
pub struct PublicKey {
    pub(crate) params: ParameterSet,
    pub(crate) rho: [u8; SEED_BYTES],
    pub(crate) t: PolyVec,
    pub(crate) matrix: OnceLock<Matrix>,
}

impl PublicKey {
    pub(crate) fn new(
        params: ParameterSet,
        rho: [u8; SEED_BYTES],
        t: PolyVec,
        matrix: Option<Matrix>,
    ) -> Self {
        Self {
            params,
            rho,
            t,
            matrix: matrix.map(OnceLock::from).unwrap_or_default(),
        }
    }

    /// Parameter set this key was generated under
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Security level of the parameter set
    pub fn level(&self) -> SecurityLevel {
        self.params.level
    }

    /// Matrix seed
    pub fn rho(&self) -> &[u8; SEED_BYTES] {
        &self.rho
    }

    /// The vector t
    pub fn t(&self) -> &PolyVec {
        &self.t
    }

    /// The matrix A, expanded from rho on first call
    pub fn matrix(&self) -> &Matrix {
        self.matrix
            .get_or_init(|| Matrix::expand(&self.rho, self.params.k, self.params.l))
    }

    /// Digest tr of the encoded key, as bound into every signed message
    pub fn digest(&self) -> [u8; SEED_BYTES] {
        public_key_digest(&self.to_bytes())
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.rho == other.rho && self.t == other.t
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("algorithm", &self.params.name)
            .field("rho", &Hex(&self.rho))
            .finish_non_exhaustive()
    }
}

/// Dilithium private key.
///
/// Holds rho, the signing seed K, the public key digest tr and the short
/// vectors s1 and s2. Everything but the parameter set and the matrix cache is
/// wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) params: ParameterSet,
    pub(crate) rho: [u8; SEED_BYTES],
    pub(crate) key: [u8; SEED_BYTES],
    pub(crate) tr: [u8; SEED_BYTES],
    pub(crate) s1: PolyVec,
    pub(crate) s2: PolyVec,
    #[zeroize(skip)]
    pub(crate) matrix: OnceLock<Matrix>,
}

impl PrivateKey {
    pub(crate) fn new(
        params: ParameterSet,
        rho: [u8; SEED_BYTES],
        key: [u8; SEED_BYTES],
        tr: [u8; SEED_BYTES],
        s1: PolyVec,
        s2: PolyVec,
        matrix: Option<Matrix>,
    ) -> Self {
        Self {
            params,
            rho,
            key,
            tr,
            s1,
            s2,
            matrix: matrix.map(OnceLock::from).unwrap_or_default(),
        }
    }

    /// Parameter set this key was generated under
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Security level of the parameter set
    pub fn level(&self) -> SecurityLevel {
        self.params.level
    }

    /// Digest of the matching public key
    pub fn public_key_digest(&self) -> &[u8; SEED_BYTES] {
        &self.tr
    }

    /// The matrix A, expanded from rho on first call
    pub fn matrix(&self) -> &Matrix {
        self.matrix
            .get_or_init(|| Matrix::expand(&self.rho, self.params.k, self.params.l))
    }

    /// Recomputes the matching public key, t = A*s1 + s2
    pub fn public_key(&self) -> PublicKey {
        let matrix = self.matrix();
        let t = matrix.mul_vec(&self.s1).add(&self.s2);
        PublicKey::new(self.params, self.rho, t, Some(matrix.clone()))
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
            && self.rho == other.rho
            && self.key == other.key
            && self.tr == other.tr
            && self.s1 == other.s1
            && self.s2 == other.s2
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.params.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// A matching public/private key pair
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub(crate) public: PublicKey,
    pub(crate) private: PrivateKey,
}

impl KeyPair {
    /// The public half
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The private half
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Parameter set of both halves
    pub fn params(&self) -> &ParameterSet {
        &self.public.params
    }

    /// Splits the pair
    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public, self.private)
    }
}

/// A Dilithium signature: challenge c, response z and hints h
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub(crate) params: ParameterSet,
    pub(crate) c: Polynomial,
    pub(crate) z: PolyVec,
    pub(crate) h: Hints,
}

impl Signature {
    /// Assembles a signature from its parts, checking their shape.
    ///
    /// `params` must pass [`ParameterSet::check`].
    /// `c` must have exactly tau coefficients in {-1, +1} and zeros elsewhere,
    /// `z` must have l entries, and `h` must have k rows with at most omega bits
    /// set. Bounds on z are left to verification.
    pub fn from_parts(params: ParameterSet, c: Polynomial, z: PolyVec, h: Hints) -> Result<Self> {
        check_params(&params)?;
        if !is_sparse_ternary(&c, params.tau) {
            return Err(Error::encoding(
                "signature",
                format!("challenge must have exactly {} entries in {{-1, 1}}", params.tau),
            ));
        }
        validate::length("signature response", z.len(), params.l)?;
        validate::length("signature hints", h.len(), params.k)?;
        if h.count() > params.omega {
            return Err(Error::encoding(
                "signature",
                format!("{} hints exceed the limit of {}", h.count(), params.omega),
            ));
        }
        Ok(Self { params, c, z, h })
    }

    /// Parameter set the signature was produced under
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Challenge polynomial
    pub fn c(&self) -> &Polynomial {
        &self.c
    }

    /// Response vector
    pub fn z(&self) -> &PolyVec {
        &self.z
    }

    /// Hint bits
    pub fn hints(&self) -> &Hints {
        &self.h
    }
}

/// Structural check shared by every constructor that accepts a parameter set
pub(crate) fn check_params(params: &ParameterSet) -> Result<()> {
    params
        .check()
        .map_err(|reason| Error::param("parameter set", reason))
}

/// True when `c` has exactly `tau` coefficients equal to +-1 and no others
pub(crate) fn is_sparse_ternary(c: &Polynomial, tau: usize) -> bool {
    let mut weight = 0;
    for i in 0..DILITHIUM_N {
        match c.centered(i) {
            0 => {}
            1 | -1 => weight += 1,
            _ => return false,
        }
    }
    weight == tau
}

struct Hex<'a>(&'a [u8]);

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
