//! Stateless entry points and the stateful [`Signer`].

use super::keys::{check_params, KeyPair, PrivateKey, PublicKey, Signature};
use super::sign::{keypair_internal, sign_internal, verify_internal};
use dsig_api::{validate, Error, Result};
use dsig_params::pqc::dilithium::{
    ParameterSet, SecurityLevel, DEFAULT_MAX_SIGN_ATTEMPTS, SEED_BYTES,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

fn level_params(level: u8) -> Result<ParameterSet> {
    SecurityLevel::from_u8(level)
        .map(SecurityLevel::params)
        .ok_or(Error::UnsupportedSecurityLevel { level })
}

/// Generates a key pair for security level 2, 3 or 5 using the OS RNG
pub fn generate(level: u8) -> Result<KeyPair> {
    generate_with_rng(level, &mut OsRng)
}

/// Generates a key pair for security level 2, 3 or 5 using `rng`
pub fn generate_with_rng<R: CryptoRng + RngCore>(level: u8, rng: &mut R) -> Result<KeyPair> {
    let params = level_params(level)?;
    keypair_with_rng(&params, rng)
}

/// Generates a key pair for an explicit parameter set using `rng`
pub fn keypair_with_rng<R: CryptoRng + RngCore>(
    params: &ParameterSet,
    rng: &mut R,
) -> Result<KeyPair> {
    let mut zeta = Zeroizing::new([0u8; SEED_BYTES]);
    rng.fill_bytes(&mut zeta[..]);
    keypair_internal(params, &zeta)
}

/// Derives a key pair from a 32-byte seed. The same seed always gives the same keys.
pub fn keypair_from_seed(params: &ParameterSet, seed: &[u8; SEED_BYTES]) -> Result<KeyPair> {
    keypair_internal(params, seed)
}

/// Deterministic signing: the same key and message always give the same signature.
///
/// Fails with [`Error::RetryExhausted`] when no attempt within `max_attempts`
/// passes the rejection checks.
pub fn sign(message: &[u8], private_key: &PrivateKey, max_attempts: u32) -> Result<Signature> {
    sign_internal(private_key, message, &[0u8; SEED_BYTES], max_attempts)
}

/// Hedged signing: fresh randomness from `rng` is mixed into the masking seed
pub fn sign_hedged<R: CryptoRng + RngCore>(
    message: &[u8],
    private_key: &PrivateKey,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Signature> {
    let mut rnd = Zeroizing::new([0u8; SEED_BYTES]);
    rng.fill_bytes(&mut rnd[..]);
    sign_internal(private_key, message, &rnd, max_attempts)
}

/// Checks a signature. Any mismatch or malformed signature is `false`.
pub fn verify(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    verify_internal(public_key, message, signature)
}

/// A parameter set plus an optional key pair, generated in place.
///
/// ```
/// use dsig_sign::dilithium::Signer;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha20Rng::from_seed([1u8; 32]);
/// let mut signer = Signer::new(2)?;
/// assert!(signer.sign(b"early").is_err());
///
/// signer.generate_keypair(&mut rng)?;
/// let sig = signer.sign(b"hello")?;
/// assert!(signer.verify(b"hello", &sig)?);
/// # Ok::<(), dsig_api::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Signer {
    params: ParameterSet,
    max_attempts: u32,
    keypair: Option<KeyPair>,
}

impl Signer {
    /// Signer for security level 2, 3 or 5. Any other level is a configuration error.
    pub fn new(level: u8) -> Result<Self> {
        Ok(Self::from_checked(level_params(level)?))
    }

    /// Signer for a hand-built parameter set.
    ///
    /// The set is checked structurally only; bounds that make signing
    /// impossible are accepted and surface as [`Error::RetryExhausted`].
    pub fn with_params(params: ParameterSet) -> Result<Self> {
        check_params(&params)?;
        Ok(Self::from_checked(params))
    }

    fn from_checked(params: ParameterSet) -> Self {
        Self {
            params,
            max_attempts: DEFAULT_MAX_SIGN_ATTEMPTS,
            keypair: None,
        }
    }

    /// Replaces the attempt budget. Must be positive.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Result<Self> {
        validate::parameter(
            max_attempts > 0,
            "signer",
            "max_attempts must be positive",
        )?;
        self.max_attempts = max_attempts;
        Ok(self)
    }

    /// Parameter set in use
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Attempt budget for each signature
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Generates a fresh key pair, replacing any previous one
    pub fn generate_keypair<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<&KeyPair> {
        let keypair = keypair_with_rng(&self.params, rng)?;
        Ok(self.keypair.insert(keypair))
    }

    /// The current key pair, if one has been generated
    pub fn keypair(&self) -> Option<&KeyPair> {
        self.keypair.as_ref()
    }

    /// Signs with the current key pair
    pub fn sign(&self, message: &[u8]) -> Result<Signature> {
        let keypair = self
            .keypair
            .as_ref()
            .ok_or(Error::UninitializedKey { context: "sign" })?;
        sign(message, &keypair.private, self.max_attempts)
    }

    /// Verifies against the current public key
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool> {
        let keypair = self
            .keypair
            .as_ref()
            .ok_or(Error::UninitializedKey { context: "verify" })?;
        Ok(verify(message, signature, &keypair.public))
    }
}
