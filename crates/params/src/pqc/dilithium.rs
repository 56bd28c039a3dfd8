//! Constants for the Dilithium digital signature algorithm

/// Dilithium polynomial degree
pub const DILITHIUM_N: usize = 256;

/// Dilithium modulus q = 2^23 - 2^13 + 1
pub const DILITHIUM_Q: u32 = 8_380_417;

/// Size of every seed (rho, sigma, K, zeta) and of the public key digest tr
pub const SEED_BYTES: usize = 32;

/// Size of the message representative mu and of the masking seed rho'
pub const CRH_BYTES: usize = 64;

/// Bytes per serialized coefficient (little-endian u32)
pub const COEFF_BYTES: usize = 4;

/// Bytes per serialized polynomial
pub const POLY_BYTES: usize = DILITHIUM_N * COEFF_BYTES;

/// Attempt budget used when the caller does not choose one
pub const DEFAULT_MAX_SIGN_ATTEMPTS: u32 = 1000;

/// NIST security categories supported by the parameter table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecurityLevel {
    /// NIST security level 2
    Level2,
    /// NIST security level 3
    Level3,
    /// NIST security level 5
    Level5,
}

impl SecurityLevel {
    /// All supported levels, in ascending order
    pub const ALL: [SecurityLevel; 3] = [Self::Level2, Self::Level3, Self::Level5];

    /// Maps a numeric level onto the table. Anything other than 2, 3 or 5 is `None`.
    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            2 => Some(Self::Level2),
            3 => Some(Self::Level3),
            5 => Some(Self::Level5),
            _ => None,
        }
    }

    /// Numeric level
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Level2 => 2,
            Self::Level3 => 3,
            Self::Level5 => 5,
        }
    }

    /// The canonical parameter set for this level
    pub const fn params(self) -> ParameterSet {
        match self {
            Self::Level2 => DILITHIUM2,
            Self::Level3 => DILITHIUM3,
            Self::Level5 => DILITHIUM5,
        }
    }
}

/// Structure containing one Dilithium parameter set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSet {
    /// Algorithm name
    pub name: &'static str,

    /// Security level this set belongs to
    pub level: SecurityLevel,

    /// Number of rows in A; length of s2, t, w
    pub k: usize,

    /// Number of columns in A; length of s1, y, z
    pub l: usize,

    /// Coefficient bound for s1 and s2
    pub eta: u32,

    /// Coefficient bound for the masking vector y
    pub gamma1: u32,

    /// Half of the high/low decomposition step
    pub gamma2: u32,

    /// Rejection margin, tau * eta for the canonical sets
    pub beta: u32,

    /// Number of +-1 coefficients in the challenge
    pub tau: usize,

    /// Maximum number of hint bits in a signature
    pub omega: usize,
}

/// Dilithium2 parameters (NIST security level 2)
pub const DILITHIUM2: ParameterSet = ParameterSet {
    name: "Dilithium2",
    level: SecurityLevel::Level2,
    k: 4,
    l: 4,
    eta: 2,
    gamma1: 1 << 17,
    gamma2: (DILITHIUM_Q - 1) / 88,
    beta: 78,
    tau: 39,
    omega: 80,
};

/// Dilithium3 parameters (NIST security level 3)
pub const DILITHIUM3: ParameterSet = ParameterSet {
    name: "Dilithium3",
    level: SecurityLevel::Level3,
    k: 6,
    l: 5,
    eta: 4,
    gamma1: 1 << 19,
    gamma2: (DILITHIUM_Q - 1) / 32,
    beta: 196,
    tau: 49,
    omega: 55,
};

/// Dilithium5 parameters (NIST security level 5)
pub const DILITHIUM5: ParameterSet = ParameterSet {
    name: "Dilithium5",
    level: SecurityLevel::Level5,
    k: 8,
    l: 7,
    eta: 2,
    gamma1: 1 << 19,
    gamma2: (DILITHIUM_Q - 1) / 32,
    beta: 120,
    tau: 60,
    omega: 75,
};

impl ParameterSet {
    /// Decomposition step alpha = 2 * gamma2
    pub const fn alpha(&self) -> u32 {
        2 * self.gamma2
    }

    /// Number of distinct high-bits values, (q - 1) / alpha
    pub const fn high_bits_buckets(&self) -> u32 {
        (DILITHIUM_Q - 1) / self.alpha()
    }

    /// Infinity-norm bound for z, gamma1 - beta. Non-positive for unusable sets.
    pub const fn z_bound(&self) -> i64 {
        self.gamma1 as i64 - self.beta as i64
    }

    /// Encoded public key size: rho || t
    pub const fn public_key_bytes(&self) -> usize {
        SEED_BYTES + self.k * POLY_BYTES
    }

    /// Encoded private key size: rho || K || tr || s1 || s2
    pub const fn private_key_bytes(&self) -> usize {
        3 * SEED_BYTES + (self.l + self.k) * POLY_BYTES
    }

    /// Encoded challenge size: tau (position, sign) pairs
    pub const fn challenge_bytes(&self) -> usize {
        2 * self.tau
    }

    /// Encoded hint size: omega index bytes plus k counters
    pub const fn hint_bytes(&self) -> usize {
        self.omega + self.k
    }

    /// Encoded signature size: c || z || h
    pub const fn signature_bytes(&self) -> usize {
        self.challenge_bytes() + self.l * POLY_BYTES + self.hint_bytes()
    }

    /// Structural checks for hand-built parameter sets.
    ///
    /// Feasibility of the rejection bound is not checked: a set whose
    /// z bound is non-positive is accepted and simply never produces a signature.
    pub const fn check(&self) -> Result<(), &'static str> {
        if self.k == 0 || self.l == 0 {
            return Err("matrix dimensions must be non-zero");
        }
        if self.k > u8::MAX as usize || self.l > u8::MAX as usize {
            return Err("matrix dimensions must fit in one byte");
        }
        if self.eta == 0 {
            return Err("eta must be positive");
        }
        if self.gamma1 == 0 || self.gamma1 >= DILITHIUM_Q / 2 {
            return Err("gamma1 must lie in (0, q/2)");
        }
        if self.gamma2 == 0 || (DILITHIUM_Q - 1) % (2 * self.gamma2) != 0 {
            return Err("2 * gamma2 must divide q - 1");
        }
        if self.tau == 0 || self.tau > 64 || self.tau > DILITHIUM_N {
            return Err("tau must lie in [1, 64]");
        }
        if self.omega > u8::MAX as usize {
            return Err("omega must fit in one byte");
        }
        Ok(())
    }
}

/// Binds a parameter set to a type so generic code can be instantiated per level
pub trait DilithiumSchemeParams: Send + Sync + 'static {
    /// Algorithm name
    const NAME: &'static str;

    /// Parameter set used by this instantiation
    const PARAMS: ParameterSet;
}

/// Marker type for Dilithium2
pub struct Dilithium2Params;

/// Marker type for Dilithium3
pub struct Dilithium3Params;

/// Marker type for Dilithium5
pub struct Dilithium5Params;

impl DilithiumSchemeParams for Dilithium2Params {
    const NAME: &'static str = "Dilithium2";
    const PARAMS: ParameterSet = DILITHIUM2;
}

impl DilithiumSchemeParams for Dilithium3Params {
    const NAME: &'static str = "Dilithium3";
    const PARAMS: ParameterSet = DILITHIUM3;
}

impl DilithiumSchemeParams for Dilithium5Params {
    const NAME: &'static str = "Dilithium5";
    const PARAMS: ParameterSet = DILITHIUM5;
}
