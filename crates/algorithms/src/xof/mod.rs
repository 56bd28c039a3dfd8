//! Domain-separated seed expansion
//!
//! Every pseudorandom quantity in the scheme is drawn from SHAKE128 over
//! `part_0 || part_1 || ... || domain`, where the final byte is a [`DomainTag`].
//! Because the tag is always the last absorbed byte and each tag names exactly
//! one purpose, two expansions for different purposes never share an input.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake128Reader};

use crate::poly::sampling::ByteSource;


/// Purpose of an expansion. Values are fixed and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DomainTag {
    /// Uniform entries of the public matrix A
    Matrix = 0x01,
    /// Sparse ternary challenge c
    Challenge = 0x02,
    /// Short secret vectors s1 and s2
    Small = 0x03,
    /// Masking vector y
    Mask = 0x04,
    /// Splitting the key generation seed into rho, sigma and K
    KeySeed = 0x05,
    /// Digest tr of the encoded public key
    PublicKeyDigest = 0x06,
    /// Message representative mu
    Message = 0x07,
    /// Per-signature masking seed rho'
    MaskSeed = 0x08,
}

impl DomainTag {
    /// Every tag, in numeric order
    pub const ALL: [DomainTag; 8] = [
        Self::Matrix,
        Self::Challenge,
        Self::Small,
        Self::Mask,
        Self::KeySeed,
        Self::PublicKeyDigest,
        Self::Message,
        Self::MaskSeed,
    ];

    /// The byte appended to the absorbed input
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

/// Absorbing half of an expansion.
///
/// ```
/// use dsig_algorithms::xof::{DomainTag, Expander};
///
/// let mut stream = Expander::new(DomainTag::Matrix)
///     .absorb(&[7u8; 32])
///     .absorb(&[0, 1])
///     .finalize();
/// let word = stream.next_u32_le();
/// # let _ = word;
/// ```
#[derive(Clone)]
pub struct Expander {
    hasher: Shake128,
    domain: DomainTag,
}

impl Expander {
    /// Starts an expansion for `domain`
    pub fn new(domain: DomainTag) -> Self {
        Self {
            hasher: Shake128::default(),
            domain,
        }
    }

    /// Appends one input part
    pub fn absorb(mut self, data: &[u8]) -> Self {
        self.hasher.update(data);
        self
    }

    /// Appends the domain byte and switches to squeezing
    pub fn finalize(mut self) -> ExpanderStream {
        self.hasher.update(&[self.domain.byte()]);
        ExpanderStream {
            reader: self.hasher.finalize_xof(),
        }
    }
}

/// Squeezing half of an expansion: an endless deterministic byte stream
pub struct ExpanderStream {
    reader: Shake128Reader,
}

impl ExpanderStream {
    /// Fills `out` with the next bytes of the stream
    #[inline]
    pub fn fill(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }

    /// Next byte
    #[inline]
    pub fn next_u8(&mut self) -> u8 {
        let mut b = [0u8; 1];
        self.fill(&mut b);
        b[0]
    }

    /// Next 4 bytes as a little-endian word
    #[inline]
    pub fn next_u32_le(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.fill(&mut b);
        u32::from_le_bytes(b)
    }

    /// Next 8 bytes as a little-endian word
    #[inline]
    pub fn next_u64_le(&mut self) -> u64 {
        let mut b = [0u8; 8];
        self.fill(&mut b);
        u64::from_le_bytes(b)
    }

    /// Next `len` bytes
    pub fn take(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.fill(&mut out);
        out
    }
}

impl ByteSource for ExpanderStream {
    fn fill(&mut self, out: &mut [u8]) {
        ExpanderStream::fill(self, out);
    }
}

/// One-shot expansion: the first `len` bytes of the stream for `seed` under `domain`
pub fn expand(seed: &[u8], domain: DomainTag, len: usize) -> Vec<u8> {
    Expander::new(domain).absorb(seed).finalize().take(len)
}
