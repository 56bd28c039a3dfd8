// File: crates/api/src/traits/serialize.rs

//! Traits for byte serialization of scheme objects.

use crate::Result;
use zeroize::Zeroizing;

/// Fixed-width byte encoding for public values whose layout depends on a parameter set.
///
/// Decoding needs to know the dimensions the bytes were produced under, so it
/// takes a context value (for Dilithium objects, the security level).
pub trait Serialize: Sized {
    /// Context needed to interpret an encoding
    type Context: Copy;

    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;

    /// Creates an object from a byte slice produced under `context`.
    fn from_bytes(context: Self::Context, bytes: &[u8]) -> Result<Self>;
}

/// A trait for secret types that can be securely serialized.
pub trait SerializeSecret: Sized {
    /// Context needed to interpret an encoding
    type Context: Copy;

    /// Converts the object to a byte vector that is zeroized on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;

    /// Creates an object from a byte slice. Input should be zeroized after use.
    fn from_bytes(context: Self::Context, bytes: &[u8]) -> Result<Self>;
}
