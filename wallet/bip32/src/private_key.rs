//! Trait for deriving child keys on a given type.

use crate::{PublicKey, Result};
use zeroize::Zeroizing;

/// Curve-native private key held by an extended private key.
pub trait PrivateKey: Sized + Clone {
    /// Public key type which corresponds to this private key.
    type PublicKey: PublicKey;

    /// Length of the raw key in bytes (32, or 64 for Khovratovich-Law keys).
    const LENGTH: usize;

    /// Initialize this key from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Serialize this key as bytes.
    fn to_bytes(&self) -> Zeroizing<Vec<u8>>;

    /// Get the [`Self::PublicKey`] that corresponds to this private key.
    fn public_key(&self) -> Self::PublicKey;
}
