//! Trait for deriving child keys on a given type.

use crate::{types::hash160, KeyFingerprint, PublicKeyBytes, Result};
use core::fmt::Debug;

/// Curve-native public key held by an extended public key.
///
/// Every supported curve encodes its public keys in 33 bytes: SEC1
/// compressed points for secp256k1 and P-256, `0x00 || A` for Ed25519.
pub trait PublicKey: Sized + Clone + Debug + Eq {
    /// Initialize this key from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Serialize this key as bytes.
    fn to_bytes(&self) -> PublicKeyBytes;

    /// Compute a 4-byte key fingerprint for this public key.
    ///
    /// Default implementation uses `RIPEMD160(SHA256(public_key))`.
    fn fingerprint(&self) -> KeyFingerprint {
        let digest = hash160(&self.to_bytes());
        [digest[0], digest[1], digest[2], digest[3]]
    }
}
