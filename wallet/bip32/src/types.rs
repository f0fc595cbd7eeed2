//! Primitive types shared across the crate.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Chain code: extension for both private and public keys which provides an
/// additional 256-bits of entropy.
pub type ChainCode = [u8; KEY_SIZE];

/// Derivation depth.
pub type Depth = u8;

/// BIP32 key fingerprints.
pub type KeyFingerprint = [u8; 4];

/// Bytes which represent a public key in its 33-byte encoding.
pub type PublicKeyBytes = [u8; KEY_SIZE + 1];

/// Size of a secp256k1 / ed25519 scalar, a chain code, and each HMAC-SHA512 half.
pub const KEY_SIZE: usize = 32;

/// Fingerprint of a master key.
pub const MASTER_FINGERPRINT: KeyFingerprint = [0u8; 4];

/// HMAC with SHA-512
pub type HmacSha512 = hmac::Hmac<sha2::Sha512>;

/// HMAC with SHA-256
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;

/// `RIPEMD160(SHA256(data))`
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// Returns true if the fingerprint is the one reserved for master keys.
pub fn is_master_fingerprint(fingerprint: &KeyFingerprint) -> bool {
    fingerprint == &MASTER_FINGERPRINT
}

/// Bit helpers used to tweak and test key bytes.
pub mod bits {
    #[inline]
    pub fn are_set(value: u8, mask: u8) -> bool {
        value & mask == mask
    }

    #[inline]
    pub fn set(value: u8, mask: u8) -> u8 {
        value | mask
    }

    #[inline]
    pub fn reset(value: u8, mask: u8) -> u8 {
        value & !mask
    }
}
