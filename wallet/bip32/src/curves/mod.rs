//! Curve bindings for the derivation engine.
//!
//! A [`Curve`] bundles the key types of one elliptic curve with its master
//! key generator and its child key derivation (CKD) functions. The tree
//! node [`Bip32`](crate::Bip32) and the extended key types are generic over
//! it.

mod ed25519;
mod ed25519_blake2b;
mod kholaw;
mod nist256p1;
mod secp256k1;

pub use self::ed25519::{Ed25519, Ed25519PrivateKey, Ed25519PublicKey};
pub use self::ed25519_blake2b::{Ed25519Blake2b, Ed25519Blake2bPrivateKey};
pub use self::kholaw::{Ed25519Kholaw, KholawPrivateKey};
pub use self::nist256p1::Nist256p1;
pub use self::secp256k1::Secp256k1;

use crate::{ChainCode, ChildNumber, Error, HmacSha512, KeyNetVersions, PrivateKey, PublicKey, Result, KEY_SIZE};
use core::fmt::{self, Debug, Display};
use hmac::Mac;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Minimum seed length accepted by master key generation, in bytes.
pub const MIN_SEED_LENGTH: usize = 16;

/// Tag identifying a curve binding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    Secp256k1,
    Nist256p1,
    Ed25519Slip10,
    Ed25519Blake2b,
    Ed25519Kholaw,
}

impl Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CurveType::Secp256k1 => "secp256k1",
            CurveType::Nist256p1 => "nist256p1",
            CurveType::Ed25519Slip10 => "ed25519 (SLIP-10)",
            CurveType::Ed25519Blake2b => "ed25519-blake2b (SLIP-10)",
            CurveType::Ed25519Kholaw => "ed25519 (Khovratovich-Law)",
        })
    }
}

/// Capability set of a curve: key types, master key generation and CKD.
pub trait Curve: Copy + Clone + Debug + Default + Eq + Send + Sync + 'static {
    type PrivateKey: PrivateKey<PublicKey = Self::PublicKey>;
    type PublicKey: PublicKey;

    const CURVE_TYPE: CurveType;

    /// Net versions used when none are supplied.
    fn default_net_versions() -> KeyNetVersions {
        KeyNetVersions::MAIN_NET
    }

    /// Whether public (non-hardened) child derivation is possible.
    fn is_public_derivation_supported() -> bool;

    /// Generate the master private key and chain code from a seed.
    fn generate_master_key(seed: &[u8]) -> Result<(Self::PrivateKey, ChainCode)>;

    /// Private parent key to private child key.
    fn ckd_priv(
        private_key: &Self::PrivateKey,
        public_key: &Self::PublicKey,
        chain_code: &ChainCode,
        index: ChildNumber,
    ) -> Result<(Self::PrivateKey, ChainCode)>;

    /// Public parent key to public child key.
    fn ckd_pub(public_key: &Self::PublicKey, chain_code: &ChainCode, index: ChildNumber) -> Result<(Self::PublicKey, ChainCode)>;
}

pub(crate) fn validate_seed(seed: &[u8]) -> Result<()> {
    if seed.len() < MIN_SEED_LENGTH {
        return Err(Error::SeedLength { len: seed.len(), min: MIN_SEED_LENGTH });
    }
    Ok(())
}

/// HMAC-SHA512 over the concatenation of `parts`.
pub(crate) fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> Result<Zeroizing<[u8; 64]>> {
    let mut hmac = HmacSha512::new_from_slice(key)?;
    for part in parts {
        hmac.update(part);
    }

    let mut digest = Zeroizing::new([0u8; 64]);
    digest.copy_from_slice(&hmac.finalize().into_bytes());
    Ok(digest)
}

/// Left and right 32-byte halves of an HMAC-SHA512 digest.
pub(crate) fn halves(digest: &[u8; 64]) -> (Zeroizing<[u8; KEY_SIZE]>, ChainCode) {
    let mut left = Zeroizing::new([0u8; KEY_SIZE]);
    let mut right = [0u8; KEY_SIZE];
    left.copy_from_slice(&digest[..KEY_SIZE]);
    right.copy_from_slice(&digest[KEY_SIZE..]);
    (left, right)
}
