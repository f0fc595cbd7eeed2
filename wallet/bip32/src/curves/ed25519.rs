//! SLIP-10 over Ed25519: hardened-only private derivation.

use super::{halves, hmac_sha512, validate_seed, Curve, CurveType};
use crate::{ChainCode, ChildNumber, Error, PrivateKey, PublicKey, PublicKeyBytes, Result, KEY_SIZE};
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use ed25519_dalek::SigningKey;
use log::trace;
use zeroize::Zeroizing;

/// HMAC key for Ed25519 master key generation (shared by both Ed25519 curves).
pub(crate) const MASTER_KEY_DOMAIN: &[u8] = b"ed25519 seed";

/// Prefix byte of the 33-byte public key encoding.
const PUBLIC_KEY_PREFIX: u8 = 0x00;

/// Ed25519 public key `A`, shared by SLIP-10 and Khovratovich-Law keys.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ed25519PublicKey(CompressedEdwardsY);

impl Ed25519PublicKey {
    /// Raw 32-byte compressed point.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        self.0.as_bytes()
    }

    pub(crate) fn from_point(point: &EdwardsPoint) -> Self {
        Ed25519PublicKey(point.compress())
    }

    pub(crate) fn to_point(&self) -> Result<EdwardsPoint> {
        self.0.decompress().ok_or(Error::InvalidKey("ed25519 public"))
    }
}

impl PublicKey for Ed25519PublicKey {
    /// Accepts the 33-byte `0x00 || A` encoding as well as the raw 32-byte point.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw = match bytes.len() {
            33 if bytes[0] == PUBLIC_KEY_PREFIX => &bytes[1..],
            32 => bytes,
            _ => return Err(Error::KeyLength { kind: "ed25519 public", expected: KEY_SIZE + 1, actual: bytes.len() }),
        };

        let compressed = CompressedEdwardsY(raw.try_into()?);
        compressed.decompress().ok_or(Error::InvalidKey("ed25519 public"))?;
        Ok(Ed25519PublicKey(compressed))
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        let mut bytes = [PUBLIC_KEY_PREFIX; KEY_SIZE + 1];
        bytes[1..].copy_from_slice(self.0.as_bytes());
        bytes
    }
}

/// SLIP-10 Ed25519 private key (the 32-byte secret seed).
#[derive(Clone)]
pub struct Ed25519PrivateKey(SigningKey);

impl Ed25519PrivateKey {
    pub fn signing_key(&self) -> &SigningKey {
        &self.0
    }
}

impl core::fmt::Debug for Ed25519PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Ed25519PrivateKey").field(&"...").finish()
    }
}

impl PrivateKey for Ed25519PrivateKey {
    type PublicKey = Ed25519PublicKey;

    const LENGTH: usize = KEY_SIZE;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let secret: &[u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::KeyLength { kind: "ed25519 private", expected: Self::LENGTH, actual: bytes.len() })?;
        Ok(Ed25519PrivateKey(SigningKey::from_bytes(secret)))
    }

    fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_bytes().to_vec())
    }

    fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(CompressedEdwardsY(self.0.verifying_key().to_bytes()))
    }
}

/// SLIP-10 master secret and chain code, shared by the Ed25519 bindings
/// that only differ in how the public key is computed.
pub(crate) fn master_secret(seed: &[u8]) -> Result<(Zeroizing<[u8; KEY_SIZE]>, ChainCode)> {
    validate_seed(seed)?;

    let digest = hmac_sha512(MASTER_KEY_DOMAIN, &[seed])?;
    Ok(halves(&digest))
}

/// SLIP-10 hardened-only child secret.
pub(crate) fn child_secret(
    secret: &[u8; KEY_SIZE],
    chain_code: &ChainCode,
    index: ChildNumber,
    curve_type: CurveType,
) -> Result<(Zeroizing<[u8; KEY_SIZE]>, ChainCode)> {
    if !index.is_hardened() {
        return Err(Error::NonHardenedPrivateDerivation(index, curve_type));
    }

    let digest = hmac_sha512(chain_code, &[&[0u8], secret.as_slice(), &index.to_bytes()])?;
    trace!("{curve_type} private derivation of child {index}");
    Ok(halves(&digest))
}

/// SLIP-10 derivation over Ed25519.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Ed25519;

impl Curve for Ed25519 {
    type PrivateKey = Ed25519PrivateKey;
    type PublicKey = Ed25519PublicKey;

    const CURVE_TYPE: CurveType = CurveType::Ed25519Slip10;

    fn is_public_derivation_supported() -> bool {
        false
    }

    fn generate_master_key(seed: &[u8]) -> Result<(Ed25519PrivateKey, ChainCode)> {
        let (secret, chain_code) = master_secret(seed)?;
        Ok((Ed25519PrivateKey(SigningKey::from_bytes(&secret)), chain_code))
    }

    fn ckd_priv(
        private_key: &Ed25519PrivateKey,
        _public_key: &Ed25519PublicKey,
        chain_code: &ChainCode,
        index: ChildNumber,
    ) -> Result<(Ed25519PrivateKey, ChainCode)> {
        let secret = Zeroizing::new(private_key.0.to_bytes());
        let (child, child_chain_code) = child_secret(&secret, chain_code, index, Self::CURVE_TYPE)?;
        Ok((Ed25519PrivateKey(SigningKey::from_bytes(&child)), child_chain_code))
    }

    fn ckd_pub(_public_key: &Ed25519PublicKey, _chain_code: &ChainCode, _index: ChildNumber) -> Result<(Ed25519PublicKey, ChainCode)> {
        Err(Error::PublicDerivationUnsupported(Self::CURVE_TYPE))
    }
}
