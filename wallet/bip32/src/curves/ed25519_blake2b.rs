//! SLIP-10 over Ed25519 with Blake2b-512 key expansion (Nano).
//!
//! Master key and child derivation are the SLIP-10 Ed25519 ones; only the
//! public key differs, since the secret is expanded with Blake2b-512 instead
//! of SHA-512.

use super::ed25519::{child_secret, master_secret, Ed25519PublicKey};
use super::{Curve, CurveType};
use crate::{types::bits, ChainCode, ChildNumber, Error, PrivateKey, Result, KEY_SIZE};
use curve25519_dalek::{edwards::EdwardsPoint, scalar::Scalar};
use zeroize::Zeroizing;

/// 32-byte Ed25519 secret whose public key is computed through Blake2b-512.
#[derive(Clone)]
pub struct Ed25519Blake2bPrivateKey(Zeroizing<[u8; KEY_SIZE]>);

impl Ed25519Blake2bPrivateKey {
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl core::fmt::Debug for Ed25519Blake2bPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Ed25519Blake2bPrivateKey").field(&"...").finish()
    }
}

impl PrivateKey for Ed25519Blake2bPrivateKey {
    type PublicKey = Ed25519PublicKey;

    const LENGTH: usize = KEY_SIZE;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let secret: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::KeyLength { kind: "ed25519 blake2b private", expected: Self::LENGTH, actual: bytes.len() })?;
        Ok(Ed25519Blake2bPrivateKey(Zeroizing::new(secret)))
    }

    fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_vec())
    }

    fn public_key(&self) -> Ed25519PublicKey {
        let digest = blake2b_simd::blake2b(self.0.as_slice());
        let mut scalar = Zeroizing::new([0u8; KEY_SIZE]);
        scalar.copy_from_slice(&digest.as_bytes()[..KEY_SIZE]);

        // ed25519 clamping
        scalar[0] = bits::reset(scalar[0], 0x07);
        scalar[31] = bits::reset(scalar[31], 0x80);
        scalar[31] = bits::set(scalar[31], 0x40);

        let point = EdwardsPoint::mul_base(&Scalar::from_bytes_mod_order(*scalar));
        Ed25519PublicKey::from_point(&point)
    }
}

/// SLIP-10 derivation over Ed25519 with Blake2b-512 public keys.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Ed25519Blake2b;

impl Curve for Ed25519Blake2b {
    type PrivateKey = Ed25519Blake2bPrivateKey;
    type PublicKey = Ed25519PublicKey;

    const CURVE_TYPE: CurveType = CurveType::Ed25519Blake2b;

    fn is_public_derivation_supported() -> bool {
        false
    }

    fn generate_master_key(seed: &[u8]) -> Result<(Ed25519Blake2bPrivateKey, ChainCode)> {
        let (secret, chain_code) = master_secret(seed)?;
        Ok((Ed25519Blake2bPrivateKey(secret), chain_code))
    }

    fn ckd_priv(
        private_key: &Ed25519Blake2bPrivateKey,
        _public_key: &Ed25519PublicKey,
        chain_code: &ChainCode,
        index: ChildNumber,
    ) -> Result<(Ed25519Blake2bPrivateKey, ChainCode)> {
        let (child, child_chain_code) = child_secret(&private_key.0, chain_code, index, Self::CURVE_TYPE)?;
        Ok((Ed25519Blake2bPrivateKey(child), child_chain_code))
    }

    fn ckd_pub(_public_key: &Ed25519PublicKey, _chain_code: &ChainCode, _index: ChildNumber) -> Result<(Ed25519PublicKey, ChainCode)> {
        Err(Error::PublicDerivationUnsupported(Self::CURVE_TYPE))
    }
}
