//! Khovratovich-Law ("BIP32-Ed25519") derivation over Ed25519.
//!
//! Private keys are 64 bytes: the 32-byte scalar `kL` followed by the 32-byte
//! extension `kR`. Child indices enter the HMAC little-endian.

use super::ed25519::{Ed25519PublicKey, MASTER_KEY_DOMAIN};
use super::{hmac_sha512, validate_seed, Curve, CurveType};
use crate::{types::bits, ChainCode, ChildNumber, Error, HmacSha256, KeyNetVersions, PrivateKey, Result, KEY_SIZE};
use curve25519_dalek::{edwards::EdwardsPoint, scalar::Scalar, traits::IsIdentity};
use hmac::Mac;
use log::{debug, trace};
use zeroize::Zeroizing;

/// Number of bytes of `ZL` that enter `8 * ZL`.
const ZL_LENGTH: usize = 28;

/// Khovratovich-Law extended private key `kL || kR`.
#[derive(Clone)]
pub struct KholawPrivateKey {
    kl: Zeroizing<[u8; KEY_SIZE]>,
    kr: Zeroizing<[u8; KEY_SIZE]>,
}

impl KholawPrivateKey {
    /// Scalar half `kL`.
    pub fn scalar_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.kl
    }

    /// Extension half `kR`.
    pub fn extension_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.kr
    }

    fn from_halves(kl: Zeroizing<[u8; KEY_SIZE]>, kr: Zeroizing<[u8; KEY_SIZE]>) -> Self {
        KholawPrivateKey { kl, kr }
    }
}

impl core::fmt::Debug for KholawPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("KholawPrivateKey").field(&"...").finish()
    }
}

impl PrivateKey for KholawPrivateKey {
    type PublicKey = Ed25519PublicKey;

    const LENGTH: usize = 2 * KEY_SIZE;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LENGTH {
            return Err(Error::KeyLength { kind: "ed25519 khovratovich-law private", expected: Self::LENGTH, actual: bytes.len() });
        }
        let (kl, kr) = bytes.split_at(KEY_SIZE);
        Ok(KholawPrivateKey::from_halves(Zeroizing::new(kl.try_into()?), Zeroizing::new(kr.try_into()?)))
    }

    fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(Vec::with_capacity(Self::LENGTH));
        bytes.extend_from_slice(self.kl.as_slice());
        bytes.extend_from_slice(self.kr.as_slice());
        bytes
    }

    fn public_key(&self) -> Ed25519PublicKey {
        let scalar = Scalar::from_bytes_mod_order(*self.kl);
        Ed25519PublicKey::from_point(&EdwardsPoint::mul_base(&scalar))
    }
}

/// `8 * zl[..28] + kl` as a little-endian integer, or `None` when the sum
/// does not fit in 256 bits.
fn add_zl_mul8(kl: &[u8; KEY_SIZE], zl: &[u8]) -> Option<Zeroizing<[u8; KEY_SIZE]>> {
    let mut out = Zeroizing::new([0u8; KEY_SIZE]);
    let mut carry: u16 = 0;
    for i in 0..KEY_SIZE {
        let zl_mul8 = if i < ZL_LENGTH { (zl[i] as u16) << 3 } else { 0 };
        let sum = kl[i] as u16 + zl_mul8 + carry;
        out[i] = sum as u8;
        carry = sum >> 8;
    }
    // the top bits of 8 * zl[27] still carry into byte 28
    (carry == 0).then_some(out)
}

/// `(zr + kr) mod 2^256`, little-endian.
fn add_mod_2_256(kr: &[u8; KEY_SIZE], zr: &[u8]) -> Zeroizing<[u8; KEY_SIZE]> {
    let mut out = Zeroizing::new([0u8; KEY_SIZE]);
    let mut carry: u16 = 0;
    for i in 0..KEY_SIZE {
        let sum = kr[i] as u16 + zr[i] as u16 + carry;
        out[i] = sum as u8;
        carry = sum >> 8;
    }
    out
}

/// `8 * zl[..28]` as a scalar.
fn zl_mul8_scalar(zl: &[u8]) -> Scalar {
    let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
    bytes[..ZL_LENGTH].copy_from_slice(&zl[..ZL_LENGTH]);
    Scalar::from_bytes_mod_order(*bytes) * Scalar::from(8u8)
}

/// Z and C digests for the given index: private-key inputs for hardened
/// indices, public-key inputs otherwise.
fn hmac_digests(
    private_key: Option<&KholawPrivateKey>,
    public_key: &Ed25519PublicKey,
    chain_code: &ChainCode,
    index: ChildNumber,
) -> Result<(Zeroizing<[u8; 64]>, Zeroizing<[u8; 64]>)> {
    let index_bytes = index.to_le_bytes();
    match private_key {
        Some(private_key) if index.is_hardened() => Ok((
            hmac_sha512(chain_code, &[&[0x00], private_key.kl.as_slice(), private_key.kr.as_slice(), &index_bytes])?,
            hmac_sha512(chain_code, &[&[0x01], private_key.kl.as_slice(), private_key.kr.as_slice(), &index_bytes])?,
        )),
        _ => Ok((
            hmac_sha512(chain_code, &[&[0x02], public_key.as_bytes(), &index_bytes])?,
            hmac_sha512(chain_code, &[&[0x03], public_key.as_bytes(), &index_bytes])?,
        )),
    }
}

fn chain_code_of(digest: &[u8; 64]) -> Result<ChainCode> {
    Ok(digest[KEY_SIZE..].try_into()?)
}

/// Khovratovich-Law derivation over Ed25519 (Cardano Byron / Ledger style).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Ed25519Kholaw;

impl Curve for Ed25519Kholaw {
    type PrivateKey = KholawPrivateKey;
    type PublicKey = Ed25519PublicKey;

    const CURVE_TYPE: CurveType = CurveType::Ed25519Kholaw;

    fn default_net_versions() -> KeyNetVersions {
        KeyNetVersions::KHOLAW
    }

    fn is_public_derivation_supported() -> bool {
        true
    }

    fn generate_master_key(seed: &[u8]) -> Result<(KholawPrivateKey, ChainCode)> {
        validate_seed(seed)?;

        let mut digest = hmac_sha512(MASTER_KEY_DOMAIN, &[seed])?;
        while bits::are_set(digest[31], 0x20) {
            debug!("khovratovich-law master key candidate has bit 0x20 of byte 31 set, hashing again");
            digest = hmac_sha512(MASTER_KEY_DOMAIN, &[&digest[..]])?;
        }

        digest[0] = bits::reset(digest[0], 0x07);
        digest[31] = bits::reset(digest[31], 0x80);
        digest[31] = bits::set(digest[31], 0x40);

        let mut hmac = HmacSha256::new_from_slice(MASTER_KEY_DOMAIN)?;
        hmac.update(&[0x01]);
        hmac.update(seed);
        let chain_code: ChainCode = hmac.finalize().into_bytes().into();

        let (kl, kr) = digest.split_at(KEY_SIZE);
        let private_key = KholawPrivateKey::from_halves(Zeroizing::new(kl.try_into()?), Zeroizing::new(kr.try_into()?));
        Ok((private_key, chain_code))
    }

    fn ckd_priv(
        private_key: &KholawPrivateKey,
        public_key: &Ed25519PublicKey,
        chain_code: &ChainCode,
        index: ChildNumber,
    ) -> Result<(KholawPrivateKey, ChainCode)> {
        let (z, c) = hmac_digests(Some(private_key), public_key, chain_code, index)?;
        let (zl, zr) = z.split_at(KEY_SIZE);
        let child_kl = add_zl_mul8(&private_key.kl, zl).ok_or(Error::InvalidChildKey(index))?;
        if Scalar::from_bytes_mod_order(*child_kl) == Scalar::ZERO {
            return Err(Error::UnluckyIndex(index));
        }
        let child_kr = add_mod_2_256(&private_key.kr, zr);

        trace!("khovratovich-law private derivation of child {index}");
        Ok((KholawPrivateKey::from_halves(child_kl, child_kr), chain_code_of(&c)?))
    }

    fn ckd_pub(public_key: &Ed25519PublicKey, chain_code: &ChainCode, index: ChildNumber) -> Result<(Ed25519PublicKey, ChainCode)> {
        if index.is_hardened() {
            return Err(Error::HardenedPublicDerivation(index));
        }

        let (z, c) = hmac_digests(None, public_key, chain_code, index)?;
        let child = public_key.to_point()? + EdwardsPoint::mul_base(&zl_mul8_scalar(&z[..KEY_SIZE]));
        if child.is_identity() {
            return Err(Error::InvalidChildKey(index));
        }

        trace!("khovratovich-law public derivation of child {index}");
        Ok((Ed25519PublicKey::from_point(&child), chain_code_of(&c)?))
    }
}
