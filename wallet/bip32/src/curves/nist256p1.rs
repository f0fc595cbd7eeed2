//! SLIP-10 over NIST P-256 (secp256r1).

use super::{halves, hmac_sha512, validate_seed, Curve, CurveType};
use crate::{ChainCode, ChildNumber, Error, PrivateKey, PublicKey, PublicKeyBytes, Result, KEY_SIZE};
use log::{debug, trace};
use p256::elliptic_curve::{ff::PrimeField, group::Curve as _, sec1::ToEncodedPoint};
use p256::{FieldBytes, ProjectivePoint, Scalar};
use zeroize::Zeroizing;

/// HMAC key for nist256p1 master key generation.
const MASTER_KEY_DOMAIN: &[u8] = b"Nist256p1 seed";

/// SLIP-10 derivation over NIST P-256.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Nist256p1;

impl PrivateKey for p256::SecretKey {
    type PublicKey = p256::PublicKey;

    const LENGTH: usize = KEY_SIZE;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LENGTH {
            return Err(Error::KeyLength { kind: "nist256p1 private", expected: Self::LENGTH, actual: bytes.len() });
        }
        p256::SecretKey::from_bytes(&FieldBytes::clone_from_slice(bytes)).map_err(|_| Error::InvalidKey("nist256p1 private"))
    }

    fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(p256::SecretKey::to_bytes(self).to_vec())
    }

    fn public_key(&self) -> p256::PublicKey {
        p256::SecretKey::public_key(self)
    }
}

impl PublicKey for p256::PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_SIZE + 1 {
            return Err(Error::KeyLength { kind: "nist256p1 public", expected: KEY_SIZE + 1, actual: bytes.len() });
        }
        p256::PublicKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidKey("nist256p1 public"))
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        let mut bytes = [0u8; KEY_SIZE + 1];
        bytes.copy_from_slice(self.to_encoded_point(true).as_bytes());
        bytes
    }
}

/// `IL` as a scalar, or `None` when `IL >= n`.
fn tweak_scalar(tweak: &[u8; KEY_SIZE]) -> Option<Scalar> {
    Option::from(Scalar::from_repr(FieldBytes::clone_from_slice(tweak)))
}

impl Curve for Nist256p1 {
    type PrivateKey = p256::SecretKey;
    type PublicKey = p256::PublicKey;

    const CURVE_TYPE: CurveType = CurveType::Nist256p1;

    fn is_public_derivation_supported() -> bool {
        true
    }

    fn generate_master_key(seed: &[u8]) -> Result<(p256::SecretKey, ChainCode)> {
        validate_seed(seed)?;

        let mut digest = hmac_sha512(MASTER_KEY_DOMAIN, &[seed])?;
        loop {
            let (secret, chain_code) = halves(&digest);
            match p256::SecretKey::from_bytes(&FieldBytes::clone_from_slice(&secret[..])) {
                Ok(private_key) => return Ok((private_key, chain_code)),
                Err(_) => {
                    debug!("nist256p1 master key candidate is out of range, hashing again");
                    digest = hmac_sha512(MASTER_KEY_DOMAIN, &[&digest[..]])?;
                }
            }
        }
    }

    fn ckd_priv(
        private_key: &p256::SecretKey,
        public_key: &p256::PublicKey,
        chain_code: &ChainCode,
        index: ChildNumber,
    ) -> Result<(p256::SecretKey, ChainCode)> {
        let digest = if index.is_hardened() {
            let secret = PrivateKey::to_bytes(private_key);
            hmac_sha512(chain_code, &[&[0u8], &secret[..], &index.to_bytes()])?
        } else {
            hmac_sha512(chain_code, &[&PublicKey::to_bytes(public_key), &index.to_bytes()])?
        };
        let (tweak, child_chain_code) = halves(&digest);

        // IL >= n or a zero child key make this index unusable
        let tweak = tweak_scalar(&tweak).ok_or(Error::InvalidChildKey(index))?;
        let child = tweak + *private_key.to_nonzero_scalar();
        let child = p256::SecretKey::from_bytes(&child.to_repr()).map_err(|_| Error::InvalidChildKey(index))?;

        trace!("nist256p1 private derivation of child {index}");
        Ok((child, child_chain_code))
    }

    fn ckd_pub(public_key: &p256::PublicKey, chain_code: &ChainCode, index: ChildNumber) -> Result<(p256::PublicKey, ChainCode)> {
        if index.is_hardened() {
            return Err(Error::HardenedPublicDerivation(index));
        }

        let digest = hmac_sha512(chain_code, &[&PublicKey::to_bytes(public_key), &index.to_bytes()])?;
        let (tweak, child_chain_code) = halves(&digest);

        let tweak = tweak_scalar(&tweak).ok_or(Error::InvalidChildKey(index))?;
        let point = ProjectivePoint::GENERATOR * tweak + public_key.to_projective();
        let child = p256::PublicKey::from_affine(point.to_affine()).map_err(|_| Error::InvalidChildKey(index))?;

        trace!("nist256p1 public derivation of child {index}");
        Ok((child, child_chain_code))
    }
}
