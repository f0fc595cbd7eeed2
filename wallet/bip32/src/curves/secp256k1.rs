//! BIP32 over secp256k1.

use super::{halves, hmac_sha512, validate_seed, Curve, CurveType};
use crate::{ChainCode, ChildNumber, Error, PrivateKey, PublicKey, PublicKeyBytes, Result, KEY_SIZE};
use ::secp256k1::{All, Scalar, SecretKey};
use log::{debug, trace};
use zeroize::Zeroizing;

/// HMAC key for secp256k1 master key generation.
const MASTER_KEY_DOMAIN: &[u8] = b"Bitcoin seed";

/// BIP32 / SLIP-10 derivation over secp256k1.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Secp256k1;

impl PrivateKey for SecretKey {
    type PublicKey = ::secp256k1::PublicKey;

    const LENGTH: usize = KEY_SIZE;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LENGTH {
            return Err(Error::KeyLength { kind: "secp256k1 private", expected: Self::LENGTH, actual: bytes.len() });
        }
        Ok(SecretKey::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.secret_bytes().to_vec())
    }

    fn public_key(&self) -> Self::PublicKey {
        ::secp256k1::PublicKey::from_secret_key_global(self)
    }
}

impl PublicKey for ::secp256k1::PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_SIZE + 1 {
            return Err(Error::KeyLength { kind: "secp256k1 public", expected: KEY_SIZE + 1, actual: bytes.len() });
        }
        Ok(::secp256k1::PublicKey::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        self.serialize()
    }
}

impl Curve for Secp256k1 {
    type PrivateKey = SecretKey;
    type PublicKey = ::secp256k1::PublicKey;

    const CURVE_TYPE: CurveType = CurveType::Secp256k1;

    fn is_public_derivation_supported() -> bool {
        true
    }

    fn generate_master_key(seed: &[u8]) -> Result<(SecretKey, ChainCode)> {
        validate_seed(seed)?;

        let mut digest = hmac_sha512(MASTER_KEY_DOMAIN, &[seed])?;
        loop {
            let (secret, chain_code) = halves(&digest);
            match SecretKey::from_slice(&secret[..]) {
                Ok(private_key) => return Ok((private_key, chain_code)),
                Err(_) => {
                    debug!("secp256k1 master key candidate is out of range, hashing again");
                    digest = hmac_sha512(MASTER_KEY_DOMAIN, &[&digest[..]])?;
                }
            }
        }
    }

    fn ckd_priv(
        private_key: &SecretKey,
        public_key: &::secp256k1::PublicKey,
        chain_code: &ChainCode,
        index: ChildNumber,
    ) -> Result<(SecretKey, ChainCode)> {
        let digest = if index.is_hardened() {
            hmac_sha512(chain_code, &[&[0u8], &private_key.secret_bytes(), &index.to_bytes()])?
        } else {
            hmac_sha512(chain_code, &[&public_key.serialize(), &index.to_bytes()])?
        };
        let (tweak, child_chain_code) = halves(&digest);

        // IL >= n or a zero child key make this index unusable
        let tweak = Scalar::from_be_bytes(*tweak).map_err(|_| Error::InvalidChildKey(index))?;
        let child = private_key.add_tweak(&tweak).map_err(|_| Error::InvalidChildKey(index))?;

        trace!("secp256k1 private derivation of child {index}");
        Ok((child, child_chain_code))
    }

    fn ckd_pub(public_key: &::secp256k1::PublicKey, chain_code: &ChainCode, index: ChildNumber) -> Result<(::secp256k1::PublicKey, ChainCode)> {
        if index.is_hardened() {
            return Err(Error::HardenedPublicDerivation(index));
        }

        let digest = hmac_sha512(chain_code, &[&public_key.serialize(), &index.to_bytes()])?;
        let (tweak, child_chain_code) = halves(&digest);

        let tweak = Scalar::from_be_bytes(*tweak).map_err(|_| Error::InvalidChildKey(index))?;
        let secp: &::secp256k1::Secp256k1<All> = ::secp256k1::SECP256K1;
        let child = public_key.add_exp_tweak(secp, &tweak).map_err(|_| Error::InvalidChildKey(index))?;

        trace!("secp256k1 public derivation of child {index}");
        Ok((child, child_chain_code))
    }
}
