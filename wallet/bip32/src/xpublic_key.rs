//! Extended public keys
//!
use crate::{
    curves::Curve, ChildNumber, Error, ExtendedKey, ExtendedKeyAttrs, ExtendedPrivateKey, IntoDerivationPath, KeyFingerprint,
    KeyNetVersions, PrivateKey, PublicKey, PublicKeyBytes, Result,
};
use core::str::FromStr;
use zeroize::Zeroizing;

/// Extended public keys derived using BIP32 / SLIP-10.
///
/// Generic around a [`Curve`] binding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtendedPublicKey<C: Curve> {
    /// Derived public key
    public_key: C::PublicKey,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,

    /// Versions used when serializing this key.
    net_versions: KeyNetVersions,
}

impl<C> ExtendedPublicKey<C>
where
    C: Curve,
{
    /// Wrap an existing public key with its metadata.
    pub fn from_public_key(public_key: C::PublicKey, attrs: ExtendedKeyAttrs, net_versions: KeyNetVersions) -> Self {
        ExtendedPublicKey { public_key, attrs, net_versions }
    }

    /// Build from a decoded extended key carrying the public version.
    pub fn from_extended_key(extended_key: &ExtendedKey, net_versions: KeyNetVersions) -> Result<Self> {
        extended_key.check_master()?;
        if !extended_key.is_public(&net_versions) {
            return Err(Error::InvalidKey("private extended key used as public"));
        }
        let public_key = C::PublicKey::from_bytes(extended_key.key(&net_versions))?;
        Ok(ExtendedPublicKey { public_key, attrs: extended_key.attrs.clone(), net_versions })
    }

    /// Obtain the non-extended public key value.
    pub fn public_key(&self) -> &C::PublicKey {
        &self.public_key
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    pub fn net_versions(&self) -> &KeyNetVersions {
        &self.net_versions
    }

    /// Compute a 4-byte key fingerprint for this extended public key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        self.public_key.fingerprint()
    }

    /// Derive a child key for a particular [`ChildNumber`].
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        if child_number.is_hardened() {
            // Cannot derive child public keys for hardened `ChildNumber`s
            return Err(Error::HardenedFromPublicOnly(child_number));
        }

        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;
        let (public_key, chain_code) = C::ckd_pub(&self.public_key, &self.attrs.chain_code, child_number)?;

        let attrs = ExtendedKeyAttrs { parent_fingerprint: self.public_key.fingerprint(), child_number, chain_code, depth };

        Ok(ExtendedPublicKey { public_key, attrs, net_versions: self.net_versions })
    }

    /// Derive along `path`. Absolute paths are only accepted at depth 0.
    pub fn derive_path<P: IntoDerivationPath>(self, path: P) -> Result<Self> {
        let path = path.into_derivation_path()?;
        path.check_origin(self.attrs.depth)?;
        let key = path.iter().try_fold(self, |key, child_num| key.derive_child(child_num))?;
        Ok(key)
    }

    /// Serialize the raw public key as a byte array.
    pub fn to_bytes(&self) -> PublicKeyBytes {
        self.public_key.to_bytes()
    }

    /// Serialize this key as an [`ExtendedKey`].
    pub fn to_extended_key(&self) -> ExtendedKey {
        ExtendedKey {
            version: *self.net_versions.public(),
            attrs: self.attrs.clone(),
            key_bytes: Zeroizing::new(self.to_bytes().to_vec()),
        }
    }

    /// Base58Check extended key string.
    pub fn to_string(&self) -> String {
        self.to_extended_key().to_base58().to_string()
    }
}

impl<C> From<&ExtendedPrivateKey<C>> for ExtendedPublicKey<C>
where
    C: Curve,
{
    fn from(xprv: &ExtendedPrivateKey<C>) -> ExtendedPublicKey<C> {
        ExtendedPublicKey {
            public_key: xprv.private_key().public_key(),
            attrs: xprv.attrs().clone(),
            net_versions: *xprv.net_versions(),
        }
    }
}

/// Parses with the curve's default net versions.
impl<C> FromStr for ExtendedPublicKey<C>
where
    C: Curve,
{
    type Err = Error;

    fn from_str(xpub: &str) -> Result<Self> {
        let net_versions = C::default_net_versions();
        Self::from_extended_key(&ExtendedKey::decode(xpub, &net_versions)?, net_versions)
    }
}
