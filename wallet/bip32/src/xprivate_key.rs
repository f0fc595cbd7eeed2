use std::fmt::{self, Debug};
use std::str::FromStr;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::{
    curves::Curve, result::Result, types::*, ChildNumber, Error, ExtendedKey, ExtendedKeyAttrs, ExtendedPublicKey,
    IntoDerivationPath, KeyNetVersions, PrivateKey, PublicKey,
};

/// Extended private keys derived using BIP32 / SLIP-10.
///
/// Generic around a [`Curve`] binding.
pub struct ExtendedPrivateKey<C: Curve> {
    /// Derived private key
    private_key: C::PrivateKey,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,

    /// Versions used when serializing this key.
    net_versions: KeyNetVersions,
}

impl<C> ExtendedPrivateKey<C>
where
    C: Curve,
{
    /// Maximum derivation depth.
    pub const MAX_DEPTH: Depth = u8::MAX;

    /// Create the root extended key for the given seed value.
    pub fn new<S>(seed: S, net_versions: KeyNetVersions) -> Result<Self>
    where
        S: AsRef<[u8]>,
    {
        let (private_key, chain_code) = C::generate_master_key(seed.as_ref())?;
        Ok(ExtendedPrivateKey { private_key, attrs: ExtendedKeyAttrs::master(chain_code), net_versions })
    }

    /// Wrap an existing private key with its metadata.
    pub fn from_private_key(private_key: C::PrivateKey, attrs: ExtendedKeyAttrs, net_versions: KeyNetVersions) -> Self {
        ExtendedPrivateKey { private_key, attrs, net_versions }
    }

    /// Build from a decoded extended key carrying the private version.
    pub fn from_extended_key(extended_key: &ExtendedKey, net_versions: KeyNetVersions) -> Result<Self> {
        extended_key.check_master()?;
        if extended_key.is_public(&net_versions) {
            return Err(Error::InvalidKey("public extended key used as private"));
        }
        let private_key = C::PrivateKey::from_bytes(extended_key.key(&net_versions))?;
        Ok(ExtendedPrivateKey { private_key, attrs: extended_key.attrs.clone(), net_versions })
    }

    /// Derive a child key for a particular [`ChildNumber`].
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;

        let public_key = self.private_key.public_key();
        let (private_key, chain_code) = C::ckd_priv(&self.private_key, &public_key, &self.attrs.chain_code, child_number)?;

        let attrs = ExtendedKeyAttrs { parent_fingerprint: public_key.fingerprint(), child_number, chain_code, depth };

        Ok(ExtendedPrivateKey { private_key, attrs, net_versions: self.net_versions })
    }

    /// Derive along `path`. Absolute paths are only accepted at depth 0.
    pub fn derive_path<P: IntoDerivationPath>(self, path: P) -> Result<Self> {
        let path = path.into_derivation_path()?;
        path.check_origin(self.attrs.depth)?;
        let key = path.iter().try_fold(self, |key, child_num| key.derive_child(child_num))?;
        Ok(key)
    }

    /// Borrow the derived private key value.
    pub fn private_key(&self) -> &C::PrivateKey {
        &self.private_key
    }

    /// Extended public key corresponding to this key.
    pub fn public_key(&self) -> ExtendedPublicKey<C> {
        self.into()
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    pub fn net_versions(&self) -> &KeyNetVersions {
        &self.net_versions
    }

    /// Compute a 4-byte key fingerprint for this key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        self.private_key.public_key().fingerprint()
    }

    /// Serialize the raw private key as a byte array.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.private_key.to_bytes()
    }

    /// Serialize this key as an [`ExtendedKey`].
    pub fn to_extended_key(&self) -> ExtendedKey {
        // Add leading `0` byte
        let raw = self.to_bytes();
        let mut key_bytes = Zeroizing::new(Vec::with_capacity(raw.len() + 1));
        key_bytes.push(0);
        key_bytes.extend_from_slice(&raw);

        ExtendedKey { version: *self.net_versions.private(), attrs: self.attrs.clone(), key_bytes }
    }

    /// Base58Check extended key string, wiped on drop.
    pub fn to_string(&self) -> Zeroizing<String> {
        self.to_extended_key().to_base58()
    }
}

impl<C> Clone for ExtendedPrivateKey<C>
where
    C: Curve,
{
    fn clone(&self) -> Self {
        ExtendedPrivateKey { private_key: self.private_key.clone(), attrs: self.attrs.clone(), net_versions: self.net_versions }
    }
}

impl<C> ConstantTimeEq for ExtendedPrivateKey<C>
where
    C: Curve,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        let key_a = self.to_bytes();
        let key_b = other.to_bytes();

        key_a.as_slice().ct_eq(key_b.as_slice())
            & self.attrs.depth.ct_eq(&other.attrs.depth)
            & self.attrs.parent_fingerprint.ct_eq(&other.attrs.parent_fingerprint)
            & self.attrs.child_number.0.ct_eq(&other.attrs.child_number.0)
            & self.attrs.chain_code.ct_eq(&other.attrs.chain_code)
    }
}

impl<C> Debug for ExtendedPrivateKey<C>
where
    C: Curve,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPrivateKey").field("attrs", &self.attrs).field("net_versions", &self.net_versions).finish_non_exhaustive()
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally
impl<C> Eq for ExtendedPrivateKey<C> where C: Curve {}

/// NOTE: uses [`ConstantTimeEq`] internally
impl<C> PartialEq for ExtendedPrivateKey<C>
where
    C: Curve,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

/// Parses with the curve's default net versions.
impl<C> FromStr for ExtendedPrivateKey<C>
where
    C: Curve,
{
    type Err = Error;

    fn from_str(xprv: &str) -> Result<Self> {
        let net_versions = C::default_net_versions();
        Self::from_extended_key(&ExtendedKey::decode(xprv, &net_versions)?, net_versions)
    }
}
