//! Hierarchical deterministic tree node.

use crate::{
    curves::{Curve, CurveType},
    ChainCode, ChildNumber, Depth, Error, ExtendedKey, ExtendedKeyAttrs, ExtendedPrivateKey, ExtendedPublicKey, IntoDerivationPath,
    KeyFingerprint, KeyNetVersions, PrivateKey, PublicKey, Result,
};
use log::trace;

/// Key input of the node factories: raw bytes or an already parsed
/// curve-native key.
#[derive(Clone, Debug)]
pub enum KeySource<'a, K> {
    Bytes(&'a [u8]),
    Key(K),
}

impl<'a, K> From<&'a [u8]> for KeySource<'a, K> {
    fn from(bytes: &'a [u8]) -> Self {
        KeySource::Bytes(bytes)
    }
}

impl<'a, K, const N: usize> From<&'a [u8; N]> for KeySource<'a, K> {
    fn from(bytes: &'a [u8; N]) -> Self {
        KeySource::Bytes(bytes)
    }
}

/// A node of the key tree: an extended public key, plus the matching
/// extended private key unless the node is public-only.
#[derive(Clone, Debug)]
pub struct Bip32<C: Curve> {
    private_key: Option<ExtendedPrivateKey<C>>,
    public_key: ExtendedPublicKey<C>,
}

impl<C> Bip32<C>
where
    C: Curve,
{
    /// Master node generated from a seed.
    pub fn from_seed<S: AsRef<[u8]>>(seed: S, net_versions: Option<KeyNetVersions>) -> Result<Self> {
        let private_key = ExtendedPrivateKey::new(seed, net_versions.unwrap_or_else(C::default_net_versions))?;
        Ok(Self::from_extended_private_key(private_key))
    }

    /// Master node generated from a seed, then derived along `path`.
    pub fn from_seed_and_path<S: AsRef<[u8]>, P: IntoDerivationPath>(
        seed: S,
        path: P,
        net_versions: Option<KeyNetVersions>,
    ) -> Result<Self> {
        Self::from_seed(seed, net_versions)?.derive_path(path)
    }

    /// Node decoded from a Base58Check extended key string. Whether the node
    /// is public-only follows from which half of `net_versions` the key uses.
    pub fn from_extended_key(extended_key: &str, net_versions: Option<KeyNetVersions>) -> Result<Self> {
        let net_versions = net_versions.unwrap_or_else(C::default_net_versions);
        let extended_key = ExtendedKey::decode(extended_key, &net_versions)?;
        if extended_key.is_public(&net_versions) {
            Ok(Self::from_extended_public_key(ExtendedPublicKey::from_extended_key(&extended_key, net_versions)?))
        } else {
            Ok(Self::from_extended_private_key(ExtendedPrivateKey::from_extended_key(&extended_key, net_versions)?))
        }
    }

    /// Node holding a private key. Without `attrs` the node is a master key
    /// with an all-zero chain code.
    pub fn from_private_key<'a, K>(source: K, attrs: Option<ExtendedKeyAttrs>, net_versions: Option<KeyNetVersions>) -> Result<Self>
    where
        K: Into<KeySource<'a, C::PrivateKey>>,
    {
        let private_key = match source.into() {
            KeySource::Bytes(bytes) => C::PrivateKey::from_bytes(bytes)?,
            KeySource::Key(key) => key,
        };
        let attrs = attrs.unwrap_or_default();
        let net_versions = net_versions.unwrap_or_else(C::default_net_versions);
        Ok(Self::from_extended_private_key(ExtendedPrivateKey::from_private_key(private_key, attrs, net_versions)))
    }

    /// Public-only node. Without `attrs` the node is a master key with an
    /// all-zero chain code.
    pub fn from_public_key<'a, K>(source: K, attrs: Option<ExtendedKeyAttrs>, net_versions: Option<KeyNetVersions>) -> Result<Self>
    where
        K: Into<KeySource<'a, C::PublicKey>>,
    {
        let public_key = match source.into() {
            KeySource::Bytes(bytes) => C::PublicKey::from_bytes(bytes)?,
            KeySource::Key(key) => key,
        };
        let attrs = attrs.unwrap_or_default();
        let net_versions = net_versions.unwrap_or_else(C::default_net_versions);
        Ok(Self::from_extended_public_key(ExtendedPublicKey::from_public_key(public_key, attrs, net_versions)))
    }

    pub fn from_extended_private_key(private_key: ExtendedPrivateKey<C>) -> Self {
        let public_key = private_key.public_key();
        Bip32 { private_key: Some(private_key), public_key }
    }

    pub fn from_extended_public_key(public_key: ExtendedPublicKey<C>) -> Self {
        Bip32 { private_key: None, public_key }
    }

    /// Derive the child node at `index`. Public-only nodes can only derive
    /// non-hardened children.
    pub fn child_key<I: Into<ChildNumber>>(&self, index: I) -> Result<Self> {
        let index = index.into();
        let child = match &self.private_key {
            Some(private_key) => Self::from_extended_private_key(private_key.derive_child(index)?),
            None => {
                if index.is_hardened() {
                    return Err(Error::HardenedFromPublicOnly(index));
                }
                Self::from_extended_public_key(self.public_key.derive_child(index)?)
            }
        };

        trace!("derived {} child {} at depth {}", C::CURVE_TYPE, index, child.depth());
        Ok(child)
    }

    /// Derive along `path`. Absolute (`m/...`) paths are only accepted on
    /// master nodes.
    pub fn derive_path<P: IntoDerivationPath>(&self, path: P) -> Result<Self> {
        let path = path.into_derivation_path()?;
        path.check_origin(self.depth())?;

        let node = path.iter().try_fold(self.clone(), |node, index| node.child_key(index))?;
        Ok(node)
    }

    /// Drop the private key. Irreversible.
    pub fn convert_to_public(&mut self) {
        self.private_key = None;
    }

    /// Public-only copy of this node.
    pub fn to_public(&self) -> Self {
        Self::from_extended_public_key(self.public_key.clone())
    }

    pub fn is_public_only(&self) -> bool {
        self.private_key.is_none()
    }

    pub fn private_key(&self) -> Result<&ExtendedPrivateKey<C>> {
        self.private_key.as_ref().ok_or(Error::PublicOnly)
    }

    pub fn public_key(&self) -> &ExtendedPublicKey<C> {
        &self.public_key
    }

    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        self.public_key.attrs()
    }

    pub fn depth(&self) -> Depth {
        self.attrs().depth
    }

    pub fn index(&self) -> ChildNumber {
        self.attrs().child_number
    }

    pub fn chain_code(&self) -> &ChainCode {
        &self.attrs().chain_code
    }

    pub fn fingerprint(&self) -> KeyFingerprint {
        self.public_key.fingerprint()
    }

    pub fn parent_fingerprint(&self) -> KeyFingerprint {
        self.attrs().parent_fingerprint
    }

    pub fn net_versions(&self) -> &KeyNetVersions {
        self.public_key.net_versions()
    }

    pub fn curve_type(&self) -> CurveType {
        C::CURVE_TYPE
    }

    pub fn is_public_derivation_supported(&self) -> bool {
        C::is_public_derivation_supported()
    }
}
