//! Parser for extended key types (i.e. `xprv` and `xpub`)

use crate::{version::hex_string, ChildNumber, Error, ExtendedKeyAttrs, KeyNetVersions, Result, Version, KEY_SIZE};
use core::fmt::{self, Display};
use zeroize::Zeroizing;

/// Serialized extended key (e.g. `xprv` and `xpub`).
#[derive(Clone, Debug)]
pub struct ExtendedKey {
    /// Version bytes of the key (e.g. the ones behind `xprv`, `xpub`).
    pub version: Version,

    /// Extended key attributes.
    pub attrs: ExtendedKeyAttrs,

    /// Key material (may be public or private).
    ///
    /// Public keys are 33 bytes. Private keys carry a leading `0x00` byte
    /// followed by the raw key (32 or 64 bytes).
    pub key_bytes: Zeroizing<Vec<u8>>,
}

impl ExtendedKey {
    /// Bytes preceding the key field: version, depth, parent fingerprint,
    /// child number and chain code.
    pub const HEADER_SIZE: usize = 4 + 1 + 4 + 4 + KEY_SIZE;

    /// Size of a public extended key when decoded from Base58.
    pub const PUBLIC_SIZE: usize = Self::HEADER_SIZE + KEY_SIZE + 1;

    /// Sizes of a private extended key when decoded from Base58: 32-byte
    /// keys and 64-byte Khovratovich-Law keys.
    pub const PRIVATE_SIZES: [usize; 2] = [Self::HEADER_SIZE + KEY_SIZE + 1, Self::HEADER_SIZE + 2 * KEY_SIZE + 1];

    /// Serialize into the raw (pre-Base58) payload.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(Vec::with_capacity(Self::HEADER_SIZE + self.key_bytes.len()));
        bytes.extend_from_slice(&self.version);
        bytes.push(self.attrs.depth);
        bytes.extend_from_slice(&self.attrs.parent_fingerprint);
        bytes.extend_from_slice(&self.attrs.child_number.to_bytes());
        bytes.extend_from_slice(&self.attrs.chain_code);
        bytes.extend_from_slice(&self.key_bytes);
        bytes
    }

    /// Base58Check-encode this key.
    pub fn to_base58(&self) -> Zeroizing<String> {
        Zeroizing::new(bs58::encode(self.to_bytes().as_slice()).with_check().into_string())
    }

    /// Decode a Base58Check string, accepting either half of `net_versions`.
    pub fn decode(base58: &str, net_versions: &KeyNetVersions) -> Result<Self> {
        let bytes = Zeroizing::new(bs58::decode(base58).with_check(None).into_vec()?);
        Self::from_bytes(&bytes, net_versions)
    }

    /// Parse the raw payload, accepting either half of `net_versions`.
    pub fn from_bytes(bytes: &[u8], net_versions: &KeyNetVersions) -> Result<Self> {
        let version: Version = bytes
            .get(..4)
            .ok_or(Error::DecodeLength { actual: bytes.len(), expected: &Self::PRIVATE_SIZES })?
            .try_into()?;

        let is_public = &version == net_versions.public();
        if !is_public && &version != net_versions.private() {
            return Err(Error::NetVersionMismatch {
                actual: hex_string(&version),
                public: hex_string(net_versions.public()),
                private: hex_string(net_versions.private()),
            });
        }

        let expected: &'static [usize] = if is_public { &[Self::PUBLIC_SIZE] } else { &Self::PRIVATE_SIZES };
        if !expected.contains(&bytes.len()) {
            return Err(Error::DecodeLength { actual: bytes.len(), expected });
        }

        let key_bytes = &bytes[Self::HEADER_SIZE..];
        if !is_public && key_bytes[0] != 0 {
            return Err(Error::SecretKeyPrefix(key_bytes[0]));
        }

        let attrs = ExtendedKeyAttrs {
            depth: bytes[4],
            parent_fingerprint: bytes[5..9].try_into()?,
            child_number: ChildNumber::from_bytes(bytes[9..13].try_into()?),
            chain_code: bytes[13..Self::HEADER_SIZE].try_into()?,
        };

        Ok(ExtendedKey { version, attrs, key_bytes: Zeroizing::new(key_bytes.to_vec()) })
    }

    /// A depth-0 key must carry the master parent fingerprint and child number 0.
    pub fn check_master(&self) -> Result<()> {
        if !self.attrs.is_valid_master() {
            return Err(Error::InvalidMasterKey("depth 0 with a parent fingerprint or child index"));
        }
        Ok(())
    }

    /// Whether this key carries the public version of `net_versions`.
    pub fn is_public(&self, net_versions: &KeyNetVersions) -> bool {
        &self.version == net_versions.public()
    }

    /// Raw key bytes, with the `0x00` prefix of private keys stripped.
    pub fn key(&self, net_versions: &KeyNetVersions) -> &[u8] {
        if self.is_public(net_versions) {
            &self.key_bytes
        } else {
            &self.key_bytes[1..]
        }
    }
}

impl Display for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}
