//! Extended key net versions

use crate::{Error, Result};
use core::fmt::{self, Display};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// 4-byte version prefix of a serialized extended key.
pub type Version = [u8; 4];

/// Pair of version prefixes (public, private) used when serializing extended
/// keys. The version determines the Base58 prefix (`xpub`, `tprv`, ...).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyNetVersions {
    public: Version,
    private: Version,
}

impl KeyNetVersions {
    /// Bitcoin main net (`xpub` / `xprv`).
    pub const MAIN_NET: KeyNetVersions = KeyNetVersions { public: [0x04, 0x88, 0xb2, 0x1e], private: [0x04, 0x88, 0xad, 0xe4] };

    /// Bitcoin test net (`tpub` / `tprv`).
    pub const TEST_NET: KeyNetVersions = KeyNetVersions { public: [0x04, 0x35, 0x87, 0xcf], private: [0x04, 0x35, 0x83, 0x94] };

    /// Khovratovich-Law Ed25519 keys (`xpub` / `xprv` with a 110-byte payload).
    pub const KHOLAW: KeyNetVersions = KeyNetVersions { public: [0x04, 0x88, 0xb2, 0x1e], private: [0x0f, 0x43, 0x31, 0xd4] };

    /// Build net versions from raw slices, each of which must be 4 bytes long.
    pub fn new(public: &[u8], private: &[u8]) -> Result<Self> {
        let public = public.try_into().map_err(|_| Error::NetVersionLength(public.len()))?;
        let private = private.try_into().map_err(|_| Error::NetVersionLength(private.len()))?;
        Ok(KeyNetVersions { public, private })
    }

    pub const fn from_versions(public: Version, private: Version) -> Self {
        KeyNetVersions { public, private }
    }

    pub fn public(&self) -> &Version {
        &self.public
    }

    pub fn private(&self) -> &Version {
        &self.private
    }
}

impl Default for KeyNetVersions {
    fn default() -> Self {
        Self::MAIN_NET
    }
}

impl Display for KeyNetVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", hex_string(&self.public), hex_string(&self.private))
    }
}

pub(crate) fn hex_string(bytes: &[u8]) -> String {
    faster_hex::hex_string(bytes)
}

fn version_from_hex<E: de::Error>(text: &str) -> std::result::Result<Version, E> {
    let mut version = [0u8; 4];
    if text.len() != version.len() * 2 {
        return Err(E::custom(Error::NetVersionLength(text.len() / 2)));
    }
    faster_hex::hex_decode(text.as_bytes(), &mut version).map_err(|err| E::custom(err.to_string()))?;
    Ok(version)
}

#[derive(Serialize, Deserialize)]
struct KeyNetVersionsHex<'a> {
    #[serde(borrow)]
    public: std::borrow::Cow<'a, str>,
    #[serde(borrow)]
    private: std::borrow::Cow<'a, str>,
}

impl Serialize for KeyNetVersions {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        KeyNetVersionsHex { public: hex_string(&self.public).into(), private: hex_string(&self.private).into() }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KeyNetVersions {
    fn deserialize<D>(deserializer: D) -> std::result::Result<KeyNetVersions, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = KeyNetVersionsHex::deserialize(deserializer)?;
        Ok(KeyNetVersions { public: version_from_hex(&hex.public)?, private: version_from_hex(&hex.private)? })
    }
}
