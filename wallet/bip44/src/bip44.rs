//! BIP44 account path policy over a [`Bip32`] node.

use crate::{wif, Bip44Change, Bip44Level, CoinConf, Error, Result};
use keyforge_bip32::{Bip32, ChildNumber, Curve, CurveType, ExtendedKeyAttrs, KeySource};
use log::debug;
use zeroize::Zeroizing;

/// BIP44 purpose.
pub const PURPOSE_BIP44: u32 = 44;
/// BIP49 purpose (nested segwit).
pub const PURPOSE_BIP49: u32 = 49;
/// BIP84 purpose (native segwit).
pub const PURPOSE_BIP84: u32 = 84;
/// BIP86 purpose (taproot).
pub const PURPOSE_BIP86: u32 = 86;

/// A node of a BIP44 path `m / purpose' / coin_type' / account' / change / address_index`
/// for a given coin.
///
/// Each step only succeeds from the level directly above it.
#[derive(Clone, Debug)]
pub struct Bip44<C: Curve> {
    bip32: Bip32<C>,
    coin: CoinConf,
    level: Bip44Level,
}

impl<C> Bip44<C>
where
    C: Curve,
{
    /// Wrap `bip32` for `coin`. Public-only nodes must be at least at the
    /// account level.
    pub fn new(bip32: Bip32<C>, coin: CoinConf) -> Result<Self> {
        if coin.curve != C::CURVE_TYPE {
            return Err(Error::CurveMismatch { coin: coin.curve, node: C::CURVE_TYPE });
        }

        let public_only = bip32.is_public_only();
        let lowest = if public_only { Bip44Level::Account } else { Bip44Level::Master };
        let level = Bip44Level::from_depth(bip32.depth())
            .filter(|level| *level >= lowest)
            .ok_or(Error::InvalidDepth { depth: bip32.depth(), public_only })?;

        Ok(Bip44 { bip32, coin, level })
    }

    /// Master node for `coin` from a seed, using the coin's key net versions.
    pub fn from_seed<S: AsRef<[u8]>>(seed: S, coin: CoinConf) -> Result<Self> {
        let bip32 = Bip32::from_seed(seed, Some(coin.key_net_versions))?;
        Self::new(bip32, coin)
    }

    /// Node decoded from an extended key string using the coin's key net versions.
    pub fn from_extended_key(extended_key: &str, coin: CoinConf) -> Result<Self> {
        let bip32 = Bip32::from_extended_key(extended_key, Some(coin.key_net_versions))?;
        Self::new(bip32, coin)
    }

    pub fn from_private_key<'a, K>(source: K, attrs: Option<ExtendedKeyAttrs>, coin: CoinConf) -> Result<Self>
    where
        K: Into<KeySource<'a, C::PrivateKey>>,
    {
        let bip32 = Bip32::from_private_key(source, attrs, Some(coin.key_net_versions))?;
        Self::new(bip32, coin)
    }

    pub fn from_public_key<'a, K>(source: K, attrs: Option<ExtendedKeyAttrs>, coin: CoinConf) -> Result<Self>
    where
        K: Into<KeySource<'a, C::PublicKey>>,
    {
        let bip32 = Bip32::from_public_key(source, attrs, Some(coin.key_net_versions))?;
        Self::new(bip32, coin)
    }

    /// Derive the purpose level (`m / purpose'`).
    pub fn purpose(&self, purpose: u32) -> Result<Self> {
        self.derive(Bip44Level::Master, ChildNumber::hardened(purpose)?)
    }

    /// Derive the coin level (`m / purpose' / coin_type'`).
    pub fn coin(&self) -> Result<Self> {
        self.derive(Bip44Level::Purpose, ChildNumber::hardened(self.coin.coin_index)?)
    }

    /// Derive the account level (`.../ account'`).
    pub fn account(&self, account: u32) -> Result<Self> {
        self.derive(Bip44Level::Coin, ChildNumber::hardened(account)?)
    }

    /// Derive the change level. Hardened when the curve has no public derivation.
    pub fn change(&self, change: Bip44Change) -> Result<Self> {
        self.derive(Bip44Level::Account, Self::public_index(change.index())?)
    }

    /// Derive the address index level. Hardened when the curve has no public derivation.
    pub fn address_index(&self, address_index: u32) -> Result<Self> {
        self.derive(Bip44Level::Change, Self::public_index(address_index)?)
    }

    /// From the master level, derive `purpose' / coin_type'` followed by the
    /// coin's default path.
    pub fn derive_default_path(&self, purpose: u32) -> Result<Self> {
        self.check_level(Bip44Level::Master)?;

        let coin = self.purpose(purpose)?.coin()?;
        let bip32 = coin.bip32.derive_path(&*self.coin.default_path)?;
        debug!("derived default path {} for {}", self.coin.default_path, self.coin.name);
        Self::new(bip32, self.coin.clone())
    }

    /// WIF encoding of the private key, for secp256k1 and nist256p1 coins that
    /// define a WIF version.
    pub fn private_key_wif(&self) -> Result<Zeroizing<String>> {
        let version = match (C::CURVE_TYPE, self.coin.wif_net_version) {
            (CurveType::Secp256k1 | CurveType::Nist256p1, Some(version)) => version,
            _ => return Err(Error::WifUnsupported(self.coin.name.to_string())),
        };
        let private_key = self.bip32.private_key()?;
        wif::encode(&private_key.to_bytes(), version)
    }

    pub fn level(&self) -> Bip44Level {
        self.level
    }

    pub fn is_level(&self, level: Bip44Level) -> bool {
        self.level == level
    }

    pub fn bip32(&self) -> &Bip32<C> {
        &self.bip32
    }

    pub fn coin_conf(&self) -> &CoinConf {
        &self.coin
    }

    fn public_index(index: u32) -> Result<ChildNumber> {
        Ok(ChildNumber::new(index, !C::is_public_derivation_supported())?)
    }

    fn check_level(&self, expected: Bip44Level) -> Result<()> {
        if self.level != expected {
            return Err(Error::Depth { expected, actual: self.level });
        }
        Ok(())
    }

    fn derive(&self, expected: Bip44Level, index: ChildNumber) -> Result<Self> {
        self.check_level(expected)?;
        Self::new(self.bip32.child_key(index)?, self.coin.clone())
    }
}
