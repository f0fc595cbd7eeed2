//! Coin profiles: SLIP-44 index, default path, key versions and curve.

use keyforge_bip32::{CurveType, KeyNetVersions};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Default address paths, relative to the coin level.
pub mod paths {
    /// `account' / change / address_index`
    pub const NON_HARDENED_FULL: &str = "0'/0/0";
    /// `account' / change' / address_index'`
    pub const HARDENED_FULL: &str = "0'/0'/0'";
    /// `account' / change'`
    pub const HARDENED_MID: &str = "0'/0'";
    /// `account'`
    pub const HARDENED_SHORT: &str = "0'";
}

/// Per-coin configuration of the BIP44 layer. Profiles can be loaded from
/// JSON (or any serde format) in addition to the built-in ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinConf {
    pub name: Cow<'static, str>,
    pub abbreviation: Cow<'static, str>,
    /// SLIP-44 coin type.
    pub coin_index: u32,
    pub is_testnet: bool,
    pub default_path: Cow<'static, str>,
    pub key_net_versions: KeyNetVersions,
    /// Coin specific extended key versions (e.g. `Ltpv` / `Ltub`), used in
    /// place of `key_net_versions` on request.
    #[serde(default)]
    pub alt_key_net_versions: Option<KeyNetVersions>,
    #[serde(default)]
    pub wif_net_version: Option<u8>,
    pub curve: CurveType,
}

#[allow(clippy::too_many_arguments)]
const fn coin(
    name: &'static str,
    abbreviation: &'static str,
    coin_index: u32,
    is_testnet: bool,
    default_path: &'static str,
    key_net_versions: KeyNetVersions,
    alt_key_net_versions: Option<KeyNetVersions>,
    wif_net_version: Option<u8>,
    curve: CurveType,
) -> CoinConf {
    CoinConf {
        name: Cow::Borrowed(name),
        abbreviation: Cow::Borrowed(abbreviation),
        coin_index,
        is_testnet,
        default_path: Cow::Borrowed(default_path),
        key_net_versions,
        alt_key_net_versions,
        wif_net_version,
        curve,
    }
}

use paths::*;
use CurveType::*;

const MAIN: KeyNetVersions = KeyNetVersions::MAIN_NET;
const TEST: KeyNetVersions = KeyNetVersions::TEST_NET;
const LITECOIN_TEST: KeyNetVersions = KeyNetVersions::from_versions([0x04, 0x36, 0xf6, 0xe1], [0x04, 0x36, 0xef, 0x7d]);

impl CoinConf {
    pub const BITCOIN_MAIN_NET: CoinConf = coin("Bitcoin", "BTC", 0, false, NON_HARDENED_FULL, MAIN, None, Some(0x80), Secp256k1);
    pub const BITCOIN_TEST_NET: CoinConf = coin("Bitcoin TestNet", "BTC", 1, true, NON_HARDENED_FULL, TEST, None, Some(0xef), Secp256k1);
    pub const LITECOIN_MAIN_NET: CoinConf = coin(
        "Litecoin",
        "LTC",
        2,
        false,
        NON_HARDENED_FULL,
        MAIN,
        Some(KeyNetVersions::from_versions([0x01, 0x9d, 0xa4, 0x62], [0x01, 0x9d, 0x9c, 0xfe])),
        Some(0xb0),
        Secp256k1,
    );
    pub const LITECOIN_TEST_NET: CoinConf =
        coin("Litecoin TestNet", "LTC", 1, true, NON_HARDENED_FULL, LITECOIN_TEST, Some(LITECOIN_TEST), Some(0xef), Secp256k1);
    pub const DOGECOIN_MAIN_NET: CoinConf = coin(
        "Dogecoin",
        "DOGE",
        3,
        false,
        NON_HARDENED_FULL,
        KeyNetVersions::from_versions([0x02, 0xfa, 0xca, 0xfd], [0x02, 0xfa, 0xc3, 0x98]),
        None,
        Some(0x9e),
        Secp256k1,
    );
    pub const DOGECOIN_TEST_NET: CoinConf = coin(
        "Dogecoin TestNet",
        "DOGE",
        1,
        true,
        NON_HARDENED_FULL,
        KeyNetVersions::from_versions([0x04, 0x32, 0xa9, 0xa8], [0x04, 0x32, 0xa2, 0x43]),
        None,
        Some(0xf1),
        Secp256k1,
    );
    pub const DASH_MAIN_NET: CoinConf = coin("Dash", "DASH", 5, false, NON_HARDENED_FULL, MAIN, None, Some(0xcc), Secp256k1);
    pub const ETHEREUM: CoinConf = coin("Ethereum", "ETH", 60, false, NON_HARDENED_FULL, MAIN, None, None, Secp256k1);
    pub const COSMOS: CoinConf = coin("Cosmos", "ATOM", 118, false, NON_HARDENED_FULL, MAIN, None, None, Secp256k1);
    pub const RIPPLE: CoinConf = coin("Ripple", "XRP", 144, false, NON_HARDENED_FULL, MAIN, None, None, Secp256k1);
    pub const TRON: CoinConf = coin("Tron", "TRX", 195, false, NON_HARDENED_FULL, MAIN, None, None, Secp256k1);
    pub const NEO_LEGACY: CoinConf = coin("Neo Legacy", "NEO", 888, false, NON_HARDENED_FULL, MAIN, None, Some(0x80), Nist256p1);
    pub const NEO_N3: CoinConf = coin("Neo N3", "NEO", 888, false, NON_HARDENED_FULL, MAIN, None, Some(0x80), Nist256p1);
    pub const ONTOLOGY: CoinConf = coin("Ontology", "ONT", 1024, false, NON_HARDENED_FULL, MAIN, None, None, Nist256p1);
    pub const STELLAR: CoinConf = coin("Stellar", "XLM", 148, false, HARDENED_SHORT, MAIN, None, None, Ed25519Slip10);
    pub const ALGORAND: CoinConf = coin("Algorand", "ALGO", 283, false, HARDENED_FULL, MAIN, None, None, Ed25519Slip10);
    pub const POLKADOT_ED25519: CoinConf = coin("Polkadot", "DOT", 354, false, HARDENED_FULL, MAIN, None, None, Ed25519Slip10);
    pub const NEAR_PROTOCOL: CoinConf = coin("Near Protocol", "NEAR", 397, false, HARDENED_SHORT, MAIN, None, None, Ed25519Slip10);
    pub const SOLANA: CoinConf = coin("Solana", "SOL", 501, false, HARDENED_SHORT, MAIN, None, None, Ed25519Slip10);
    pub const TEZOS: CoinConf = coin("Tezos", "XTZ", 1729, false, HARDENED_MID, MAIN, None, None, Ed25519Slip10);
    pub const NANO: CoinConf = coin("Nano", "NANO", 165, false, HARDENED_SHORT, MAIN, None, None, Ed25519Blake2b);
    pub const CARDANO_BYRON_LEDGER: CoinConf =
        coin("Cardano Byron Ledger", "ADA", 1815, false, NON_HARDENED_FULL, KeyNetVersions::KHOLAW, None, None, Ed25519Kholaw);

    /// Copy of this profile serializing keys with its alternative net
    /// versions, if the coin defines any.
    pub fn with_alt_key_net_versions(&self) -> Option<CoinConf> {
        self.alt_key_net_versions.map(|alt| CoinConf { key_net_versions: alt, ..self.clone() })
    }

    /// Built-in profiles.
    pub fn builtin() -> &'static [CoinConf] {
        static BUILTIN: [CoinConf; 22] = [
            CoinConf::BITCOIN_MAIN_NET,
            CoinConf::BITCOIN_TEST_NET,
            CoinConf::LITECOIN_MAIN_NET,
            CoinConf::LITECOIN_TEST_NET,
            CoinConf::DOGECOIN_MAIN_NET,
            CoinConf::DOGECOIN_TEST_NET,
            CoinConf::DASH_MAIN_NET,
            CoinConf::ETHEREUM,
            CoinConf::COSMOS,
            CoinConf::RIPPLE,
            CoinConf::TRON,
            CoinConf::NEO_LEGACY,
            CoinConf::NEO_N3,
            CoinConf::ONTOLOGY,
            CoinConf::STELLAR,
            CoinConf::ALGORAND,
            CoinConf::POLKADOT_ED25519,
            CoinConf::NEAR_PROTOCOL,
            CoinConf::SOLANA,
            CoinConf::TEZOS,
            CoinConf::NANO,
            CoinConf::CARDANO_BYRON_LEDGER,
        ];
        &BUILTIN
    }

    /// Look up a built-in profile by name, ignoring case.
    pub fn by_name(name: &str) -> Option<&'static CoinConf> {
        Self::builtin().iter().find(|conf| conf.name.eq_ignore_ascii_case(name))
    }
}
