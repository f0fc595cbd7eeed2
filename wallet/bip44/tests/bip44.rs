use hex_literal::hex;
use keyforge_bip32::{Bip32, ChildNumber, CurveType, Ed25519, Ed25519Blake2b, Ed25519Kholaw, KeyNetVersions, Nist256p1, Secp256k1};
use keyforge_bip44::{paths, Bip44, Bip44Change, Bip44Level, CoinConf, Error, PURPOSE_BIP44, PURPOSE_BIP84};

const SEED: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

#[test]
fn full_chain_reaches_address_index() {
    let master = Bip44::<Secp256k1>::from_seed(SEED, CoinConf::BITCOIN_MAIN_NET).unwrap();
    assert!(master.is_level(Bip44Level::Master));

    assert_eq!(master.account(0).unwrap_err(), Error::Depth { expected: Bip44Level::Coin, actual: Bip44Level::Master });

    let address = master
        .purpose(PURPOSE_BIP44)
        .and_then(|node| node.coin())
        .and_then(|node| node.account(0))
        .and_then(|node| node.change(Bip44Change::External))
        .and_then(|node| node.address_index(0))
        .unwrap();
    assert_eq!(address.level(), Bip44Level::AddressIndex);
    assert_eq!(address.bip32().depth(), 5);
    assert_eq!(address.bip32().index(), ChildNumber(0));

    let expected = Bip32::<Secp256k1>::from_seed_and_path(SEED, "m/44'/0'/0'/0/0", None).unwrap();
    assert_eq!(address.bip32().public_key(), expected.public_key());
}

#[test]
fn wrong_level_leaves_node_unchanged() {
    let coin = Bip44::<Secp256k1>::from_seed(SEED, CoinConf::BITCOIN_MAIN_NET).unwrap().purpose(PURPOSE_BIP44).unwrap().coin().unwrap();
    let depth = coin.bip32().depth();

    assert!(matches!(coin.coin(), Err(Error::Depth { .. })));
    assert!(matches!(coin.change(Bip44Change::Internal), Err(Error::Depth { .. })));
    assert!(matches!(coin.derive_default_path(PURPOSE_BIP44), Err(Error::Depth { expected: Bip44Level::Master, actual: Bip44Level::Coin })));
    assert_eq!(coin.bip32().depth(), depth);
    assert!(coin.is_level(Bip44Level::Coin));
}

#[test]
fn default_paths() {
    let master = Bip44::<Secp256k1>::from_seed(SEED, CoinConf::BITCOIN_MAIN_NET).unwrap();
    let address = master.derive_default_path(PURPOSE_BIP84).unwrap();
    let expected = Bip32::<Secp256k1>::from_seed_and_path(SEED, "m/84'/0'/0'/0/0", None).unwrap();
    assert_eq!(address.bip32().public_key(), expected.public_key());

    let solana = Bip44::<Ed25519>::from_seed(SEED, CoinConf::SOLANA).unwrap().derive_default_path(PURPOSE_BIP44).unwrap();
    assert_eq!(solana.level(), Bip44Level::Account);
    assert_eq!(CoinConf::SOLANA.default_path, paths::HARDENED_SHORT);

    let tezos = Bip44::<Ed25519>::from_seed(SEED, CoinConf::TEZOS).unwrap().derive_default_path(PURPOSE_BIP44).unwrap();
    assert_eq!(tezos.level(), Bip44Level::Change);
}

#[test]
fn ed25519_change_and_address_are_hardened() {
    let account = Bip44::<Ed25519>::from_seed(SEED, CoinConf::ALGORAND).unwrap().purpose(PURPOSE_BIP44).unwrap().coin().unwrap().account(0).unwrap();
    let address = account.change(Bip44Change::External).unwrap().address_index(3).unwrap();
    assert!(address.bip32().index().is_hardened());
    assert_eq!(address.bip32().index().index(), 3);
}

#[test]
fn kholaw_public_account_derives_addresses() {
    let account = Bip44::<Ed25519Kholaw>::from_seed(SEED, CoinConf::CARDANO_BYRON_LEDGER)
        .unwrap()
        .purpose(PURPOSE_BIP44)
        .unwrap()
        .coin()
        .unwrap()
        .account(0)
        .unwrap();
    assert_eq!(account.bip32().net_versions(), &KeyNetVersions::KHOLAW);

    let public_account = Bip44::new(account.bip32().to_public(), CoinConf::CARDANO_BYRON_LEDGER).unwrap();
    let from_public = public_account.change(Bip44Change::Internal).unwrap().address_index(1).unwrap();
    let from_private = account.change(Bip44Change::Internal).unwrap().address_index(1).unwrap();
    assert!(!from_public.bip32().index().is_hardened());
    assert_eq!(from_public.bip32().public_key(), from_private.bip32().public_key());
}

#[test]
fn construction_checks() {
    let master = Bip32::<Secp256k1>::from_seed(SEED, None).unwrap();
    assert_eq!(
        Bip44::new(master.to_public(), CoinConf::BITCOIN_MAIN_NET).unwrap_err(),
        Error::InvalidDepth { depth: 0, public_only: true }
    );
    assert_eq!(
        Bip44::new(master.clone(), CoinConf::SOLANA).unwrap_err(),
        Error::CurveMismatch { coin: CurveType::Ed25519Slip10, node: CurveType::Secp256k1 }
    );

    let too_deep = master.derive_path("m/44'/0'/0'/0/0/0").unwrap();
    assert_eq!(Bip44::new(too_deep, CoinConf::BITCOIN_MAIN_NET).unwrap_err(), Error::InvalidDepth { depth: 6, public_only: false });

    let xpub = master.derive_path("m/44'/0'/0'").unwrap().public_key().to_string();
    let account = Bip44::<Secp256k1>::from_extended_key(&xpub, CoinConf::BITCOIN_MAIN_NET).unwrap();
    assert!(account.is_level(Bip44Level::Account));
    assert!(account.bip32().is_public_only());
}

#[test]
fn private_key_wif() {
    let master = Bip44::<Secp256k1>::from_seed(SEED, CoinConf::BITCOIN_MAIN_NET).unwrap();
    let wif = master.private_key_wif().unwrap();
    let decoded = keyforge_bip44::wif::decode(&wif, 0x80).unwrap();
    assert!(decoded.compressed);
    assert_eq!(*decoded.key, hex!("e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"));

    let eth = Bip44::<Secp256k1>::from_seed(SEED, CoinConf::ETHEREUM).unwrap();
    assert_eq!(eth.private_key_wif().unwrap_err(), Error::WifUnsupported("Ethereum".into()));
}

#[test]
fn coin_profile_from_json() {
    let json = r#"{
        "name": "Bitcoin Regtest",
        "abbreviation": "BTC",
        "coinIndex": 1,
        "isTestnet": true,
        "defaultPath": "0'/0/0",
        "keyNetVersions": { "public": "043587cf", "private": "04358394" },
        "wifNetVersion": 239,
        "curve": "secp256k1"
    }"#;
    let coin: CoinConf = serde_json::from_str(json).unwrap();
    assert_eq!(coin.key_net_versions, KeyNetVersions::TEST_NET);

    let address = Bip44::<Secp256k1>::from_seed(SEED, coin).unwrap().derive_default_path(PURPOSE_BIP44).unwrap();
    assert!(address.bip32().public_key().to_string().starts_with("tpub"));

    let round_trip: CoinConf = serde_json::from_str(&serde_json::to_string(&CoinConf::DOGECOIN_MAIN_NET).unwrap()).unwrap();
    assert_eq!(round_trip, CoinConf::DOGECOIN_MAIN_NET);
}

#[test]
fn litecoin_alternative_versions() {
    let ltc = CoinConf::LITECOIN_MAIN_NET.with_alt_key_net_versions().unwrap();
    let account = Bip44::<Secp256k1>::from_seed(SEED, ltc).unwrap().purpose(PURPOSE_BIP44).unwrap().coin().unwrap().account(0).unwrap();
    assert!(account.bip32().private_key().unwrap().to_string().starts_with("Ltpv"));
    assert!(account.bip32().public_key().to_string().starts_with("Ltub"));

    let standard = Bip44::<Secp256k1>::from_seed(SEED, CoinConf::LITECOIN_MAIN_NET).unwrap().purpose(PURPOSE_BIP44).unwrap().coin().unwrap().account(0).unwrap();
    assert!(standard.bip32().public_key().to_string().starts_with("xpub"));
    assert_eq!(standard.bip32().public_key().public_key(), account.bip32().public_key().public_key());
}

#[test]
fn neo_default_path() {
    let address = Bip44::<Nist256p1>::from_seed(SEED, CoinConf::NEO_N3).unwrap().derive_default_path(PURPOSE_BIP44).unwrap();
    assert_eq!(address.level(), Bip44Level::AddressIndex);

    let expected = Bip32::<Nist256p1>::from_seed_and_path(SEED, "m/44'/888'/0'/0/0", None).unwrap();
    assert_eq!(address.bip32().public_key(), expected.public_key());
    assert!(address.private_key_wif().is_ok());

    let ontology = Bip44::<Nist256p1>::from_seed(SEED, CoinConf::ONTOLOGY).unwrap();
    assert_eq!(ontology.private_key_wif().unwrap_err(), Error::WifUnsupported("Ontology".into()));
    assert_eq!(
        Bip44::<Secp256k1>::from_seed(SEED, CoinConf::NEO_LEGACY).unwrap_err(),
        Error::CurveMismatch { coin: CurveType::Nist256p1, node: CurveType::Secp256k1 }
    );
}

#[test]
fn nano_default_path() {
    let nano = Bip44::<Ed25519Blake2b>::from_seed(SEED, CoinConf::NANO).unwrap().derive_default_path(PURPOSE_BIP44).unwrap();
    assert_eq!(nano.level(), Bip44Level::Account);

    let expected = Bip32::<Ed25519Blake2b>::from_seed_and_path(SEED, "m/44'/165'/0'", None).unwrap();
    assert_eq!(nano.bip32().public_key(), expected.public_key());
    assert!(matches!(nano.private_key_wif(), Err(Error::WifUnsupported(_))));
}
