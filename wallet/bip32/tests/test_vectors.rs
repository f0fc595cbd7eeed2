use hex_literal::hex;
use keyforge_bip32::{
    Bip32, Bip32Ed25519Blake2b, Bip32Ed25519Slip10, Bip32KholawEd25519, Bip32Nist256p1, Bip32Secp256k1, ChildNumber, DerivationPath, Error,
    ExtendedKey, ExtendedKeyAttrs, KeyNetVersions, PrivateKey, PublicKey,
};

const SEED: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

struct Derivation {
    path: &'static str,
    chain_code: [u8; 32],
    secret_key: [u8; 32],
    public_key: [u8; 33],
}

/// BIP32 test vector 1 (secp256k1).
const SECP256K1_VECTOR_1: &[Derivation] = &[
    Derivation {
        path: "m",
        chain_code: hex!("873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"),
        secret_key: hex!("e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"),
        public_key: hex!("0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2"),
    },
    Derivation {
        path: "m/0'",
        chain_code: hex!("47fdacbd0f1097043b78c63c20c34ef4ed9a111d980047ad16282c7ae6236141"),
        secret_key: hex!("edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea"),
        public_key: hex!("035a784662a4a20a65bf6aab9ae98a6c068a81c52e4b032c0fb5400c706cfccc56"),
    },
    Derivation {
        path: "m/0'/1",
        chain_code: hex!("2a7857631386ba23dacac34180dd1983734e444fdbf774041578e9b6adb37c19"),
        secret_key: hex!("3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368"),
        public_key: hex!("03501e454bf00751f24b1b489aa925215d66af2234e3891c3b21a52bedb3cd711c"),
    },
    Derivation {
        path: "m/0'/1/2'",
        chain_code: hex!("04466b9cc8e161e966409ca52986c584f07e9dc81f735db683c3ff6ec7b1503f"),
        secret_key: hex!("cbce0d719ecf7431d88e6a89fa1483e02e35092af60c042b1df2ff59fa424dca"),
        public_key: hex!("0357bfe1e341d01c69fe5654309956cbea516822fba8a601743a012a7896ee8dc2"),
    },
    Derivation {
        path: "m/0'/1/2'/2",
        chain_code: hex!("cfb71883f01676f587d023cc53a35bc7f88f724b1f8c2892ac1275ac822a3edd"),
        secret_key: hex!("0f479245fb19a38a1954c5c7c0ebab2f9bdfd96a17563ef28a6a4b1a2a764ef4"),
        public_key: hex!("02e8445082a72f29b75ca48748a914df60622a609cacfce8ed0e35804560741d29"),
    },
    Derivation {
        path: "m/0'/1/2'/2/1000000000",
        chain_code: hex!("c783e67b921d2beb8f6b389cc646d7263b4145701dadd2161548a8b078e65e9e"),
        secret_key: hex!("471b76e389e528d6de6d816857e012c5455051cad6660850e58372a6c3e6e7c8"),
        public_key: hex!("022a471424da5e657499d1ff51cb43c47481a03b1e77f951fe64cec9f5a48f7011"),
    },
];

/// SLIP-10 test vector 1 (nist256p1).
const NIST256P1_VECTOR_1: &[Derivation] = &[
    Derivation {
        path: "m",
        chain_code: hex!("beeb672fe4621673f722f38529c07392fecaa61015c80c34f29ce8b41b3cb6ea"),
        secret_key: hex!("612091aaa12e22dd2abef664f8a01a82cae99ad7441b7ef8110424915c268bc2"),
        public_key: hex!("0266874dc6ade47b3ecd096745ca09bcd29638dd52c2c12117b11ed3e458cfa9e8"),
    },
    Derivation {
        path: "m/0'",
        chain_code: hex!("3460cea53e6a6bb5fb391eeef3237ffd8724bf0a40e94943c98b83825342ee11"),
        secret_key: hex!("6939694369114c67917a182c59ddb8cafc3004e63ca5d3b84403ba8613debc0c"),
        public_key: hex!("0384610f5ecffe8fda089363a41f56a5c7ffc1d81b59a612d0d649b2d22355590c"),
    },
    Derivation {
        path: "m/0'/1",
        chain_code: hex!("4187afff1aafa8445010097fb99d23aee9f599450c7bd140b6826ac22ba21d0c"),
        secret_key: hex!("284e9d38d07d21e4e281b645089a94f4cf5a5a81369acf151a1c3a57f18b2129"),
        public_key: hex!("03526c63f8d0b4bbbf9c80df553fe66742df4676b241dabefdef67733e070f6844"),
    },
    Derivation {
        path: "m/0'/1/2'",
        chain_code: hex!("98c7514f562e64e74170cc3cf304ee1ce54d6b6da4f880f313e8204c2a185318"),
        secret_key: hex!("694596e8a54f252c960eb771a3c41e7e32496d03b954aeb90f61635b8e092aa7"),
        public_key: hex!("0359cf160040778a4b14c5f4d7b76e327ccc8c4a6086dd9451b7482b5a4972dda0"),
    },
    Derivation {
        path: "m/0'/1/2'/2",
        chain_code: hex!("ba96f776a5c3907d7fd48bde5620ee374d4acfd540378476019eab70790c63a0"),
        secret_key: hex!("5996c37fd3dd2679039b23ed6f70b506c6b56b3cb5e424681fb0fa64caf82aaa"),
        public_key: hex!("029f871f4cb9e1c97f9f4de9ccd0d4a2f2a171110c61178f84430062230833ff20"),
    },
    Derivation {
        path: "m/0'/1/2'/2/1000000000",
        chain_code: hex!("b9b7b82d326bb9cb5b5b121066feea4eb93d5241103c9e7a18aad40f1dde8059"),
        secret_key: hex!("21c4f269ef0a5fd1badf47eeacebeeaa3de22eb8e5b0adcd0f27dd99d34d0119"),
        public_key: hex!("02216cd26d31147f72427a453c443ed2cde8a1e53c9cc44e5ddf739725413fe3f4"),
    },
];

/// SLIP-10 test vector 1 (ed25519).
const ED25519_VECTOR_1: &[Derivation] = &[
    Derivation {
        path: "m",
        chain_code: hex!("90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"),
        secret_key: hex!("2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"),
        public_key: hex!("00a4b2856bfec510abab89753fac1ac0e1112364e7d250545963f135f2a33188ed"),
    },
    Derivation {
        path: "m/0'",
        chain_code: hex!("8b59aa11380b624e81507a27fedda59fea6d0b779a778918a2fd3590e16e9c69"),
        secret_key: hex!("68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"),
        public_key: hex!("008c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c"),
    },
];

#[test]
fn secp256k1_test_vector_1() {
    for derivation in SECP256K1_VECTOR_1 {
        let node = Bip32Secp256k1::from_seed_and_path(SEED, derivation.path, None).unwrap();
        let private_key = node.private_key().unwrap();
        assert_eq!(node.chain_code(), &derivation.chain_code, "{}", derivation.path);
        assert_eq!(private_key.to_bytes().as_slice(), &derivation.secret_key, "{}", derivation.path);
        assert_eq!(node.public_key().to_bytes(), derivation.public_key, "{}", derivation.path);
    }
}

#[test]
fn ed25519_test_vector_1() {
    for derivation in ED25519_VECTOR_1 {
        let node = Bip32Ed25519Slip10::from_seed_and_path(SEED, derivation.path, None).unwrap();
        assert_eq!(node.chain_code(), &derivation.chain_code, "{}", derivation.path);
        assert_eq!(node.private_key().unwrap().to_bytes().as_slice(), &derivation.secret_key, "{}", derivation.path);
        assert_eq!(node.public_key().to_bytes(), derivation.public_key, "{}", derivation.path);
    }
}

#[test]
fn nist256p1_test_vector_1() {
    for derivation in NIST256P1_VECTOR_1 {
        let node = Bip32Nist256p1::from_seed_and_path(SEED, derivation.path, None).unwrap();
        assert_eq!(node.chain_code(), &derivation.chain_code, "{}", derivation.path);
        assert_eq!(node.private_key().unwrap().to_bytes().as_slice(), &derivation.secret_key, "{}", derivation.path);
        assert_eq!(node.public_key().to_bytes(), derivation.public_key, "{}", derivation.path);
    }

    // the non-hardened tail can be derived from the public key alone
    let account = Bip32Nist256p1::from_seed_and_path(SEED, "m/0'/1/2'", None).unwrap();
    let leaf = account.to_public().derive_path("2/1000000000").unwrap();
    assert_eq!(leaf.public_key().to_bytes(), NIST256P1_VECTOR_1[5].public_key);

    let xprv = account.private_key().unwrap().to_string();
    let decoded = Bip32Nist256p1::from_extended_key(&xprv, None).unwrap();
    assert_eq!(decoded.private_key().unwrap(), account.private_key().unwrap());
}

#[test]
fn ed25519_blake2b_shares_slip10_secrets() {
    for derivation in ED25519_VECTOR_1 {
        let node = Bip32Ed25519Blake2b::from_seed_and_path(SEED, derivation.path, None).unwrap();
        assert_eq!(node.chain_code(), &derivation.chain_code, "{}", derivation.path);
        assert_eq!(node.private_key().unwrap().to_bytes().as_slice(), &derivation.secret_key, "{}", derivation.path);
        assert_ne!(node.public_key().to_bytes(), derivation.public_key, "{}", derivation.path);
    }
    assert!(matches!(
        Bip32Ed25519Blake2b::from_seed(SEED, None).unwrap().child_key(0u32),
        Err(Error::NonHardenedPrivateDerivation(..))
    ));
}

#[test]
fn secp256k1_extended_keys() {
    let master = Bip32Secp256k1::from_seed(SEED, None).unwrap();
    assert_eq!(
        master.private_key().unwrap().to_string().as_str(),
        "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
    );
    assert_eq!(
        master.public_key().to_string(),
        "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8"
    );

    let child = master.child_key(ChildNumber(0).harden()).unwrap();
    assert_eq!(
        child.private_key().unwrap().to_string().as_str(),
        "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7"
    );
    assert_eq!(
        child.public_key().to_string(),
        "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw"
    );

    let grandchild = child.child_key(1u32).unwrap();
    assert_eq!(
        grandchild.private_key().unwrap().to_string().as_str(),
        "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs"
    );
    assert_eq!(
        grandchild.public_key().to_string(),
        "xpub6ASuArnXKPbfEwhqN6e3mwBcDTgzisQN1wXN9BJcM47sSikHjJf3UFHKkNAWbWMiGj7Wf5uMash7SyYq527Hqck2AxYysAA7xmALppuCkwQ"
    );
}

#[test]
fn extended_key_round_trip() {
    let node = Bip32Secp256k1::from_seed_and_path(SEED, "m/0'/1/2'", None).unwrap();

    let xprv = node.private_key().unwrap().to_string();
    let decoded = Bip32Secp256k1::from_extended_key(&xprv, None).unwrap();
    assert_eq!(decoded.private_key().unwrap(), node.private_key().unwrap());
    assert_eq!(decoded.attrs(), node.attrs());

    let xpub = node.public_key().to_string();
    let decoded = Bip32Secp256k1::from_extended_key(&xpub, None).unwrap();
    assert!(decoded.is_public_only());
    assert_eq!(decoded.public_key(), node.public_key());
}

#[test]
fn test_net_versions() {
    let node = Bip32Secp256k1::from_seed(SEED, Some(KeyNetVersions::TEST_NET)).unwrap();
    let tprv = node.private_key().unwrap().to_string();
    let tpub = node.public_key().to_string();
    assert!(tprv.starts_with("tprv"));
    assert!(tpub.starts_with("tpub"));

    assert!(matches!(Bip32Secp256k1::from_extended_key(&tpub, None), Err(Error::NetVersionMismatch { .. })));
    assert_eq!(Bip32Secp256k1::from_extended_key(&tpub, Some(KeyNetVersions::TEST_NET)).unwrap().public_key(), node.public_key());
}

#[test]
fn kholaw_round_trip_and_neutering() {
    let seed = hex!("5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1");
    let account = Bip32KholawEd25519::from_seed_and_path(seed, "m/1852'/1815'/0'", None).unwrap();

    let xprv = account.private_key().unwrap().to_string();
    assert_eq!(ExtendedKey::decode(&xprv, &KeyNetVersions::KHOLAW).unwrap().to_bytes().len(), 110);
    let decoded = Bip32KholawEd25519::from_extended_key(&xprv, None).unwrap();
    assert_eq!(decoded.private_key().unwrap(), account.private_key().unwrap());

    // private and public derivation agree on non-hardened paths
    let private_leaf = account.derive_path("0/5").unwrap();
    let public_leaf = account.to_public().derive_path("0/5").unwrap();
    assert_eq!(private_leaf.public_key(), public_leaf.public_key());
    assert_eq!(public_leaf.depth(), 5);
}

/// Khovratovich-Law (V2) extended key `kL || kR || chain code` and its
/// hardened child 0, as published with the Byron Cardano wallet.
const KHOLAW_D1: [u8; 96] = hex!(
    "f8a29231ee38d6c5bf715d5bac21c750577aa3798b22d79d65bf97d6fadea15adcd1ee1abdf78bd4be64731a12deb94d"
    "3671784112eb6f364b871851fd1c9a247384db9ad6003bbd08b3b1ddc0d07a597293ff85e961bf252b331262eddfad0d"
);
const KHOLAW_D1_H0: [u8; 96] = hex!(
    "60d399da83ef80d8d4f8d223239efdc2b8fef387e1b5219137ffb4e8fbdea15adc9366b7d003af37c11396de9a83734e"
    "30e05e851efa32745c9cd7b42712c890608763770eddf77248ab652984b21b849760d1da74a6f5bd633ce41adceef07a"
);

fn kholaw_node(extended: &[u8; 96]) -> Bip32KholawEd25519 {
    let attrs = ExtendedKeyAttrs::master(extended[64..].try_into().unwrap());
    Bip32KholawEd25519::from_private_key(&extended[..64], Some(attrs), None).unwrap()
}

#[test]
fn kholaw_known_answer() {
    let child = kholaw_node(&KHOLAW_D1).child_key(ChildNumber(0x8000_0000)).unwrap();
    assert_eq!(child.private_key().unwrap().to_bytes().as_slice(), &KHOLAW_D1_H0[..64]);
    assert_eq!(child.chain_code(), &KHOLAW_D1_H0[64..]);
}

#[test]
fn kholaw_soft_index_agreement() {
    let node = kholaw_node(&KHOLAW_D1);
    let index = ChildNumber(0x1000_0000);
    let private_child = node.child_key(index).unwrap();
    let public_child = node.to_public().child_key(index).unwrap();
    assert_eq!(private_child.public_key(), public_child.public_key());
    assert_eq!(private_child.chain_code(), public_child.chain_code());
}

#[test]
fn fingerprints_chain_together() {
    let path: DerivationPath = "m/44'/0'/0'/0/7".parse().unwrap();
    let mut node = Bip32Secp256k1::from_seed(SEED, None).unwrap();
    for index in path.iter() {
        let child = node.child_key(index).unwrap();
        assert_eq!(child.parent_fingerprint(), node.fingerprint());
        assert_eq!(child.depth(), node.depth() + 1);
        assert_eq!(child.index(), index);
        node = child;
    }
}

#[test]
fn deterministic_derivation() {
    let a = Bip32Secp256k1::from_seed_and_path([0x42u8; 64], "m/1/2/3", None).unwrap();
    let b = Bip32Secp256k1::from_seed_and_path([0x42u8; 64], "m/1/2/3", None).unwrap();
    assert_eq!(a.private_key().unwrap(), b.private_key().unwrap());
    assert_eq!(a.public_key().public_key().to_bytes(), b.public_key().public_key().to_bytes());
}

#[test]
fn invalid_inputs() {
    assert_eq!(Bip32Secp256k1::from_seed([0u8; 15], None).unwrap_err(), Error::SeedLength { len: 15, min: 16 });
    assert_eq!(Bip32Secp256k1::from_seed_and_path(SEED, "m/0/a", None).unwrap_err(), Error::PathElement("a".into()));

    let master = Bip32::<keyforge_bip32::Ed25519>::from_seed(SEED, None).unwrap();
    let raw = master.private_key().unwrap().private_key().to_bytes();
    assert_eq!(raw.len(), 32);
    let public = master.to_public();
    assert!(matches!(public.child_key(0u32), Err(Error::PublicDerivationUnsupported(_))));
}
