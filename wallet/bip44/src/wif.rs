//! Wallet Import Format for secp256k1 private keys.

use crate::{Error, Result};
use keyforge_bip32::{secp256k1::SecretKey, KEY_SIZE};
use zeroize::Zeroizing;

/// Suffix byte marking a key whose public key is used compressed.
const COMPRESSED_SUFFIX: u8 = 0x01;

/// Encode `key` as a compressed-public-key WIF string with the given version byte.
pub fn encode(key: &[u8], version: u8) -> Result<Zeroizing<String>> {
    if key.len() != KEY_SIZE {
        return Err(Error::Wif(format!("invalid private key length {}", key.len())));
    }

    let mut payload = Zeroizing::new(Vec::with_capacity(KEY_SIZE + 2));
    payload.push(version);
    payload.extend_from_slice(key);
    payload.push(COMPRESSED_SUFFIX);
    Ok(Zeroizing::new(bs58::encode(payload.as_slice()).with_check().into_string()))
}

/// Decoded WIF key.
pub struct WifKey {
    pub key: Zeroizing<[u8; KEY_SIZE]>,
    pub compressed: bool,
}

/// Decode a WIF string, checking its version byte against `version`.
pub fn decode(wif: &str, version: u8) -> Result<WifKey> {
    let data = Zeroizing::new(bs58::decode(wif).with_check(None).into_vec()?);

    let compressed = match data.len() {
        33 => false,
        34 if data[33] == COMPRESSED_SUFFIX => true,
        34 => return Err(Error::Wif(format!("invalid compressed flag 0x{:02x}", data[33]))),
        length => return Err(Error::Wif(format!("invalid payload length {length}"))),
    };

    if data[0] != version {
        return Err(Error::Wif(format!("invalid version 0x{:02x} (expected 0x{:02x})", data[0], version)));
    }

    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    key.copy_from_slice(&data[1..=KEY_SIZE]);
    SecretKey::from_slice(key.as_slice()).map_err(keyforge_bip32::Error::from)?;

    Ok(WifKey { key, compressed })
}
