//!
//! Hierarchical deterministic key derivation (BIP32 / SLIP-10) over
//! secp256k1, NIST P-256 and Ed25519 (SLIP-10, Blake2b and Khovratovich-Law
//! flavors), with extended key (de)serialization.
//!

mod attrs;
mod child_number;
pub mod curves;
mod derivation_path;
mod error;
mod node;
mod private_key;
mod public_key;
mod result;
pub mod types;
mod version;
mod xkey;
mod xprivate_key;
mod xpublic_key;

pub use attrs::ExtendedKeyAttrs;
pub use child_number::ChildNumber;
pub use curves::{Curve, CurveType, Ed25519, Ed25519Blake2b, Ed25519Kholaw, Ed25519PublicKey, Nist256p1, Secp256k1};
pub use derivation_path::{DerivationPath, IntoDerivationPath};
pub use error::Error;
pub use node::{Bip32, KeySource};
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use result::Result;
pub use types::*;
pub use version::{KeyNetVersions, Version};
pub use xkey::ExtendedKey;
pub use xprivate_key::ExtendedPrivateKey;
pub use xpublic_key::ExtendedPublicKey;

pub use ::p256;
pub use ::secp256k1;

/// BIP32 node over secp256k1.
pub type Bip32Secp256k1 = Bip32<Secp256k1>;

/// SLIP-10 node over NIST P-256.
pub type Bip32Nist256p1 = Bip32<Nist256p1>;

/// SLIP-10 node over Ed25519.
pub type Bip32Ed25519Slip10 = Bip32<Ed25519>;

/// SLIP-10 node over Ed25519 with Blake2b-512 public keys.
pub type Bip32Ed25519Blake2b = Bip32<Ed25519Blake2b>;

/// Khovratovich-Law node over Ed25519.
pub type Bip32KholawEd25519 = Bip32<Ed25519Kholaw>;
