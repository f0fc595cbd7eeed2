//!
//! Error types emitted by key derivation and extended key (de)serialization.
//!

use crate::{ChildNumber, CurveType, Depth};
use thiserror::Error;

/// [`Error`](enum@Error) variants emitted by the BIP32 engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid seed length {len} (expected at least {min} bytes)")]
    SeedLength { len: usize, min: usize },

    #[error("invalid derivation path element `{0}`")]
    PathElement(String),

    #[error("child number {0} is out of range for a {1} index")]
    ChildNumberRange(u32, &'static str),

    #[error("invalid key net version length {0} (expected 4 bytes)")]
    NetVersionLength(usize),

    #[error("invalid {kind} key length {actual} (expected {expected})")]
    KeyLength { kind: &'static str, expected: usize, actual: usize },

    #[error("invalid {0} key")]
    InvalidKey(&'static str),

    #[error("extended key checksum mismatch")]
    Checksum,

    #[error("base58 decoding error: {0}")]
    Base58(String),

    #[error("invalid extended key length {actual} (expected one of {expected:?})")]
    DecodeLength { actual: usize, expected: &'static [usize] },

    #[error("extended key version {actual} matches neither public {public} nor private {private} net version")]
    NetVersionMismatch { actual: String, public: String, private: String },

    #[error("invalid secret key prefix 0x{0:02x} (expected 0x00)")]
    SecretKeyPrefix(u8),

    #[error("invalid master key: {0}")]
    InvalidMasterKey(&'static str),

    #[error("maximum derivation depth exceeded")]
    Depth,

    #[error("hardened child {0} cannot be derived from a public-only key")]
    HardenedFromPublicOnly(ChildNumber),

    #[error("public derivation cannot produce hardened child {0}")]
    HardenedPublicDerivation(ChildNumber),

    #[error("non-hardened private derivation (child {0}) is not supported by {1}")]
    NonHardenedPrivateDerivation(ChildNumber, CurveType),

    #[error("public derivation is not supported by {0}")]
    PublicDerivationUnsupported(CurveType),

    #[error("absolute paths can only be derived from a master key (current depth {depth})")]
    AbsolutePathFromChild { depth: Depth },

    #[error("private key is not available in a public-only key")]
    PublicOnly,

    #[error("derived child key {0} is invalid, skip to the next index")]
    InvalidChildKey(ChildNumber),

    #[error("derived child key {0} is a multiple of the curve order (unlucky index)")]
    UnluckyIndex(ChildNumber),

    #[error("invalid HMAC key length")]
    Hmac,

    #[error("Secp256k1 -> {0}")]
    Secp256k1(#[from] secp256k1::Error),
}

impl Error {
    /// True for errors that come from a Base58Check checksum mismatch, as opposed
    /// to a structurally malformed payload.
    pub fn is_checksum(&self) -> bool {
        matches!(self, Error::Checksum)
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(err: bs58::decode::Error) -> Error {
        match err {
            bs58::decode::Error::InvalidChecksum { .. } => Error::Checksum,
            err => Error::Base58(err.to_string()),
        }
    }
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(_: hmac::digest::InvalidLength) -> Error {
        Error::Hmac
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::InvalidKey("slice")
    }
}
