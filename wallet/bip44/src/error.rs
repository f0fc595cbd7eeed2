use crate::Bip44Level;
use keyforge_bip32::{CurveType, Depth};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Bip32(#[from] keyforge_bip32::Error),

    #[error("derivation requires level {expected}, current level is {actual}")]
    Depth { expected: Bip44Level, actual: Bip44Level },

    #[error("depth {depth} is not allowed for a {} BIP44 node", node_kind(.public_only))]
    InvalidDepth { depth: Depth, public_only: bool },

    #[error("coin uses {coin} but the node is {node}")]
    CurveMismatch { coin: CurveType, node: CurveType },

    #[error("WIF encoding is not available for {0}")]
    WifUnsupported(String),

    #[error("invalid WIF: {0}")]
    Wif(String),

    #[error("WIF checksum mismatch")]
    WifChecksum,
}

impl From<bs58::decode::Error> for Error {
    fn from(err: bs58::decode::Error) -> Error {
        match err {
            bs58::decode::Error::InvalidChecksum { .. } => Error::WifChecksum,
            err => Error::Wif(err.to_string()),
        }
    }
}

fn node_kind(public_only: &bool) -> &'static str {
    if *public_only {
        "public-only"
    } else {
        "private"
    }
}
