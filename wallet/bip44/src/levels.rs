use keyforge_bip32::Depth;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Levels of a BIP44 path `m / purpose' / coin_type' / account' / change / address_index`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bip44Level {
    Master = 0,
    Purpose,
    Coin,
    Account,
    Change,
    AddressIndex,
}

impl Bip44Level {
    pub fn from_depth(depth: Depth) -> Option<Self> {
        match depth {
            0 => Some(Self::Master),
            1 => Some(Self::Purpose),
            2 => Some(Self::Coin),
            3 => Some(Self::Account),
            4 => Some(Self::Change),
            5 => Some(Self::AddressIndex),
            _ => None,
        }
    }

    pub fn depth(&self) -> Depth {
        *self as Depth
    }
}

impl fmt::Display for Bip44Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Master => "master",
            Self::Purpose => "purpose",
            Self::Coin => "coin",
            Self::Account => "account",
            Self::Change => "change",
            Self::AddressIndex => "address index",
        })
    }
}

/// Change level: external chain for receiving addresses, internal chain for
/// change addresses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bip44Change {
    External = 0,
    Internal,
}

impl Bip44Change {
    pub fn index(&self) -> u32 {
        match self {
            Self::External => 0,
            Self::Internal => 1,
        }
    }
}

impl fmt::Display for Bip44Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::External => "External",
            Self::Internal => "Internal",
        })
    }
}
