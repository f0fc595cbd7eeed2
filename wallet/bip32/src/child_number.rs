//! Child numbers

use crate::{Error, Result};
use borsh::{BorshDeserialize, BorshSerialize};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Index of a particular child key for a given (extended) private key.
///
/// Bit 31 carries the hardened flag.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, BorshSerialize, BorshDeserialize)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Hardened child keys use indices 2^31 through 2^32-1.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Create new [`ChildNumber`] with the given index and hardened flag.
    ///
    /// Returns an error if the index is already out of the 31-bit range.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG != 0 {
            return Err(Error::ChildNumberRange(index, if hardened { "hardened" } else { "normal" }));
        }
        Ok(Self(if hardened { index | Self::HARDENED_FLAG } else { index }))
    }

    /// Hardened child number for `index`.
    pub fn hardened(index: u32) -> Result<Self> {
        Self::new(index, true)
    }

    /// Parse a child number from the byte encoding used by BIP32.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        u32::from_be_bytes(bytes).into()
    }

    /// Serialize this child number as big-endian bytes (BIP32 encoding).
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Serialize this child number as little-endian bytes, the encoding
    /// used in Khovratovich-Law HMAC inputs.
    pub fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Is this child number within the hardened range?
    pub fn is_hardened(&self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }

    /// Same index with the hardened flag set.
    pub fn harden(self) -> Self {
        Self(self.0 | Self::HARDENED_FLAG)
    }

    /// Same index with the hardened flag cleared.
    pub fn unharden(self) -> Self {
        Self(self.0 & !Self::HARDENED_FLAG)
    }

    /// Index without the hardened flag.
    pub fn index(&self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }

    /// Raw 32-bit value, hardened flag included.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            f.write_str("'")?;
        }

        Ok(())
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(child: &str) -> Result<ChildNumber> {
        let element = child.trim();
        let (index, hardened) = match element.strip_suffix(['\'', 'h', 'p']) {
            Some(index) => (index, true),
            None => (element, false),
        };

        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::PathElement(child.to_string()));
        }

        let index = index.parse::<u32>().map_err(|_| Error::PathElement(child.to_string()))?;
        ChildNumber::new(index, hardened)
    }
}
