use crate::{ChainCode, ChildNumber, Depth, KeyFingerprint, MASTER_FINGERPRINT};
use borsh::{BorshDeserialize, BorshSerialize};

/// Key metadata carried by every extended key: its depth in the tree, the
/// fingerprint of its parent, the child number it was derived with and the
/// chain code used to derive its own children.
#[derive(Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize)]
pub struct ExtendedKeyAttrs {
    /// Depth in the key derivation hierarchy.
    pub depth: Depth,

    /// Parent fingerprint.
    pub parent_fingerprint: KeyFingerprint,

    /// Child number.
    pub child_number: ChildNumber,

    /// Chain code.
    pub chain_code: ChainCode,
}

impl ExtendedKeyAttrs {
    /// Metadata of a master key holding the given chain code.
    pub fn master(chain_code: ChainCode) -> Self {
        ExtendedKeyAttrs { chain_code, ..Default::default() }
    }

    /// A depth-0 key must have a zero parent fingerprint and child number.
    pub fn is_valid_master(&self) -> bool {
        self.depth != 0 || (self.parent_fingerprint == MASTER_FINGERPRINT && self.child_number.value() == 0)
    }
}
