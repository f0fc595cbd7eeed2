//! Derivation paths

use crate::{ChildNumber, Depth, Error, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Prefix marking an absolute derivation path.
const PREFIX: &str = "m";

/// Derivation paths within a hierarchical keyspace.
///
/// A path starting with `m` is absolute and may only be applied to a master
/// key; any other path is relative to the node it is applied to.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DerivationPath {
    path: Vec<ChildNumber>,
    absolute: bool,
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<DerivationPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DerivationPathVisitor;
        impl<'de> de::Visitor<'de> for DerivationPathVisitor {
            type Value = DerivationPath;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string containing a derivation path such as `m/44'/0'/0'`")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                DerivationPath::from_str(value).map_err(|err| de::Error::custom(err.to_string()))
            }
        }

        deserializer.deserialize_str(DerivationPathVisitor)
    }
}

impl Serialize for DerivationPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl DerivationPath {
    /// Empty absolute path (the master key itself).
    pub fn master() -> Self {
        DerivationPath { path: Vec::new(), absolute: true }
    }

    /// Relative path made of the given child numbers.
    pub fn relative<I: IntoIterator<Item = ChildNumber>>(elements: I) -> Self {
        DerivationPath { path: elements.into_iter().collect(), absolute: false }
    }

    /// Absolute paths start at the master key, so they can only be applied
    /// to a key at depth 0.
    pub fn check_origin(&self, depth: Depth) -> Result<()> {
        if self.absolute && depth != 0 {
            return Err(Error::AbsolutePathFromChild { depth });
        }
        Ok(())
    }

    /// Iterate over the [`ChildNumber`] values in this derivation path.
    pub fn iter(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.path.iter().cloned()
    }

    /// Is this derivation path empty? (i.e. the root)
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the count of [`ChildNumber`] values in this derivation path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Does this path start at the master key (`m/...`)?
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Get the parent [`DerivationPath`] for the current one.
    ///
    /// Returns `None` if this is already the root path.
    pub fn parent(&self) -> Option<Self> {
        self.path.len().checked_sub(1).map(|n| {
            let mut parent = self.clone();
            parent.path.truncate(n);
            parent
        })
    }

    /// Push a [`ChildNumber`] onto an existing derivation path.
    pub fn push(&mut self, child_number: ChildNumber) {
        self.path.push(child_number)
    }
}

impl AsRef<[ChildNumber]> for DerivationPath {
    fn as_ref(&self) -> &[ChildNumber] {
        &self.path
    }
}

impl Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.path.iter();

        if self.absolute {
            f.write_str(PREFIX)?;
        } else if let Some(first) = elements.next() {
            write!(f, "{}", first)?;
        }

        for child_number in elements {
            write!(f, "/{}", child_number)?;
        }

        Ok(())
    }
}

impl Extend<ChildNumber> for DerivationPath {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = ChildNumber>,
    {
        self.path.extend(iter);
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<DerivationPath> {
        let path = path.trim();
        let path = path.strip_suffix('/').unwrap_or(path);
        let mut elements = path.split('/').filter(|element| !element.trim().is_empty()).peekable();

        let absolute = elements.peek().map(|first| first.trim() == PREFIX).unwrap_or(false);
        if absolute {
            elements.next();
        }

        Ok(DerivationPath { path: elements.map(str::parse).collect::<Result<_>>()?, absolute })
    }
}

impl IntoIterator for DerivationPath {
    type Item = ChildNumber;
    type IntoIter = std::vec::IntoIter<ChildNumber>;

    fn into_iter(self) -> std::vec::IntoIter<ChildNumber> {
        self.path.into_iter()
    }
}

/// Anything that can be turned into a [`DerivationPath`]: path strings or
/// already parsed paths.
pub trait IntoDerivationPath {
    fn into_derivation_path(self) -> Result<DerivationPath>;
}

impl IntoDerivationPath for DerivationPath {
    fn into_derivation_path(self) -> Result<DerivationPath> {
        Ok(self)
    }
}

impl IntoDerivationPath for &DerivationPath {
    fn into_derivation_path(self) -> Result<DerivationPath> {
        Ok(self.clone())
    }
}

impl IntoDerivationPath for &str {
    fn into_derivation_path(self) -> Result<DerivationPath> {
        self.parse()
    }
}

impl IntoDerivationPath for String {
    fn into_derivation_path(self) -> Result<DerivationPath> {
        self.parse()
    }
}

impl IntoDerivationPath for &String {
    fn into_derivation_path(self) -> Result<DerivationPath> {
        self.parse()
    }
}
