use core::str::FromStr;

use derive_more::Into;

use crate::error::IdentifierError;
use crate::validate::validate_chain_identifier;

/// Identifier of the counterparty chain a light client tracks.
///
/// Only the identifier alphabet and a length of 1 to 64 characters are
/// enforced. Revision-aware formats such as `{chain name}-{revision}` are
/// treated as opaque strings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Into, derive_more::Display)]
pub struct ChainId(String);

impl ChainId {
    /// ```
    /// use ibc_core_host_types::identifiers::ChainId;
    ///
    /// let id = ChainId::new("cosmoshub-4").unwrap();
    /// assert_eq!(id.as_str(), "cosmoshub-4");
    /// assert!(ChainId::new("").is_err());
    /// ```
    pub fn new(chain_id: &str) -> Result<Self, IdentifierError> {
        Self::from_str(chain_id)
    }

    /// Get a reference to the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChainId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_chain_identifier(s).map(|_| Self(s.to_string()))
    }
}

impl TryFrom<String> for ChainId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_chain_identifier(&value)?;
        Ok(Self(value))
    }
}

impl PartialEq<str> for ChainId {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}
