use core::fmt::{Debug, Display, Formatter};
use core::str::FromStr;

use crate::error::ClientError;

/// Represents the status of a client
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Status {
    /// The client is active and accepts updates
    Active,
    /// The client is frozen; its records stay readable but no longer change
    Frozen,
}

impl Status {
    pub fn is_active(&self) -> bool {
        *self == Status::Active
    }

    pub fn is_frozen(&self) -> bool {
        *self == Status::Frozen
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Frozen => write!(f, "FROZEN"),
        }
    }
}

impl FromStr for Status {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Status::Active),
            "FROZEN" => Ok(Status::Frozen),
            _ => Err(ClientError::InvalidStatus(s.to_string())),
        }
    }
}
