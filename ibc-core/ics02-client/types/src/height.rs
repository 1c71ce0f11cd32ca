//! Defines the core `Height` type used throughout the registry

use core::fmt::{Display, Error as FmtError, Formatter};
use core::num::ParseIntError;
use core::str::FromStr;

use displaydoc::Display as DisplayDoc;

use crate::error::ClientError;

/// The height of the counterparty chain a record was taken at, i.e. the
/// number of blocks since genesis. Heights are never zero.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(u64);

impl Height {
    pub fn new(height: u64) -> Result<Self, ClientError> {
        if height == 0 {
            return Err(ClientError::ZeroHeight);
        }

        Ok(Self(height))
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn add(&self, delta: u64) -> Height {
        Height(self.0.saturating_add(delta))
    }

    pub fn increment(&self) -> Height {
        self.add(1)
    }

    pub fn sub(&self, delta: u64) -> Result<Height, ClientError> {
        if self.0 <= delta {
            return Err(ClientError::ZeroHeight);
        }

        Ok(Height(self.0 - delta))
    }

    pub fn decrement(&self) -> Result<Height, ClientError> {
        self.sub(1)
    }
}

impl TryFrom<u64> for Height {
    type Error = ClientError;

    fn try_from(height: u64) -> Result<Self, Self::Error> {
        Self::new(height)
    }
}

impl From<Height> for u64 {
    fn from(height: Height) -> Self {
        height.0
    }
}

impl Display for Height {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, DisplayDoc)]
pub enum HeightError {
    /// cannot convert into a `Height` type from string `{height}`: `{error}`
    InvalidFormat {
        height: String,
        error: ParseIntError,
    },
    /// height cannot be zero
    Zero,
}

#[cfg(feature = "std")]
impl std::error::Error for HeightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidFormat { error: e, .. } => Some(e),
            Self::Zero => None,
        }
    }
}

impl FromStr for Height {
    type Err = HeightError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let height = u64::from_str(value).map_err(|error| HeightError::InvalidFormat {
            height: value.to_owned(),
            error,
        })?;

        Height::new(height).map_err(|_| HeightError::Zero)
    }
}
