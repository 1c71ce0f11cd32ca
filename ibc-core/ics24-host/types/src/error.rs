//! Foundational error types shared by the registry crates.

use core::str::Utf8Error;

use displaydoc::Display;
use ibc_primitives::proto::ProtoError;

/// Errors that originate from host implementations, most notably failures of
/// the underlying keyed store.
#[derive(Debug, Display)]
pub enum HostError {
    /// failed to store data: `{description}`
    FailedToStoreData { description: String },
    /// failed to retrieve data from store: `{description}`
    FailedToRetrieveFromStore { description: String },
    /// failed to delete data from store: `{description}`
    FailedToDeleteFromStore { description: String },
    /// missing data: `{description}`
    MissingData { description: String },
    /// other error: `{description}`
    Other { description: String },
}

impl HostError {
    pub fn failed_to_store<T: ToString>(description: T) -> Self {
        Self::FailedToStoreData {
            description: description.to_string(),
        }
    }

    pub fn failed_to_retrieve<T: ToString>(description: T) -> Self {
        Self::FailedToRetrieveFromStore {
            description: description.to_string(),
        }
    }

    pub fn failed_to_delete<T: ToString>(description: T) -> Self {
        Self::FailedToDeleteFromStore {
            description: description.to_string(),
        }
    }
}

/// Errors that arise when parsing identifiers.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Display)]
pub enum IdentifierError {
    /// identifier `{id}` has invalid length; must be between [`{min}`,`{max}`]
    InvalidLength { id: String, min: u64, max: u64 },
    /// identifier `{id}` can only contain alphanumeric characters or `.`, `_`, `+`, `-`, `#`, - `[`, `]`, `<`, `>`
    InvalidCharacter { id: String },
    /// identifier prefix `{prefix}` is invalid
    InvalidPrefix { prefix: String },
}

/// Errors raised while parsing a store key back into a typed path.
#[derive(Debug, Display)]
pub enum PathError {
    /// path `{path}` is not valid UTF-8: `{error}`
    MalformedPathString { path: String, error: Utf8Error },
    /// failed to parse path `{path}`
    ParseFailure { path: String },
    /// identifier error: `{0}`
    Identifier(IdentifierError),
}

/// Errors that occur while decoding externally supplied data, i.e. query
/// requests, into domain types.
#[derive(Debug, Display)]
pub enum DecodingError {
    /// identifier error: `{0}`
    Identifier(IdentifierError),
    /// protobuf decoding error: `{0}`
    Protobuf(ProtoError),
    /// invalid JSON data: `{description}`
    InvalidJson { description: String },
    /// invalid raw data: `{description}`
    InvalidRawData { description: String },
    /// missing raw data: `{description}`
    MissingRawData { description: String },
    /// unknown query path: `{0}`
    UnknownQueryPath(String),
}

impl DecodingError {
    pub fn invalid_raw_data<T: ToString>(description: T) -> Self {
        Self::InvalidRawData {
            description: description.to_string(),
        }
    }

    pub fn missing_raw_data<T: ToString>(description: T) -> Self {
        Self::MissingRawData {
            description: description.to_string(),
        }
    }
}

/// Errors of the codecs that turn stored or returned values into bytes and
/// back. These indicate corrupted state or a programming error and are not
/// recoverable for the call that hit them.
#[derive(Debug, Display)]
pub enum CodecError {
    /// failed to encode `{type_name}`: `{description}`
    Encode {
        type_name: &'static str,
        description: String,
    },
    /// failed to decode `{type_name}`: `{description}`
    Decode {
        type_name: &'static str,
        description: String,
    },
}

/// Errors surfaced by typed access to the keyed store.
#[derive(Debug, Display)]
pub enum StoreError {
    /// host error: `{0}`
    Host(HostError),
    /// codec error: `{0}`
    Codec(CodecError),
}

impl From<IdentifierError> for DecodingError {
    fn from(e: IdentifierError) -> Self {
        Self::Identifier(e)
    }
}

impl From<ProtoError> for DecodingError {
    fn from(e: ProtoError) -> Self {
        Self::Protobuf(e)
    }
}

impl From<IdentifierError> for PathError {
    fn from(e: IdentifierError) -> Self {
        Self::Identifier(e)
    }
}

impl From<HostError> for StoreError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

impl From<CodecError> for StoreError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HostError {}

#[cfg(feature = "std")]
impl std::error::Error for IdentifierError {}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

#[cfg(feature = "std")]
impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::MalformedPathString { error, .. } => Some(error),
            Self::Identifier(e) => Some(e),
            Self::ParseFailure { .. } => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Identifier(e) => Some(e),
            Self::Protobuf(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Host(e) => Some(e),
            Self::Codec(e) => Some(e),
        }
    }
}
