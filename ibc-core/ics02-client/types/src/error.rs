//! Defines the client error type

use displaydoc::Display;
use ibc_core_host_types::error::{
    CodecError, DecodingError, HostError, IdentifierError, StoreError,
};
use ibc_core_host_types::identifiers::ClientId;

use crate::height::Height;

/// Encodes all the possible client errors
#[derive(Debug, Display)]
pub enum ClientError {
    /// host error: `{0}`
    Host(HostError),
    /// codec error: `{0}`
    Codec(CodecError),
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// client `{client_id}` not found
    ClientNotFound { client_id: ClientId },
    /// consensus state not found for client `{client_id}` at height `{height}`
    ConsensusStateNotFound { client_id: ClientId, height: Height },
    /// verified root not found for client `{client_id}` at height `{height}`
    RootNotFound { client_id: ClientId, height: Height },
    /// committer not found for client `{client_id}` at height `{height}`
    CommitterNotFound { client_id: ClientId, height: Height },
    /// client `{client_id}` already exists
    AlreadyExists { client_id: ClientId },
    /// client `{client_id}` is frozen at height `{frozen_height}`
    ClientFrozen {
        client_id: ClientId,
        frozen_height: Height,
    },
    /// invalid height `{height}` for client `{client_id}`: nothing recorded there and latest height is `{latest_height}`
    InvalidHeight {
        client_id: ClientId,
        height: Height,
        latest_height: Height,
    },
    /// conflicting update for client `{client_id}` at height `{height}`
    ConflictingUpdate { client_id: ClientId, height: Height },
    /// invalid height; cannot be zero
    ZeroHeight,
    /// mismatched height; expected `{expected}`, actual `{actual}`
    MismatchedHeight { expected: Height, actual: Height },
    /// invalid trusting period: `{description}`
    InvalidTrustingPeriod { description: String },
    /// invalid status: `{0}`
    InvalidStatus(String),
    /// missing raw field `{field}`
    MissingRawField { field: &'static str },
    /// invalid raw field `{field}`: `{description}`
    InvalidRawField {
        field: &'static str,
        description: String,
    },
}

impl ClientError {
    /// Whether the error reports an absent record rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ClientNotFound { .. }
                | Self::ConsensusStateNotFound { .. }
                | Self::RootNotFound { .. }
                | Self::CommitterNotFound { .. }
        )
    }

    /// Whether the error is evidence of counterparty misbehaviour: two
    /// different records were submitted for the same height. Hosts may route
    /// such an update into freezing the client.
    pub fn is_misbehaviour(&self) -> bool {
        matches!(self, Self::ConflictingUpdate { .. })
    }
}

impl From<HostError> for ClientError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

impl From<CodecError> for ClientError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

impl From<DecodingError> for ClientError {
    fn from(e: DecodingError) -> Self {
        Self::Decoding(e)
    }
}

impl From<IdentifierError> for ClientError {
    fn from(e: IdentifierError) -> Self {
        Self::Decoding(DecodingError::Identifier(e))
    }
}

impl From<StoreError> for ClientError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Host(e) => Self::Host(e),
            StoreError::Codec(e) => Self::Codec(e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Host(e) => Some(e),
            Self::Codec(e) => Some(e),
            Self::Decoding(e) => Some(e),
            _ => None,
        }
    }
}
