//! Defines the mutable per-client record.

use core::str::FromStr;
use core::time::Duration;

use ibc_core_host_types::identifiers::{ChainId, ClientId};
use ibc_primitives::proto::Protobuf;
use ibc_primitives::{duration_from_proto, duration_to_proto};

use crate::error::ClientError;
use crate::height::Height;
use crate::proto::ClientState as RawClientState;
use crate::status::Status;

/// The registry's record of one light client.
///
/// `latest_height` only moves forward through accepted updates, and once
/// `frozen_height` is set the client never leaves the `Frozen` status.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientState {
    pub client_id: ClientId,
    pub chain_id: ChainId,
    pub latest_height: Height,
    pub frozen_height: Option<Height>,
    pub trusting_period: Duration,
}

impl ClientState {
    pub fn new(
        client_id: ClientId,
        chain_id: ChainId,
        latest_height: Height,
        trusting_period: Duration,
    ) -> Result<Self, ClientError> {
        let client_state = Self {
            client_id,
            chain_id,
            latest_height,
            frozen_height: None,
            trusting_period,
        };
        client_state.validate()?;
        Ok(client_state)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.trusting_period.is_zero() {
            return Err(ClientError::InvalidTrustingPeriod {
                description: "trusting period must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    pub fn latest_height(&self) -> Height {
        self.latest_height
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_height.is_some()
    }

    pub fn status(&self) -> Status {
        if self.is_frozen() {
            Status::Frozen
        } else {
            Status::Active
        }
    }

    /// Returns the client state frozen at `height`.
    pub fn with_frozen_height(self, height: Height) -> Self {
        Self {
            frozen_height: Some(height),
            ..self
        }
    }

    /// Returns the client state advanced to `height`.
    pub fn with_latest_height(self, height: Height) -> Self {
        Self {
            latest_height: height,
            ..self
        }
    }
}

impl Protobuf<RawClientState> for ClientState {}

impl TryFrom<RawClientState> for ClientState {
    type Error = ClientError;

    fn try_from(raw: RawClientState) -> Result<Self, Self::Error> {
        let client_id = ClientId::from_str(&raw.client_id)?;
        let chain_id = ChainId::from_str(&raw.chain_id)?;
        let latest_height = Height::new(raw.latest_height)?;
        let frozen_height = match raw.frozen_height {
            0 => None,
            h => Some(Height::new(h)?),
        };
        let trusting_period = raw
            .trusting_period
            .ok_or(ClientError::MissingRawField {
                field: "trusting_period",
            })
            .and_then(|d| {
                duration_from_proto(d).ok_or_else(|| ClientError::InvalidRawField {
                    field: "trusting_period",
                    description: "negative duration".to_string(),
                })
            })?;

        let client_state = Self {
            client_id,
            chain_id,
            latest_height,
            frozen_height,
            trusting_period,
        };
        client_state.validate()?;

        Ok(client_state)
    }
}

impl From<ClientState> for RawClientState {
    fn from(value: ClientState) -> Self {
        Self {
            client_id: value.client_id.into(),
            chain_id: value.chain_id.into(),
            latest_height: value.latest_height.value(),
            frozen_height: value.frozen_height.map_or(0, |h| h.value()),
            trusting_period: duration_to_proto(value.trusting_period),
        }
    }
}
