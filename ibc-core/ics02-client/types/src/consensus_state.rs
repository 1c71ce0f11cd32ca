//! Defines the consensus state snapshot recorded per client and height.

use ibc_primitives::proto::{Protobuf, Timestamp as RawTimestamp};
use ibc_primitives::Timestamp;

use crate::commitment::{CommitmentRoot, ValidatorSetCommitment};
use crate::error::ClientError;
use crate::height::Height;
use crate::proto::ConsensusState as RawConsensusState;

/// The trusted facts of the counterparty chain at one height: the commitment
/// root proofs are checked against, the block time and a commitment to the
/// validator set expected to sign the next block.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusState {
    pub height: Height,
    pub root: CommitmentRoot,
    pub timestamp: Timestamp,
    pub next_validators_commitment: ValidatorSetCommitment,
}

impl ConsensusState {
    pub fn new(
        height: Height,
        root: CommitmentRoot,
        timestamp: Timestamp,
        next_validators_commitment: ValidatorSetCommitment,
    ) -> Self {
        Self {
            height,
            root,
            timestamp,
            next_validators_commitment,
        }
    }

    pub fn root(&self) -> &CommitmentRoot {
        &self.root
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl Protobuf<RawConsensusState> for ConsensusState {}

impl TryFrom<RawConsensusState> for ConsensusState {
    type Error = ClientError;

    fn try_from(raw: RawConsensusState) -> Result<Self, Self::Error> {
        let timestamp = raw
            .timestamp
            .ok_or(ClientError::MissingRawField { field: "timestamp" })?
            .try_into()
            .map_err(|e| ClientError::InvalidRawField {
                field: "timestamp",
                description: format!("{e}"),
            })?;

        Ok(Self {
            height: Height::new(raw.height)?,
            root: raw.root.into(),
            timestamp,
            next_validators_commitment: raw.next_validators_commitment.into(),
        })
    }
}

impl From<ConsensusState> for RawConsensusState {
    fn from(value: ConsensusState) -> Self {
        Self {
            height: value.height.value(),
            root: value.root.into_vec(),
            timestamp: Some(RawTimestamp::from(value.timestamp)),
            next_validators_commitment: value.next_validators_commitment.into_vec(),
        }
    }
}
