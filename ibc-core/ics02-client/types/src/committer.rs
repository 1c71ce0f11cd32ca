use ibc_primitives::proto::Protobuf;

use crate::commitment::ValidatorSetCommitment;
use crate::error::ClientError;
use crate::height::Height;
use crate::proto::Committer as RawCommitter;

/// The validator set that committed the counterparty block at `height`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Committer {
    pub height: Height,
    pub validator_set_commitment: ValidatorSetCommitment,
}

impl Committer {
    pub fn new(height: Height, validator_set_commitment: ValidatorSetCommitment) -> Self {
        Self {
            height,
            validator_set_commitment,
        }
    }
}

impl Protobuf<RawCommitter> for Committer {}

impl TryFrom<RawCommitter> for Committer {
    type Error = ClientError;

    fn try_from(raw: RawCommitter) -> Result<Self, Self::Error> {
        Ok(Self {
            height: Height::new(raw.height)?,
            validator_set_commitment: raw.validator_set_commitment.into(),
        })
    }
}

impl From<Committer> for RawCommitter {
    fn from(value: Committer) -> Self {
        Self {
            height: value.height.value(),
            validator_set_commitment: value.validator_set_commitment.into_vec(),
        }
    }
}
