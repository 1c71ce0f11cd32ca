//! Definition of domain type message `MsgCreateClient`.

use core::time::Duration;

use ibc_core_host_types::identifiers::{ChainId, ClientId};

use crate::committer::Committer;
use crate::consensus_state::ConsensusState;
use crate::error::ClientError;

/// Registers a new light client with its initial trusted consensus state and
/// committer, both taken at the same height.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgCreateClient {
    pub client_id: ClientId,
    pub chain_id: ChainId,
    pub trusting_period: Duration,
    pub consensus_state: ConsensusState,
    pub committer: Committer,
}

impl MsgCreateClient {
    pub fn new(
        client_id: ClientId,
        chain_id: ChainId,
        trusting_period: Duration,
        consensus_state: ConsensusState,
        committer: Committer,
    ) -> Self {
        MsgCreateClient {
            client_id,
            chain_id,
            trusting_period,
            consensus_state,
            committer,
        }
    }

    /// Checks that the committer was taken at the consensus state's height.
    pub fn validate_basic(&self) -> Result<(), ClientError> {
        if self.committer.height != self.consensus_state.height {
            return Err(ClientError::MismatchedHeight {
                expected: self.consensus_state.height,
                actual: self.committer.height,
            });
        }

        Ok(())
    }
}
