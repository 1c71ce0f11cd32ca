//! Definition of domain type message `MsgUpdateClient`.

use ibc_core_host_types::identifiers::ClientId;

use crate::committer::Committer;
use crate::consensus_state::ConsensusState;
use crate::error::ClientError;
use crate::height::Height;

/// Records a verified consensus state and committer for a client at
/// `height`. A height above the client's latest height advances the client.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgUpdateClient {
    pub client_id: ClientId,
    pub height: Height,
    pub consensus_state: ConsensusState,
    pub committer: Committer,
}

impl MsgUpdateClient {
    pub fn new(
        client_id: ClientId,
        height: Height,
        consensus_state: ConsensusState,
        committer: Committer,
    ) -> Self {
        MsgUpdateClient {
            client_id,
            height,
            consensus_state,
            committer,
        }
    }

    /// Checks that both records were taken at the update height.
    pub fn validate_basic(&self) -> Result<(), ClientError> {
        for actual in [self.consensus_state.height, self.committer.height] {
            if actual != self.height {
                return Err(ClientError::MismatchedHeight {
                    expected: self.height,
                    actual,
                });
            }
        }

        Ok(())
    }
}
