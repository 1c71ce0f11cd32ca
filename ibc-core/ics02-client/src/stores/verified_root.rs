use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::{Height, VerifiedRoot};
use ibc_core_host::store::Store;
use ibc_core_host::types::identifiers::ClientId;

use super::ConsensusStateStore;

/// Per (client, height) view of the commitment root that passed verification.
///
/// Consensus states are only written after verification, so the index reads
/// straight through to the [`ConsensusStateStore`] instead of keeping a copy.
#[derive(Clone, Debug, Default)]
pub struct VerifiedRootIndex {
    consensus_states: ConsensusStateStore,
}

impl VerifiedRootIndex {
    pub const fn new() -> Self {
        Self {
            consensus_states: ConsensusStateStore::new(),
        }
    }

    pub fn get_verified_root<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
        height: Height,
    ) -> Result<Option<VerifiedRoot>, ClientError> {
        Ok(self
            .consensus_states
            .get(store, client_id, height)?
            .map(|cs| VerifiedRoot::from_consensus_state(&cs)))
    }
}
