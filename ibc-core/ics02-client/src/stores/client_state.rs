use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::proto::ClientState as RawClientState;
use ibc_core_client_types::{ClientState, Height};
use ibc_core_host::store::{ProtobufStore, Store, TypedStore};
use ibc_core_host::types::identifiers::ClientId;
use ibc_core_host::types::path::{ClientStatePath, Path, CLIENT_STATE};
use tracing::trace;

/// Result of [`ClientStateStore::freeze`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FreezeOutcome {
    /// The client was active and is now frozen.
    Frozen(ClientState),
    /// The client was already frozen at the contained height; nothing changed.
    AlreadyFrozen(Height),
}

/// Stores one [`ClientState`] per client under `clients/{client_id}/clientState`.
#[derive(Clone, Debug, Default)]
pub struct ClientStateStore {
    store: ProtobufStore<ClientStatePath, ClientState, RawClientState>,
}

impl ClientStateStore {
    pub const fn new() -> Self {
        Self {
            store: TypedStore::new(),
        }
    }

    pub fn get<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
    ) -> Result<Option<ClientState>, ClientError> {
        trace!(%client_id, "reading client state");
        Ok(self
            .store
            .get(store, &ClientStatePath::new(client_id.clone()))?)
    }

    /// Overwrites the client state; no validation happens here.
    pub fn set<S: Store>(&self, store: &mut S, client_state: &ClientState) -> Result<(), ClientError> {
        trace!(client_id = %client_state.client_id, "writing client state");
        let path = ClientStatePath::new(client_state.client_id.clone());
        Ok(self.store.set(store, path, client_state)?)
    }

    /// Marks the client frozen at `height` unless it is frozen already.
    pub fn freeze<S: Store>(
        &self,
        store: &mut S,
        client_id: &ClientId,
        height: Height,
    ) -> Result<FreezeOutcome, ClientError> {
        let client_state = self
            .get(store, client_id)?
            .ok_or_else(|| ClientError::ClientNotFound {
                client_id: client_id.clone(),
            })?;

        if let Some(frozen_height) = client_state.frozen_height {
            return Ok(FreezeOutcome::AlreadyFrozen(frozen_height));
        }

        let frozen = client_state.with_frozen_height(height);
        self.set(store, &frozen)?;

        Ok(FreezeOutcome::Frozen(frozen))
    }

    /// Returns the identifiers of all stored clients in ascending order.
    pub fn client_ids<S: Store>(&self, store: &S) -> Result<Vec<ClientId>, ClientError> {
        let mut client_ids: Vec<ClientId> = self
            .store
            .get_keys_ending_with(store, &ClientStatePath::prefix(), &format!("/{CLIENT_STATE}"))?
            .into_iter()
            .filter_map(|path| match path {
                Path::ClientState(ClientStatePath(client_id)) => Some(client_id),
                _ => None,
            })
            .collect();
        client_ids.sort();

        Ok(client_ids)
    }
}
