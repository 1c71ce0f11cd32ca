//! The keeper-level facade of the light-client registry.

use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::msgs::{ClientMsg, MsgCreateClient, MsgFreezeClient, MsgUpdateClient};
use ibc_core_client_types::{ClientState, Committer, ConsensusState, Height, Status, VerifiedRoot};
use ibc_core_host::store::Store;
use ibc_core_host::types::identifiers::ClientId;
use ibc_core_host::ExecutionContext;

use crate::config::RegistryConfig;
use crate::handler::{create_client, freeze_client, prune_consensus_states, update_client};
use crate::stores::{ClientStateStore, CommitterStore, ConsensusStateStore, VerifiedRootIndex};

/// Composes the per-client stores and routes writes and reads through them.
///
/// The registry only holds configuration. The store and the host context are
/// passed to every call: writes take `&mut S` and run one at a time, reads
/// take `&S` and may run concurrently on a consistent snapshot.
#[derive(Clone, Debug, Default)]
pub struct ClientRegistry {
    pub(crate) config: RegistryConfig,
    pub(crate) client_states: ClientStateStore,
    pub(crate) consensus_states: ConsensusStateStore,
    pub(crate) committers: CommitterStore,
    pub(crate) verified_roots: VerifiedRootIndex,
}

impl ClientRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            client_states: ClientStateStore::new(),
            consensus_states: ConsensusStateStore::new(),
            committers: CommitterStore::new(),
            verified_roots: VerifiedRootIndex::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Routes any client message to its handler.
    pub fn dispatch<S, Ctx>(&self, store: &mut S, ctx: &mut Ctx, msg: ClientMsg) -> Result<(), ClientError>
    where
        S: Store,
        Ctx: ExecutionContext,
    {
        match msg {
            ClientMsg::CreateClient(msg) => self.create_client(store, ctx, msg),
            ClientMsg::UpdateClient(msg) => self.update_client(store, ctx, msg),
            ClientMsg::FreezeClient(msg) => self.freeze_client(store, ctx, msg),
        }
    }

    /// Registers a new client together with its initial consensus state and
    /// committer. Fails with `AlreadyExists` if the identifier is taken.
    pub fn create_client<S, Ctx>(
        &self,
        store: &mut S,
        ctx: &mut Ctx,
        msg: MsgCreateClient,
    ) -> Result<(), ClientError>
    where
        S: Store,
        Ctx: ExecutionContext,
    {
        create_client::validate(self, store, ctx, &msg)?;
        create_client::execute(self, store, ctx, msg)
    }

    /// Records a consensus state and committer for a client.
    ///
    /// Re-submitting records identical to the stored ones at a height at or
    /// below the latest height succeeds without writing. Different records at
    /// the latest height fail with `ConflictingUpdate`, which does not freeze
    /// the client by itself; below it they fail with `InvalidHeight`.
    pub fn update_client<S, Ctx>(
        &self,
        store: &mut S,
        ctx: &mut Ctx,
        msg: MsgUpdateClient,
    ) -> Result<(), ClientError>
    where
        S: Store,
        Ctx: ExecutionContext,
    {
        let action = update_client::validate(self, store, ctx, &msg)?;
        update_client::execute(self, store, ctx, msg, action)
    }

    /// Freezes a client. Freezing a frozen client keeps the original frozen
    /// height and emits nothing.
    pub fn freeze_client<S, Ctx>(
        &self,
        store: &mut S,
        ctx: &mut Ctx,
        msg: MsgFreezeClient,
    ) -> Result<(), ClientError>
    where
        S: Store,
        Ctx: ExecutionContext,
    {
        freeze_client::validate(self, store, ctx, &msg)?;
        freeze_client::execute(self, store, ctx, msg)
    }

    /// Removes consensus states (and their committers) whose trusting period
    /// has elapsed at the host's current time. Returns the removed heights.
    pub fn prune_expired_consensus_states<S, Ctx>(
        &self,
        store: &mut S,
        ctx: &mut Ctx,
        client_id: &ClientId,
    ) -> Result<Vec<Height>, ClientError>
    where
        S: Store,
        Ctx: ExecutionContext,
    {
        prune_consensus_states::execute(self, store, ctx, client_id)
    }

    pub fn client_state<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
    ) -> Result<ClientState, ClientError> {
        self.client_states
            .get(store, client_id)?
            .ok_or_else(|| ClientError::ClientNotFound {
                client_id: client_id.clone(),
            })
    }

    pub fn client_status<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
    ) -> Result<Status, ClientError> {
        Ok(self.client_state(store, client_id)?.status())
    }

    /// Returns the states of all clients, ordered by client identifier.
    pub fn client_states<S: Store>(&self, store: &S) -> Result<Vec<ClientState>, ClientError> {
        self.client_states
            .client_ids(store)?
            .iter()
            .map(|client_id| self.client_state(store, client_id))
            .collect()
    }

    pub fn consensus_state<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
        height: Height,
    ) -> Result<ConsensusState, ClientError> {
        self.client_state(store, client_id)?;

        self.consensus_states
            .get(store, client_id, height)?
            .ok_or_else(|| ClientError::ConsensusStateNotFound {
                client_id: client_id.clone(),
                height,
            })
    }

    /// Returns the consensus state at the client's latest height.
    pub fn latest_consensus_state<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
    ) -> Result<ConsensusState, ClientError> {
        let latest_height = self.client_state(store, client_id)?.latest_height;
        self.consensus_state(store, client_id, latest_height)
    }

    /// Returns the heights of all stored consensus states in ascending order.
    pub fn consensus_state_heights<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
    ) -> Result<Vec<Height>, ClientError> {
        self.client_state(store, client_id)?;
        self.consensus_states.heights(store, client_id)
    }

    pub fn verified_root<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
        height: Height,
    ) -> Result<VerifiedRoot, ClientError> {
        self.client_state(store, client_id)?;

        self.verified_roots
            .get_verified_root(store, client_id, height)?
            .ok_or_else(|| ClientError::RootNotFound {
                client_id: client_id.clone(),
                height,
            })
    }

    pub fn committer<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
        height: Height,
    ) -> Result<Committer, ClientError> {
        self.client_state(store, client_id)?;

        self.committers
            .get(store, client_id, height)?
            .ok_or_else(|| ClientError::CommitterNotFound {
                client_id: client_id.clone(),
                height,
            })
    }
}
