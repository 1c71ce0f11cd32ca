//! Protocol logic specific to processing messages of type `MsgUpdateClient`.

use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::events::UpdateClient;
use ibc_core_client_types::msgs::MsgUpdateClient;
use ibc_core_client_types::ClientState;
use ibc_core_host::store::Store;
use ibc_core_host::{ExecutionContext, ValidationContext};
use tracing::{debug, info, warn};

use super::atomically;
use crate::registry::ClientRegistry;
use crate::stores::SetOutcome;

/// What an accepted `MsgUpdateClient` does to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateAction {
    /// Identical records already exist at the height; nothing to write.
    AlreadyRecorded,
    /// The height is above the latest one; the client advances.
    Advance(ClientState),
}

pub fn validate<S, Ctx>(
    registry: &ClientRegistry,
    store: &S,
    _ctx: &Ctx,
    msg: &MsgUpdateClient,
) -> Result<UpdateAction, ClientError>
where
    S: Store,
    Ctx: ValidationContext,
{
    msg.validate_basic()?;

    let client_id = &msg.client_id;
    let client_state = registry.client_state(store, client_id)?;

    if let Some(frozen_height) = client_state.frozen_height {
        return Err(ClientError::ClientFrozen {
            client_id: client_id.clone(),
            frozen_height,
        });
    }

    if msg.height > client_state.latest_height {
        return Ok(UpdateAction::Advance(client_state));
    }

    let consensus_state = registry
        .consensus_states
        .get(store, client_id, msg.height)?;
    let committer = registry.committers.get(store, client_id, msg.height)?;

    let identical = consensus_state.as_ref() == Some(&msg.consensus_state)
        && committer.as_ref() == Some(&msg.committer);

    if identical {
        debug!(%client_id, height = %msg.height, "update already recorded");
        return Ok(UpdateAction::AlreadyRecorded);
    }

    if msg.height == client_state.latest_height {
        warn!(%client_id, height = %msg.height, "conflicting update for latest height");
        return Err(ClientError::ConflictingUpdate {
            client_id: client_id.clone(),
            height: msg.height,
        });
    }

    // Below the latest height any difference is a height violation.
    Err(ClientError::InvalidHeight {
        client_id: client_id.clone(),
        height: msg.height,
        latest_height: client_state.latest_height,
    })
}

pub fn execute<S, Ctx>(
    registry: &ClientRegistry,
    store: &mut S,
    ctx: &mut Ctx,
    msg: MsgUpdateClient,
    action: UpdateAction,
) -> Result<(), ClientError>
where
    S: Store,
    Ctx: ExecutionContext,
{
    let client_state = match action {
        UpdateAction::AlreadyRecorded => return Ok(()),
        UpdateAction::Advance(client_state) => client_state,
    };

    let MsgUpdateClient {
        client_id,
        height,
        consensus_state,
        committer,
    } = msg;

    atomically(store, |tx| {
        let outcomes = [
            registry
                .consensus_states
                .set(tx, &client_id, height, &consensus_state)?,
            registry.committers.set(tx, &client_id, height, &committer)?,
        ];
        // Records above the latest height can only be leftovers of a corrupted
        // store; refuse to build on them.
        if outcomes.contains(&SetOutcome::Conflicting) {
            return Err(ClientError::ConflictingUpdate {
                client_id: client_id.clone(),
                height,
            });
        }
        registry
            .client_states
            .set(tx, &client_state.with_latest_height(height))
    })?;

    info!(%client_id, %height, "updated client");

    ctx.emit_event(UpdateClient::new(client_id.clone(), height).into());
    ctx.log_message(format!("success: updated client {client_id} to height {height}"));

    Ok(())
}
