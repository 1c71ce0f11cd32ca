//! Removal of consensus states that fell out of their client's trusting
//! period.

use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::events::PruneConsensusStates;
use ibc_core_client_types::{ClientState, ConsensusState, Height};
use ibc_core_host::store::Store;
use ibc_core_host::types::identifiers::ClientId;
use ibc_core_host::ExecutionContext;
use ibc_primitives::Timestamp;
use tracing::{debug, info};

use super::atomically;
use crate::registry::ClientRegistry;

/// A consensus state expires once its trusting period has elapsed. One whose
/// expiry does not fit a `Timestamp` never expires.
fn is_expired(cs: &ConsensusState, client_state: &ClientState, now: Timestamp) -> bool {
    cs.timestamp
        .checked_add(client_state.trusting_period)
        .is_ok_and(|expiry| expiry <= now)
}

/// Collects the expired heights to remove: oldest first, stopping at the
/// first unexpired state, never the latest height, at most `limit` of them.
fn expired_heights<S: Store>(
    registry: &ClientRegistry,
    store: &S,
    client_state: &ClientState,
    now: Timestamp,
) -> Result<Vec<Height>, ClientError> {
    let client_id = &client_state.client_id;
    let mut expired = Vec::new();

    for height in registry.consensus_states.heights(store, client_id)? {
        if height >= client_state.latest_height || expired.len() >= registry.config.prune_limit {
            break;
        }
        let Some(cs) = registry.consensus_states.get(store, client_id, height)? else {
            break;
        };
        if !is_expired(&cs, client_state, now) {
            break;
        }
        expired.push(height);
    }

    Ok(expired)
}

pub fn execute<S, Ctx>(
    registry: &ClientRegistry,
    store: &mut S,
    ctx: &mut Ctx,
    client_id: &ClientId,
) -> Result<Vec<Height>, ClientError>
where
    S: Store,
    Ctx: ExecutionContext,
{
    let client_state = registry.client_state(store, client_id)?;

    if let Some(frozen_height) = client_state.frozen_height {
        return Err(ClientError::ClientFrozen {
            client_id: client_id.clone(),
            frozen_height,
        });
    }

    let now = ctx.host_timestamp()?;
    let expired = expired_heights(registry, store, &client_state, now)?;

    let Some(last) = expired.last() else {
        debug!(%client_id, "no expired consensus states");
        return Ok(expired);
    };
    let before = last.increment();

    let mut pruned = Vec::new();
    atomically(store, |tx| {
        pruned = registry.consensus_states.prune(tx, client_id, before)?;
        registry.committers.prune(tx, client_id, before)?;
        Ok(())
    })?;

    info!(%client_id, count = pruned.len(), "pruned expired consensus states");

    ctx.emit_event(PruneConsensusStates::new(client_id.clone(), pruned.clone()).into());
    ctx.log_message(format!(
        "success: pruned {} expired consensus states of client {client_id}",
        pruned.len()
    ));

    Ok(pruned)
}
