//! Protocol logic specific to processing messages of type `MsgCreateClient`.

use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::events::CreateClient;
use ibc_core_client_types::msgs::MsgCreateClient;
use ibc_core_client_types::{ClientState, Height};
use ibc_core_host::store::Store;
use ibc_core_host::{ExecutionContext, ValidationContext};
use tracing::{debug, info};

use super::atomically;
use crate::registry::ClientRegistry;
use crate::stores::SetOutcome;

pub fn validate<S, Ctx>(
    registry: &ClientRegistry,
    store: &S,
    _ctx: &Ctx,
    msg: &MsgCreateClient,
) -> Result<(), ClientError>
where
    S: Store,
    Ctx: ValidationContext,
{
    msg.validate_basic()?;

    let max_trusting_period = registry.config.max_trusting_period;
    if msg.trusting_period.is_zero() {
        return Err(ClientError::InvalidTrustingPeriod {
            description: "trusting period must be greater than zero".to_string(),
        });
    }
    if msg.trusting_period > max_trusting_period {
        return Err(ClientError::InvalidTrustingPeriod {
            description: format!(
                "{:?} exceeds the maximum of {max_trusting_period:?}",
                msg.trusting_period
            ),
        });
    }

    if registry
        .client_states
        .get(store, &msg.client_id)?
        .is_some()
    {
        return Err(ClientError::AlreadyExists {
            client_id: msg.client_id.clone(),
        });
    }

    Ok(())
}

pub fn execute<S, Ctx>(
    registry: &ClientRegistry,
    store: &mut S,
    ctx: &mut Ctx,
    msg: MsgCreateClient,
) -> Result<(), ClientError>
where
    S: Store,
    Ctx: ExecutionContext,
{
    let MsgCreateClient {
        client_id,
        chain_id,
        trusting_period,
        consensus_state,
        committer,
    } = msg;

    let height: Height = consensus_state.height;
    let client_state = ClientState::new(client_id.clone(), chain_id.clone(), height, trusting_period)?;

    atomically(store, |tx| {
        let outcomes = [
            registry
                .consensus_states
                .set(tx, &client_id, height, &consensus_state)?,
            registry.committers.set(tx, &client_id, height, &committer)?,
        ];
        // Leftover records of an unknown client must not be adopted.
        if outcomes.contains(&SetOutcome::Conflicting) {
            return Err(ClientError::AlreadyExists {
                client_id: client_id.clone(),
            });
        }
        registry.client_states.set(tx, &client_state)
    })?;

    debug!(%client_id, %chain_id, ?trusting_period, "stored initial client records");
    info!(%client_id, %height, "created client");

    ctx.emit_event(CreateClient::new(client_id.clone(), chain_id, height).into());
    ctx.log_message(format!("success: created client {client_id} at height {height}"));

    Ok(())
}
