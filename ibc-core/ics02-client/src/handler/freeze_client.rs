//! Protocol logic specific to processing messages of type `MsgFreezeClient`.

use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::events::ClientMisbehaviour;
use ibc_core_client_types::msgs::MsgFreezeClient;
use ibc_core_host::store::Store;
use ibc_core_host::{ExecutionContext, ValidationContext};
use tracing::{debug, info};

use crate::registry::ClientRegistry;
use crate::stores::FreezeOutcome;

pub fn validate<S, Ctx>(
    registry: &ClientRegistry,
    store: &S,
    _ctx: &Ctx,
    msg: &MsgFreezeClient,
) -> Result<(), ClientError>
where
    S: Store,
    Ctx: ValidationContext,
{
    registry.client_state(store, &msg.client_id)?;

    Ok(())
}

pub fn execute<S, Ctx>(
    registry: &ClientRegistry,
    store: &mut S,
    ctx: &mut Ctx,
    msg: MsgFreezeClient,
) -> Result<(), ClientError>
where
    S: Store,
    Ctx: ExecutionContext,
{
    let MsgFreezeClient {
        client_id,
        misbehaviour_height,
    } = msg;

    match registry
        .client_states
        .freeze(store, &client_id, misbehaviour_height)?
    {
        FreezeOutcome::Frozen(_) => {
            info!(%client_id, frozen_height = %misbehaviour_height, "froze client");

            ctx.emit_event(ClientMisbehaviour::new(client_id.clone(), misbehaviour_height).into());
            ctx.log_message(format!(
                "success: froze client {client_id} at height {misbehaviour_height}"
            ));
        }
        FreezeOutcome::AlreadyFrozen(frozen_height) => {
            debug!(%client_id, %frozen_height, "client already frozen");
        }
    }

    Ok(())
}
