//! Defines the messages that mutate a client in the registry.

use ibc_core_host_types::identifiers::ClientId;

mod create_client;
mod freeze_client;
mod update_client;

pub use create_client::*;
pub use freeze_client::*;
pub use update_client::*;

/// Encodes all the different client messages
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum ClientMsg {
    CreateClient(MsgCreateClient),
    UpdateClient(MsgUpdateClient),
    FreezeClient(MsgFreezeClient),
}

impl ClientMsg {
    pub fn client_id(&self) -> &ClientId {
        match self {
            ClientMsg::CreateClient(msg) => &msg.client_id,
            ClientMsg::UpdateClient(msg) => &msg.client_id,
            ClientMsg::FreezeClient(msg) => &msg.client_id,
        }
    }
}
