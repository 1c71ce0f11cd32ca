//! Definition of domain type message `MsgFreezeClient`.

use ibc_core_host_types::identifiers::ClientId;

use crate::height::Height;

/// Freezes a client after misbehaviour was detected at `misbehaviour_height`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgFreezeClient {
    pub client_id: ClientId,
    pub misbehaviour_height: Height,
}

impl MsgFreezeClient {
    pub fn new(client_id: ClientId, misbehaviour_height: Height) -> Self {
        MsgFreezeClient {
            client_id,
            misbehaviour_height,
        }
    }
}
