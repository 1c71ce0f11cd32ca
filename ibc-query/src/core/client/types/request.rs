//! Contains the request types of the client queries. Requests arrive as JSON,
//! so identifiers and heights are validated while deserializing: a malformed
//! client identifier or a zero height never reaches the registry.

use ibc_core_client_types::Height;
use ibc_core_host_types::identifiers::ClientId;

/// Defines the request type for querying the state of a client.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryClientStateRequest {
    /// The client identifier.
    pub client_id: ClientId,
}

impl QueryClientStateRequest {
    pub fn new(client_id: ClientId) -> Self {
        Self { client_id }
    }
}

/// Defines the request type for querying the states of all clients.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryClientStatesRequest {}

/// Defines the request type for querying the consensus state of a client.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryConsensusStateRequest {
    /// The client identifier.
    pub client_id: ClientId,
    /// The consensus state height to be queried. If not provided, the latest
    /// height of the client is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
}

impl QueryConsensusStateRequest {
    pub fn new(client_id: ClientId, height: Option<Height>) -> Self {
        Self { client_id, height }
    }
}

/// Defines the request type for querying the heights of all consensus states
/// stored for a client.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryConsensusStateHeightsRequest {
    /// The client identifier.
    pub client_id: ClientId,
}

/// Defines the request type for querying the status of a client.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryClientStatusRequest {
    /// The client identifier.
    pub client_id: ClientId,
}

/// Defines the request type for querying a verified commitment root.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryVerifiedRootRequest {
    /// The client identifier.
    pub client_id: ClientId,
    /// The height the root was verified at.
    pub height: Height,
}

impl QueryVerifiedRootRequest {
    pub fn new(client_id: ClientId, height: Height) -> Self {
        Self { client_id, height }
    }
}

/// Defines the request type for querying the committer recorded at a height.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryCommitterRequest {
    /// The client identifier.
    pub client_id: ClientId,
    /// The height the committer was recorded at.
    pub height: Height,
}

impl QueryCommitterRequest {
    pub fn new(client_id: ClientId, height: Height) -> Self {
        Self { client_id, height }
    }
}
