//! Contains the response types of the client queries.

use ibc_core_client_types::{ClientState, Committer, ConsensusState, Height, Status, VerifiedRoot};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryClientStateResponse {
    pub client_state: ClientState,
}

/// Defines the response type for querying all client states, ordered by
/// client identifier.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryClientStatesResponse {
    pub client_states: Vec<ClientState>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryConsensusStateResponse {
    pub consensus_state: ConsensusState,
}

/// Defines the response type for querying the consensus state heights of a
/// client, in ascending order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryConsensusStateHeightsResponse {
    pub consensus_state_heights: Vec<Height>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryClientStatusResponse {
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryVerifiedRootResponse {
    pub root: VerifiedRoot,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryCommitterResponse {
    pub committer: Committer,
}
