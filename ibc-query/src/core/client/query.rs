//! Provides utility functions for querying light clients.

use ibc_core_client::ClientRegistry;
use ibc_core_host::store::Store;

use super::types::*;
use crate::error::QueryError;

/// Queries for the client state of a given client id.
pub fn query_client_state<S: Store>(
    registry: &ClientRegistry,
    store: &S,
    request: &QueryClientStateRequest,
) -> Result<QueryClientStateResponse, QueryError> {
    let client_state = registry.client_state(store, &request.client_id)?;

    Ok(QueryClientStateResponse { client_state })
}

/// Queries for all the existing client states.
pub fn query_client_states<S: Store>(
    registry: &ClientRegistry,
    store: &S,
    _request: &QueryClientStatesRequest,
) -> Result<QueryClientStatesResponse, QueryError> {
    let client_states = registry.client_states(store)?;

    Ok(QueryClientStatesResponse { client_states })
}

/// Queries for the consensus state of a given client id at a height, or at
/// its latest height if none is given.
pub fn query_consensus_state<S: Store>(
    registry: &ClientRegistry,
    store: &S,
    request: &QueryConsensusStateRequest,
) -> Result<QueryConsensusStateResponse, QueryError> {
    let consensus_state = match request.height {
        Some(height) => registry.consensus_state(store, &request.client_id, height)?,
        None => registry.latest_consensus_state(store, &request.client_id)?,
    };

    Ok(QueryConsensusStateResponse { consensus_state })
}

/// Queries for the heights of all consensus states associated with a client.
pub fn query_consensus_state_heights<S: Store>(
    registry: &ClientRegistry,
    store: &S,
    request: &QueryConsensusStateHeightsRequest,
) -> Result<QueryConsensusStateHeightsResponse, QueryError> {
    let consensus_state_heights = registry.consensus_state_heights(store, &request.client_id)?;

    Ok(QueryConsensusStateHeightsResponse {
        consensus_state_heights,
    })
}

/// Queries for the status (Active or Frozen) of a given client.
pub fn query_client_status<S: Store>(
    registry: &ClientRegistry,
    store: &S,
    request: &QueryClientStatusRequest,
) -> Result<QueryClientStatusResponse, QueryError> {
    let status = registry.client_status(store, &request.client_id)?;

    Ok(QueryClientStatusResponse { status })
}

/// Queries for the commitment root verified for a client at a height.
pub fn query_verified_root<S: Store>(
    registry: &ClientRegistry,
    store: &S,
    request: &QueryVerifiedRootRequest,
) -> Result<QueryVerifiedRootResponse, QueryError> {
    let root = registry.verified_root(store, &request.client_id, request.height)?;

    Ok(QueryVerifiedRootResponse { root })
}

/// Queries for the committer recorded for a client at a height.
pub fn query_committer<S: Store>(
    registry: &ClientRegistry,
    store: &S,
    request: &QueryCommitterRequest,
) -> Result<QueryCommitterResponse, QueryError> {
    let committer = registry.committer(store, &request.client_id, request.height)?;

    Ok(QueryCommitterResponse { committer })
}
