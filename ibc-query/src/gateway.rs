//! The external face of the registry's reads: a query arrives as a path and
//! JSON parameters, leaves as JSON bytes or an [`ErrorResponse`].

use ibc_core_client::ClientRegistry;
use ibc_core_host::store::{Codec, JsonCodec, Store};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::core::client::types::*;
use crate::core::client::*;
use crate::error::{ErrorResponse, QueryError};

pub const CLIENT_STATE_PATH: &str = "clientState";
pub const CLIENT_STATES_PATH: &str = "clientStates";
pub const CONSENSUS_STATE_PATH: &str = "consensusState";
pub const CONSENSUS_STATE_HEIGHTS_PATH: &str = "consensusStateHeights";
pub const CLIENT_STATUS_PATH: &str = "clientStatus";
pub const VERIFIED_ROOT_PATH: &str = "verifiedRoot";
pub const COMMITTER_PATH: &str = "committer";

/// Every query the gateway serves, with its decoded parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryRequest {
    ClientState(QueryClientStateRequest),
    ClientStates(QueryClientStatesRequest),
    ConsensusState(QueryConsensusStateRequest),
    ConsensusStateHeights(QueryConsensusStateHeightsRequest),
    ClientStatus(QueryClientStatusRequest),
    VerifiedRoot(QueryVerifiedRootRequest),
    Committer(QueryCommitterRequest),
}

impl QueryRequest {
    /// Decodes the JSON parameters of the query declared at `path`. An empty
    /// body reads as `{}`.
    pub fn decode(path: &str, data: &[u8]) -> Result<Self, QueryError> {
        let request = match path {
            CLIENT_STATE_PATH => Self::ClientState(decode_params(data)?),
            CLIENT_STATES_PATH => Self::ClientStates(decode_params(data)?),
            CONSENSUS_STATE_PATH => Self::ConsensusState(decode_params(data)?),
            CONSENSUS_STATE_HEIGHTS_PATH => Self::ConsensusStateHeights(decode_params(data)?),
            CLIENT_STATUS_PATH => Self::ClientStatus(decode_params(data)?),
            VERIFIED_ROOT_PATH => Self::VerifiedRoot(decode_params(data)?),
            COMMITTER_PATH => Self::Committer(decode_params(data)?),
            _ => return Err(QueryError::unknown_path(path)),
        };
        Ok(request)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::ClientState(_) => CLIENT_STATE_PATH,
            Self::ClientStates(_) => CLIENT_STATES_PATH,
            Self::ConsensusState(_) => CONSENSUS_STATE_PATH,
            Self::ConsensusStateHeights(_) => CONSENSUS_STATE_HEIGHTS_PATH,
            Self::ClientStatus(_) => CLIENT_STATUS_PATH,
            Self::VerifiedRoot(_) => VERIFIED_ROOT_PATH,
            Self::Committer(_) => COMMITTER_PATH,
        }
    }
}

fn decode_params<T: Serialize + DeserializeOwned>(data: &[u8]) -> Result<T, QueryError> {
    let data = if data.is_empty() { b"{}".as_slice() } else { data };
    JsonCodec::<T>::decode(data).map_err(QueryError::invalid_json)
}

fn encode_json<T: Serialize + DeserializeOwned>(value: &T) -> Result<Vec<u8>, QueryError> {
    Ok(JsonCodec::<T>::encode(value)?)
}

/// The answer to a [`QueryRequest`], one variant per query.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    ClientState(QueryClientStateResponse),
    ClientStates(QueryClientStatesResponse),
    ConsensusState(QueryConsensusStateResponse),
    ConsensusStateHeights(QueryConsensusStateHeightsResponse),
    ClientStatus(QueryClientStatusResponse),
    VerifiedRoot(QueryVerifiedRootResponse),
    Committer(QueryCommitterResponse),
}

impl QueryResponse {
    pub fn encode(&self) -> Result<Vec<u8>, QueryError> {
        match self {
            Self::ClientState(resp) => encode_json(resp),
            Self::ClientStates(resp) => encode_json(resp),
            Self::ConsensusState(resp) => encode_json(resp),
            Self::ConsensusStateHeights(resp) => encode_json(resp),
            Self::ClientStatus(resp) => encode_json(resp),
            Self::VerifiedRoot(resp) => encode_json(resp),
            Self::Committer(resp) => encode_json(resp),
        }
    }
}

/// Translates external queries into registry reads.
///
/// The gateway holds no state of its own beyond the registry's configuration;
/// every call reads from the store snapshot it is handed.
#[derive(Clone, Debug, Default)]
pub struct QueryGateway {
    registry: ClientRegistry,
}

impl QueryGateway {
    pub fn new(registry: ClientRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ClientRegistry {
        &self.registry
    }

    /// Serves a decoded query.
    pub fn query<S: Store>(
        &self,
        store: &S,
        request: &QueryRequest,
    ) -> Result<QueryResponse, QueryError> {
        let registry = &self.registry;

        let response = match request {
            QueryRequest::ClientState(req) => {
                QueryResponse::ClientState(query_client_state(registry, store, req)?)
            }
            QueryRequest::ClientStates(req) => {
                QueryResponse::ClientStates(query_client_states(registry, store, req)?)
            }
            QueryRequest::ConsensusState(req) => {
                QueryResponse::ConsensusState(query_consensus_state(registry, store, req)?)
            }
            QueryRequest::ConsensusStateHeights(req) => QueryResponse::ConsensusStateHeights(
                query_consensus_state_heights(registry, store, req)?,
            ),
            QueryRequest::ClientStatus(req) => {
                QueryResponse::ClientStatus(query_client_status(registry, store, req)?)
            }
            QueryRequest::VerifiedRoot(req) => {
                QueryResponse::VerifiedRoot(query_verified_root(registry, store, req)?)
            }
            QueryRequest::Committer(req) => {
                QueryResponse::Committer(query_committer(registry, store, req)?)
            }
        };

        Ok(response)
    }

    /// Decodes the parameters for `path`, runs the query and encodes the
    /// result as JSON.
    pub fn handle<S: Store>(&self, store: &S, path: &str, data: &[u8]) -> Result<Vec<u8>, QueryError> {
        let request = QueryRequest::decode(path, data)?;
        debug!(path, ?request, "serving query");

        self.query(store, &request)?.encode()
    }

    /// Like [`handle`](Self::handle), with failures translated into the
    /// caller-visible [`ErrorResponse`].
    pub fn respond<S: Store>(
        &self,
        store: &S,
        path: &str,
        data: &[u8],
    ) -> Result<Vec<u8>, ErrorResponse> {
        self.handle(store, path, data).map_err(|e| {
            debug!(path, code = e.code(), codespace = e.codespace(), "query failed: {e}");
            ErrorResponse::from(e)
        })
    }
}
