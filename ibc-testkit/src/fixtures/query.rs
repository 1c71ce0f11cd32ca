use ibc_core_host::store::Store;
use ibc_query::error::ErrorResponse;
use ibc_query::gateway::QueryGateway;
use serde_json::Value;

/// Sends `params` to the gateway at `path` and decodes the answer, the way an
/// external caller sees it.
pub fn query_json<S: Store>(
    gateway: &QueryGateway,
    store: &S,
    path: &str,
    params: Value,
) -> Result<Value, ErrorResponse> {
    let data = serde_json::to_vec(&params).expect("JSON values always serialize");
    let bytes = gateway.respond(store, path, &data)?;
    Ok(serde_json::from_slice(&bytes).expect("the gateway answers in JSON"))
}
