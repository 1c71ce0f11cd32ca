//! This module implements the processing logic for client messages.

pub mod create_client;
pub mod freeze_client;
pub mod prune_consensus_states;
pub mod update_client;

use ibc_core_client_types::error::ClientError;
use ibc_core_host::store::{RevertibleStore, Store};
use tracing::error;

/// Runs `writes` against `store` so that either all of them land or none.
///
/// On failure the writes made so far are rolled back and the original error
/// is returned.
pub(crate) fn atomically<S, F>(store: &mut S, writes: F) -> Result<(), ClientError>
where
    S: Store,
    F: FnOnce(&mut RevertibleStore<&mut S>) -> Result<(), ClientError>,
{
    let mut tx = RevertibleStore::new(store);

    match writes(&mut tx) {
        Ok(()) => {
            tx.apply()?;
            Ok(())
        }
        Err(e) => {
            if let Err(reset_err) = tx.reset() {
                error!(%reset_err, "failed to roll back partial client write");
            }
            Err(e)
        }
    }
}
