use ibc_core_host_types::error::HostError;
use tracing::trace;

use super::Store;

/// A wrapper store that implements rudimentary `apply()`/`reset()` support for
/// other stores.
///
/// Every write records the operation that undoes it. `reset()` replays the
/// log backwards against the backing store, `apply()` forgets it.
#[derive(Clone, Debug)]
pub struct RevertibleStore<S> {
    /// backing store
    store: S,
    /// operation log for recording rollback operations in preserved order
    op_log: Vec<RevertOp>,
}

#[derive(Clone, Debug)]
enum RevertOp {
    Delete(Vec<u8>),
    Set(Vec<u8>, Vec<u8>),
}

impl<S> RevertibleStore<S>
where
    S: Store,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            op_log: vec![],
        }
    }

    /// Number of writes that `reset()` would undo.
    pub fn pending_ops(&self) -> usize {
        self.op_log.len()
    }
}

impl<S> Default for RevertibleStore<S>
where
    S: Default + Store,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store for RevertibleStore<S>
where
    S: Store,
{
    #[inline]
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        self.store.get(key)
    }

    #[inline]
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<Option<Vec<u8>>, HostError> {
        let old_value = self.store.set(key.clone(), value)?;
        match old_value {
            // None implies this was an insert op, so we record the revert op as delete op
            None => self.op_log.push(RevertOp::Delete(key)),
            // Some old value implies this was an update op, so we record the revert op as a set op
            // with the old value
            Some(ref old_value) => self.op_log.push(RevertOp::Set(key, old_value.clone())),
        }
        Ok(old_value)
    }

    #[inline]
    fn delete(&mut self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        let old_value = self.store.delete(key)?;
        if let Some(ref old_value) = old_value {
            self.op_log
                .push(RevertOp::Set(key.to_vec(), old_value.clone()));
        }
        Ok(old_value)
    }

    #[inline]
    fn prefix_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, HostError> {
        self.store.prefix_keys(prefix)
    }

    #[inline]
    fn apply(&mut self) -> Result<(), HostError> {
        // note that we do NOT call the backing store's apply here - this allows users to create
        // multilayered `RevertibleStore`s
        self.op_log.clear();
        Ok(())
    }

    #[inline]
    fn reset(&mut self) -> Result<(), HostError> {
        // the backing store's reset is not called either; reverts go straight to the backing
        // store so they are not logged again
        trace!(ops = self.op_log.len(), "rollback operation log changes");
        while let Some(op) = self.op_log.pop() {
            match op {
                RevertOp::Delete(key) => {
                    self.store.delete(&key)?;
                }
                RevertOp::Set(key, value) => {
                    self.store.set(key, value)?;
                }
            }
        }
        Ok(())
    }
}
