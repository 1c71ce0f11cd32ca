use ibc_core_host::store::Store;
use ibc_core_host::types::error::HostError;
use tracing::trace;

/// A store that fails exactly one write, chosen by its position.
///
/// Writes are counted across `set` and `delete` from zero. The write at the
/// configured position fails with [`HostError::FailedToStoreData`] and leaves
/// the inner store untouched; every other write, including the ones that roll
/// back a failed transaction, goes through.
#[derive(Clone, Debug, Default)]
pub struct FaultyStore<S> {
    inner: S,
    fail_at: Option<usize>,
    writes: usize,
}

impl<S: Store> FaultyStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            fail_at: None,
            writes: 0,
        }
    }

    /// Makes the write at position `n`, counted from now, fail.
    pub fn fail_write_at(mut self, n: usize) -> Self {
        self.fail_at = Some(self.writes + n);
        self
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn check_fault(&mut self, op: &str, key: &[u8]) -> Result<(), HostError> {
        let position = self.writes;
        self.writes += 1;

        if self.fail_at == Some(position) {
            trace!(position, "injecting fault into {op}");
            return Err(HostError::failed_to_store(format!(
                "injected fault on {op} at path {}",
                String::from_utf8_lossy(key)
            )));
        }
        Ok(())
    }
}

impl<S: Store> Store for FaultyStore<S> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<Option<Vec<u8>>, HostError> {
        self.check_fault("set", &key)?;
        self.inner.set(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        self.check_fault("delete", key)?;
        self.inner.delete(key)
    }

    fn prefix_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, HostError> {
        self.inner.prefix_keys(prefix)
    }

    fn apply(&mut self) -> Result<(), HostError> {
        self.inner.apply()
    }

    fn reset(&mut self) -> Result<(), HostError> {
        self.inner.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::InMemoryStore;

    #[test]
    fn only_the_chosen_write_fails() {
        let mut store = FaultyStore::new(InMemoryStore::default()).fail_write_at(1);

        assert!(store.set(b"a".to_vec(), vec![1]).is_ok());
        assert!(matches!(
            store.set(b"b".to_vec(), vec![2]),
            Err(HostError::FailedToStoreData { .. })
        ));
        assert!(store.set(b"c".to_vec(), vec![3]).is_ok());

        assert_eq!(store.inner().keys(), vec!["a", "c"]);
        assert_eq!(store.writes(), 3);
    }
}
