use std::ops::Deref;
use std::sync::Arc;

use ibc_core_host::store::Store;
use ibc_core_host::types::error::HostError;
use parking_lot::RwLock;

/// Wraps a store to make it shareable by cloning.
///
/// Reads take the lock shared, so any number of readers proceed together;
/// a write holds it exclusively for the duration of one store call.
#[derive(Clone, Debug)]
pub struct SharedStore<S>(Arc<RwLock<S>>);

impl<S> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self(Arc::new(RwLock::new(store)))
    }

    pub fn share(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<S> Default for SharedStore<S>
where
    S: Default + Store,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store for SharedStore<S>
where
    S: Store,
{
    #[inline]
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        self.0.read().get(key)
    }

    #[inline]
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<Option<Vec<u8>>, HostError> {
        self.0.write().set(key, value)
    }

    #[inline]
    fn delete(&mut self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        self.0.write().delete(key)
    }

    #[inline]
    fn prefix_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, HostError> {
        self.0.read().prefix_keys(prefix)
    }

    #[inline]
    fn apply(&mut self) -> Result<(), HostError> {
        self.0.write().apply()
    }

    #[inline]
    fn reset(&mut self) -> Result<(), HostError> {
        self.0.write().reset()
    }
}

impl<S> Deref for SharedStore<S> {
    type Target = Arc<RwLock<S>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
