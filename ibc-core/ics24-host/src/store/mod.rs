//! The keyed store the registry persists its records in.

mod codec;
mod revertible;
mod typed;

pub use codec::*;
use ibc_core_host_types::error::HostError;
pub use revertible::RevertibleStore;
pub use typed::*;

/// A byte-keyed store. Hosts back it with their state storage; every method
/// may fail with a [`HostError`].
pub trait Store {
    /// Get associated `value` for `key`
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError>;

    /// Set `value` for `key`, returning the value it replaced
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<Option<Vec<u8>>, HostError>;

    /// Delete `key`, returning the value it held
    fn delete(&mut self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError>;

    /// Return all keys that start with `prefix`
    fn prefix_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, HostError>;

    /// Apply accumulated changes
    fn apply(&mut self) -> Result<(), HostError> {
        Ok(())
    }

    /// Reset accumulated changes
    fn reset(&mut self) -> Result<(), HostError> {
        Ok(())
    }
}

impl<S: Store + ?Sized> Store for &mut S {
    #[inline]
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        (**self).get(key)
    }

    #[inline]
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<Option<Vec<u8>>, HostError> {
        (**self).set(key, value)
    }

    #[inline]
    fn delete(&mut self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        (**self).delete(key)
    }

    #[inline]
    fn prefix_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, HostError> {
        (**self).prefix_keys(prefix)
    }

    #[inline]
    fn apply(&mut self) -> Result<(), HostError> {
        (**self).apply()
    }

    #[inline]
    fn reset(&mut self) -> Result<(), HostError> {
        (**self).reset()
    }
}
