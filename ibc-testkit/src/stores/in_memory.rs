use std::collections::BTreeMap;

use ibc_core_host::store::Store;
use ibc_core_host::types::error::HostError;
use tracing::trace;

/// An in-memory store backed by an ordered map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryStore {
    state: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryStore {
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// All keys in ascending order, rendered as strings.
    pub fn keys(&self) -> Vec<String> {
        self.state
            .keys()
            .map(|key| String::from_utf8_lossy(key).into_owned())
            .collect()
    }
}

impl Store for InMemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        trace!("get at path = {}", String::from_utf8_lossy(key));
        Ok(self.state.get(key).cloned())
    }

    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<Option<Vec<u8>>, HostError> {
        trace!("set at path = {}", String::from_utf8_lossy(&key));
        Ok(self.state.insert(key, value))
    }

    fn delete(&mut self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        trace!("delete at path = {}", String::from_utf8_lossy(key));
        Ok(self.state.remove(key))
    }

    fn prefix_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, HostError> {
        Ok(self
            .state
            .range(prefix.to_vec()..)
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
