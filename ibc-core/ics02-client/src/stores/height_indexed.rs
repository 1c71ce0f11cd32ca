//! A store of per-client records keyed by height.

use core::fmt::Display;

use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::proto::{
    Committer as RawCommitter, ConsensusState as RawConsensusState,
};
use ibc_core_client_types::{Committer, ConsensusState, Height};
use ibc_core_host::store::{ProtobufStore, Store, TypedStore};
use ibc_core_host::types::identifiers::ClientId;
use ibc_core_host::types::path::{ClientCommitterPath, ClientConsensusStatePath, Path};
use tracing::trace;

/// Height-keyed paths below a client.
pub trait HeightPath: Into<Path> + Clone {
    fn new(client_id: ClientId, height: Height) -> Self;

    /// Prefix every path of this kind for `client_id` starts with.
    fn parent(client_id: &ClientId) -> String;

    /// Extracts the height from `path` if it is of this kind.
    fn height_of(path: &Path) -> Option<u64>;
}

impl HeightPath for ClientConsensusStatePath {
    fn new(client_id: ClientId, height: Height) -> Self {
        ClientConsensusStatePath::new(client_id, height.value())
    }

    fn parent(client_id: &ClientId) -> String {
        ClientConsensusStatePath::parent(client_id)
    }

    fn height_of(path: &Path) -> Option<u64> {
        match path {
            Path::ClientConsensusState(path) => Some(path.height),
            _ => None,
        }
    }
}

impl HeightPath for ClientCommitterPath {
    fn new(client_id: ClientId, height: Height) -> Self {
        ClientCommitterPath::new(client_id, height.value())
    }

    fn parent(client_id: &ClientId) -> String {
        ClientCommitterPath::parent(client_id)
    }

    fn height_of(path: &Path) -> Option<u64> {
        match path {
            Path::ClientCommitter(path) => Some(path.height),
            _ => None,
        }
    }
}

/// Result of [`HeightIndexedStore::set`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetOutcome {
    /// Nothing was recorded at the height; the value was written.
    Written,
    /// An identical value was already recorded.
    Unchanged,
    /// A different value is recorded at the height; nothing was written.
    Conflicting,
}

/// Append-only records of type `V` per (client, height), protobuf-encoded
/// through the raw type `R` under paths of type `P`.
#[derive(Clone, Debug)]
pub struct HeightIndexedStore<P, V, R> {
    store: ProtobufStore<P, V, R>,
}

pub type ConsensusStateStore =
    HeightIndexedStore<ClientConsensusStatePath, ConsensusState, RawConsensusState>;

pub type CommitterStore = HeightIndexedStore<ClientCommitterPath, Committer, RawCommitter>;

impl<P, V, R> Default for HeightIndexedStore<P, V, R> {
    fn default() -> Self {
        Self {
            store: TypedStore::default(),
        }
    }
}

impl<P, V, R> HeightIndexedStore<P, V, R>
where
    P: HeightPath,
    V: Into<R> + Clone + PartialEq,
    R: TryInto<V> + Default + prost::Message,
    <R as TryInto<V>>::Error: Display,
{
    pub const fn new() -> Self {
        Self {
            store: TypedStore::new(),
        }
    }

    pub fn get<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
        height: Height,
    ) -> Result<Option<V>, ClientError> {
        trace!(%client_id, %height, "reading height-indexed record");
        Ok(self.store.get(store, &P::new(client_id.clone(), height))?)
    }

    /// Records `value` at `height` unless something is recorded there
    /// already.
    pub fn set<S: Store>(
        &self,
        store: &mut S,
        client_id: &ClientId,
        height: Height,
        value: &V,
    ) -> Result<SetOutcome, ClientError> {
        let path = P::new(client_id.clone(), height);

        match self.store.get(store, &path)? {
            Some(existing) if existing == *value => Ok(SetOutcome::Unchanged),
            Some(_) => Ok(SetOutcome::Conflicting),
            None => {
                trace!(%client_id, %height, "writing height-indexed record");
                self.store.set(store, path, value)?;
                Ok(SetOutcome::Written)
            }
        }
    }

    /// Deletes every record strictly below `before`; returns the removed
    /// heights in ascending order.
    pub fn prune<S: Store>(
        &self,
        store: &mut S,
        client_id: &ClientId,
        before: Height,
    ) -> Result<Vec<Height>, ClientError> {
        let mut removed = Vec::new();

        for height in self.heights(store, client_id)? {
            if height >= before {
                break;
            }
            self.store.delete(store, P::new(client_id.clone(), height))?;
            removed.push(height);
        }

        trace!(%client_id, %before, count = removed.len(), "pruned height-indexed records");
        Ok(removed)
    }

    /// Returns all heights recorded for `client_id` in ascending order.
    pub fn heights<S: Store>(
        &self,
        store: &S,
        client_id: &ClientId,
    ) -> Result<Vec<Height>, ClientError> {
        let mut heights = self
            .store
            .get_keys(store, &P::parent(client_id))?
            .iter()
            .filter_map(P::height_of)
            .map(Height::new)
            .collect::<Result<Vec<_>, _>>()?;
        heights.sort();

        Ok(heights)
    }
}
