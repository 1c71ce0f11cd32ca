use core::marker::PhantomData;

use ibc_core_host_types::error::{CodecError, StoreError};
use ibc_core_host_types::path::Path;
use tracing::trace;

use super::{Codec, ProtobufCodec, Store};

/// A `TypedStore` that uses the `ProtobufCodec`
pub type ProtobufStore<K, V, R> = TypedStore<K, ProtobufCodec<V, R>>;

/// A typed view over a [`Store`]: keys are paths of type `K` and values go
/// through the codec `C`. The view holds no store handle; every call takes
/// the store it operates on.
#[derive(Clone, Debug)]
pub struct TypedStore<K, C> {
    _key: PhantomData<K>,
    _codec: PhantomData<C>,
}

impl<K, C> Default for TypedStore<K, C> {
    fn default() -> Self {
        Self {
            _key: PhantomData,
            _codec: PhantomData,
        }
    }
}

impl<K, C, V> TypedStore<K, C>
where
    C: Codec<Type = V>,
    K: Into<Path> + Clone,
{
    #[inline]
    pub const fn new() -> Self {
        Self {
            _key: PhantomData,
            _codec: PhantomData,
        }
    }

    #[inline]
    pub fn set<S: Store>(&self, store: &mut S, path: K, value: &V) -> Result<(), StoreError> {
        let key = path.into().into_bytes();
        let bytes = C::encode(value)?;
        store.set(key, bytes)?;
        Ok(())
    }

    /// Deletes the value under `path`; returns whether there was one.
    #[inline]
    pub fn delete<S: Store>(&self, store: &mut S, path: K) -> Result<bool, StoreError> {
        let key = path.into().into_bytes();
        Ok(store.delete(&key)?.is_some())
    }

    #[inline]
    pub fn get<S: Store>(&self, store: &S, path: &K) -> Result<Option<V>, StoreError> {
        let key = path.clone().into().into_bytes();
        store
            .get(&key)?
            .map(|bytes| C::decode(&bytes))
            .transpose()
            .map_err(StoreError::from)
    }

    /// Returns the paths of all records stored below `prefix`.
    #[inline]
    pub fn get_keys<S: Store>(&self, store: &S, prefix: &str) -> Result<Vec<Path>, StoreError> {
        self.get_keys_ending_with(store, prefix, "")
    }

    /// Returns the paths of the records stored below `prefix` whose key ends
    /// with `suffix`. Other keys are skipped without being parsed.
    pub fn get_keys_ending_with<S: Store>(
        &self,
        store: &S,
        prefix: &str,
        suffix: &str,
    ) -> Result<Vec<Path>, StoreError> {
        let keys = store.prefix_keys(prefix.as_bytes())?;
        trace!(prefix, suffix, count = keys.len(), "listed keys");
        keys.iter()
            .filter(|key| key.ends_with(suffix.as_bytes()))
            .map(|key| {
                Path::try_from(key.as_slice()).map_err(|e| {
                    StoreError::Codec(CodecError::Decode {
                        type_name: "Path",
                        description: e.to_string(),
                    })
                })
            })
            .collect()
    }
}
