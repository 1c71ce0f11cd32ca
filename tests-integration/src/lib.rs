//! Shared setup of the integration tests: a chain of records for one client
//! tracked by a registry, kept next to the store and host it lives in.

use ibc_core_client::types::error::ClientError;
use ibc_core_client::ClientRegistry;
use ibc_core_host::store::Store;
use ibc_query::gateway::QueryGateway;
use ibc_testkit::fixtures::core::client::ClientFixture;
use ibc_testkit::hosts::MockHost;
use ibc_testkit::stores::InMemoryStore;
use tracing::debug;

/// A registry, a store, a host and the fixture of the client under test.
#[derive(Debug)]
pub struct Scenario<S = InMemoryStore> {
    pub client: ClientFixture,
    pub registry: ClientRegistry,
    pub store: S,
    pub host: MockHost,
}

impl Default for Scenario<InMemoryStore> {
    fn default() -> Self {
        Self::new(ClientFixture::default(), InMemoryStore::default())
    }
}

impl<S: Store> Scenario<S> {
    pub fn new(client: ClientFixture, store: S) -> Self {
        Self {
            client,
            registry: ClientRegistry::default(),
            store,
            host: MockHost::default(),
        }
    }

    pub fn create(&mut self, height: u64, seed: &str) -> Result<(), ClientError> {
        debug!(height, seed, "creating client");
        let msg = self.client.msg_create_client(height, seed);
        self.registry.create_client(&mut self.store, &mut self.host, msg)
    }

    pub fn update(&mut self, height: u64, seed: &str) -> Result<(), ClientError> {
        debug!(height, seed, "updating client");
        let msg = self.client.msg_update_client(height, seed);
        self.registry.update_client(&mut self.store, &mut self.host, msg)
    }

    pub fn freeze(&mut self, height: u64) -> Result<(), ClientError> {
        debug!(height, "freezing client");
        let msg = self.client.msg_freeze_client(height);
        self.registry.freeze_client(&mut self.store, &mut self.host, msg)
    }

    /// A gateway over this scenario's registry.
    pub fn gateway(&self) -> QueryGateway {
        QueryGateway::new(self.registry.clone())
    }
}
