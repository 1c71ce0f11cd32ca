pub mod core;
pub mod query;

use std::fmt::Debug;

use ibc_core_client::types::error::ClientError;
use ibc_core_client::ClientRegistry;

use crate::hosts::MockHost;
use crate::stores::InMemoryStore;

pub enum Expect {
    Success,
    Failure(Option<ClientError>),
}

impl Expect {
    /// Whether `res` is what was expected. Failures compare by error kind.
    pub fn matches<T>(&self, res: &Result<T, ClientError>) -> bool {
        match (self, res) {
            (Self::Success, Ok(_)) => true,
            (Self::Failure(None), Err(_)) => true,
            (Self::Failure(Some(expected)), Err(e)) => {
                std::mem::discriminant(expected) == std::mem::discriminant(e)
            }
            _ => false,
        }
    }
}

/// Everything a handler test needs: a host, a store, a registry and the
/// message under test.
#[derive(Debug)]
pub struct Fixture<M: Debug> {
    pub host: MockHost,
    pub store: InMemoryStore,
    pub registry: ClientRegistry,
    pub msg: M,
}

impl<M: Debug> Fixture<M> {
    pub fn new(msg: M) -> Self {
        Self {
            host: MockHost::default(),
            store: InMemoryStore::default(),
            registry: ClientRegistry::default(),
            msg,
        }
    }

    pub fn generate_error_msg<T: Debug>(
        &self,
        expect: &Expect,
        process: &str,
        res: &Result<T, ClientError>,
    ) -> String {
        let base_error = match expect {
            Expect::Success => "step failed!",
            Expect::Failure(_) => "step passed but was supposed to fail!",
        };
        format!(
            "{process} {base_error} \n {res:?} \n {:?} \n {:?}",
            &self.msg,
            self.store.keys()
        )
    }
}
