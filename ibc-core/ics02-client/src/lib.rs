//! ICS-02: Client Semantics. The light-client registry keeps, per
//! counterparty chain, the trusted facts other protocol logic checks proofs
//! against, along with re-exporting data structures from
//! `ibc-core-client-types` crate.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

mod config;
pub mod handler;
mod registry;
pub mod stores;

pub use config::*;
pub use registry::ClientRegistry;

/// Re-exports ICS-02 data structures from the `ibc-core-client-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_core_client_types::*;
}
