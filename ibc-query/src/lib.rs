//! Contains the query surface of the light-client registry: request and
//! response types for every client query, the query functions that serve them
//! from a [`ClientRegistry`](ibc_core_client::ClientRegistry) and a store
//! snapshot, and the [`QueryGateway`](crate::gateway::QueryGateway) that
//! decodes a query path plus JSON parameters and encodes the answer or the
//! failure for the caller.
//!
//! Example
//! ```rust,ignore
//! use ibc_core_client::ClientRegistry;
//! use ibc_query::gateway::QueryGateway;
//!
//! let gateway = QueryGateway::new(ClientRegistry::default());
//!
//! match gateway.respond(&store, "verifiedRoot", br#"{"client_id":"07-tendermint-0","height":100}"#) {
//!     Ok(bytes) => { /* JSON encoded `QueryVerifiedRootResponse` */ }
//!     Err(err) => { /* `ErrorResponse { codespace, code, log }` */ }
//! }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod gateway;
