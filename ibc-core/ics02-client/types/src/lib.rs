//! Data structures of the light-client registry: the per-client state record,
//! its height-indexed consensus states and committers, and the messages and
//! events that drive them.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

mod client_state;
mod commitment;
mod committer;
mod consensus_state;
pub mod error;
pub mod events;
mod height;
pub mod msgs;
mod status;

pub use client_state::*;
pub use commitment::*;
pub use committer::*;
pub use consensus_state::*;
pub use height::*;
pub use status::*;

/// Raw protobuf messages of the records kept in the store.
pub mod proto {
    use ibc_primitives::proto::{Duration, Timestamp};

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct ClientState {
        #[prost(string, tag = "1")]
        pub client_id: String,
        #[prost(string, tag = "2")]
        pub chain_id: String,
        #[prost(uint64, tag = "3")]
        pub latest_height: u64,
        /// Zero when the client is not frozen.
        #[prost(uint64, tag = "4")]
        pub frozen_height: u64,
        #[prost(message, optional, tag = "5")]
        pub trusting_period: Option<Duration>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct ConsensusState {
        #[prost(uint64, tag = "1")]
        pub height: u64,
        #[prost(bytes = "vec", tag = "2")]
        pub root: Vec<u8>,
        #[prost(message, optional, tag = "3")]
        pub timestamp: Option<Timestamp>,
        #[prost(bytes = "vec", tag = "4")]
        pub next_validators_commitment: Vec<u8>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Committer {
        #[prost(uint64, tag = "1")]
        pub height: u64,
        #[prost(bytes = "vec", tag = "2")]
        pub validator_set_commitment: Vec<u8>,
    }
}
