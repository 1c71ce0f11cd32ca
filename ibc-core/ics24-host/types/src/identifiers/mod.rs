//! Defines identifier types

mod chain_id;
mod client_id;

pub use chain_id::ChainId;
pub use client_id::ClientId;
