//! Typed stores for the records of each client.

mod client_state;
mod height_indexed;
mod verified_root;

pub use client_state::*;
pub use height_indexed::*;
pub use verified_root::*;
