//! Building blocks for testing the light-client registry and for hosts that
//! want to exercise their integration with it: stores, a mock host context
//! and fixtures.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

pub mod fixtures;
pub mod hosts;
pub mod stores;
pub mod utils;
