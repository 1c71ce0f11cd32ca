//! ICS-24: Host contains the traits a state machine implements to run the
//! light-client registry: a keyed store and an execution context.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

mod context;
pub mod store;

pub use context::*;

/// Re-exports ICS-24 data structures from the `ibc-core-host-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_core_host_types::*;
}
