//! ICS-24: Host defines the minimal set of identifiers, paths and error kinds
//! that a state machine hosting the light-client registry must agree on.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

pub mod error;
pub mod identifiers;
pub mod path;
pub(crate) mod validate;
