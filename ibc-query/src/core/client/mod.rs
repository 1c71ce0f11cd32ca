//! Client queries: one function per query path, each a thin translation onto
//! a registry read.

mod query;
pub mod types;

pub use query::*;
