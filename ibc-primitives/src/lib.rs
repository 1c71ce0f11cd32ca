//! Contains primitive types and traits shared by the light-client registry
//! crates.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "serde")]
pub mod serializers;

mod traits;
pub use traits::*;

mod types;
pub use types::*;

/// Raw protobuf messages for the well-known google types used by the
/// registry's wire format.
pub mod proto {
    pub use crate::traits::proto::{ProtoError, Protobuf};

    /// Mirrors `google.protobuf.Timestamp`.
    #[derive(Clone, Copy, PartialEq, Eq, prost::Message)]
    pub struct Timestamp {
        #[prost(int64, tag = "1")]
        pub seconds: i64,
        #[prost(int32, tag = "2")]
        pub nanos: i32,
    }

    /// Mirrors `google.protobuf.Duration`.
    #[derive(Clone, Copy, PartialEq, Eq, prost::Message)]
    pub struct Duration {
        #[prost(int64, tag = "1")]
        pub seconds: i64,
        #[prost(int32, tag = "2")]
        pub nanos: i32,
    }
}
