pub(crate) mod proto;

pub use proto::ToVec;
