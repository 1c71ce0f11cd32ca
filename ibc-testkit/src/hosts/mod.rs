//! Host contexts for tests.

mod mock;

pub use mock::*;
