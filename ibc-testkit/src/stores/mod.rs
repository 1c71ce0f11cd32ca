//! Store implementations for tests. Hosts bring their own persistent store;
//! these cover the in-process cases.

mod faulty;
mod in_memory;
mod shared;

pub use faulty::FaultyStore;
pub use in_memory::InMemoryStore;
pub use shared::SharedStore;
