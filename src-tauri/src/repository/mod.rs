//! Repository Layer
//!
//! Storage abstractions and the in-memory implementation.

mod memory_store;
mod traits;

#[cfg(test)]
mod tests;

pub use memory_store::MemoryStore;
pub use traits::{Repository, SearchableRepository};
