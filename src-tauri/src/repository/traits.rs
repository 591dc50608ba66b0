//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for record storage.
//! Records are addressed by their position in insertion order; removing
//! a record shifts every later position down by one.

use crate::domain::{DomainResult, Record, RecordKey, Stored};

/// Core repository trait for CRUD operations
///
/// Generic over any Record type.
pub trait Repository<T: Record> {
    /// Append a record, returning the key assigned to it
    fn create(&mut self, record: T) -> RecordKey;

    /// Record at a store position
    fn get(&self, index: usize) -> DomainResult<&Stored<T>>;

    /// All records in insertion order
    fn list(&self) -> &[Stored<T>];

    /// Replace the record at a store position; its key is kept
    fn update(&mut self, index: usize, record: T) -> DomainResult<()>;

    /// Remove the record at a store position
    fn delete(&mut self, index: usize) -> DomainResult<T>;

    fn key_at(&self, index: usize) -> DomainResult<RecordKey> {
        self.get(index).map(|entry| entry.key)
    }

    /// Current store position of a key
    fn position_of(&self, key: RecordKey) -> Option<usize>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extension for repositories that support text search
pub trait SearchableRepository<T: Record>: Repository<T> {
    /// Visible index list for a query
    fn search(&self, query: &str) -> Vec<usize>;
}
