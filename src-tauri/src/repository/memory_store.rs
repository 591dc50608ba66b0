//! In-memory Store
//!
//! `Vec`-backed implementation of the repository traits. State lives for
//! the lifetime of the window and is never written to disk.

use crate::domain::{visible_indices, DomainError, DomainResult, Record, RecordKey, Stored};

use super::traits::{Repository, SearchableRepository};

#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    entries: Vec<Stored<T>>,
    next_key: RecordKey,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_key: 1,
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for MemoryStore<T> {
    fn create(&mut self, record: T) -> RecordKey {
        let key = self.next_key;
        self.next_key += 1;
        self.entries.push(Stored { key, record });
        key
    }

    fn get(&self, index: usize) -> DomainResult<&Stored<T>> {
        self.entries.get(index).ok_or(DomainError::OutOfRange(index))
    }

    fn list(&self) -> &[Stored<T>] {
        &self.entries
    }

    fn update(&mut self, index: usize, record: T) -> DomainResult<()> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(DomainError::OutOfRange(index))?;
        entry.record = record;
        Ok(())
    }

    fn delete(&mut self, index: usize) -> DomainResult<T> {
        if index >= self.entries.len() {
            return Err(DomainError::OutOfRange(index));
        }
        Ok(self.entries.remove(index).record)
    }

    fn position_of(&self, key: RecordKey) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }
}

impl<T: Record> SearchableRepository<T> for MemoryStore<T> {
    fn search(&self, query: &str) -> Vec<usize> {
        visible_indices(self.entries.iter().map(|entry| &entry.record), query)
    }
}
