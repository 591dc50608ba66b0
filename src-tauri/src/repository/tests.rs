//! Repository Tests
//!
//! Tests for MemoryStore with task and contact records.

#[cfg(test)]
mod tests {
    use crate::domain::{Contact, ContactForm, DomainError, Record, Task};
    use crate::repository::{MemoryStore, Repository, SearchableRepository};

    fn setup_store(titles: &[&str]) -> MemoryStore<Task> {
        let mut store = MemoryStore::new();
        for title in titles {
            store.create(Task::new(*title, ""));
        }
        store
    }

    fn titles(store: &MemoryStore<Task>) -> Vec<String> {
        store.list().iter().map(|s| s.record.title.clone()).collect()
    }

    #[test]
    fn test_create_appends_last() {
        let mut store = setup_store(&["A", "B"]);

        store.create(Task::new("C", ""));

        assert_eq!(store.len(), 3);
        assert_eq!(titles(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_keys_are_unique_and_not_reused() {
        let mut store = setup_store(&["A", "B"]);
        let first = store.get(0).unwrap().key;
        store.delete(1).unwrap();

        let key = store.create(Task::new("C", ""));

        assert_ne!(key, first);
        assert_eq!(key, 3);
    }

    #[test]
    fn test_duplicate_titles_allowed() {
        let store = setup_store(&["Same", "Same"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_keeps_key() {
        let mut store = setup_store(&["A", "B"]);
        let key = store.get(1).unwrap().key;

        store.update(1, Task::new("B2", "edited")).unwrap();

        let entry = store.get(1).unwrap();
        assert_eq!(entry.key, key);
        assert_eq!(entry.record.title, "B2");
        assert_eq!(store.key_at(1), Ok(key));
    }

    #[test]
    fn test_delete_shifts_positions() {
        let mut store = setup_store(&["A", "B", "C"]);
        let key_c = store.get(2).unwrap().key;

        let removed = store.delete(1).unwrap();

        assert_eq!(removed.title, "B");
        assert_eq!(titles(&store), vec!["A", "C"]);
        assert_eq!(store.position_of(key_c), Some(1));
    }

    #[test]
    fn test_out_of_range() {
        let mut store = setup_store(&["A"]);
        assert!(matches!(store.get(1), Err(DomainError::OutOfRange(1))));
        assert_eq!(store.update(5, Task::new("x", "")), Err(DomainError::OutOfRange(5)));
        assert_eq!(store.delete(1), Err(DomainError::OutOfRange(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_tasks() {
        let mut store = setup_store(&["Groceries", "Gym"]);
        store.create(Task::new("Call mom", "ask about groceries"));

        assert_eq!(store.search("GROC"), vec![0, 2]);
        assert_eq!(store.search(""), vec![0, 1, 2]);
    }

    #[test]
    fn test_search_contacts() {
        let mut store: MemoryStore<Contact> = MemoryStore::new();
        for (name, phone) in [("Ada", "555-1000"), ("Bob", "555-2000"), ("Adam", "777-1000")] {
            let contact = Contact::from_form(&ContactForm::new(name, phone, "", "")).unwrap();
            store.create(contact);
        }

        assert_eq!(store.search("ada"), vec![0, 2]);
        assert_eq!(store.search("1000"), vec![0, 2]);
        assert_eq!(store.search("555"), vec![0, 1]);
    }
}
