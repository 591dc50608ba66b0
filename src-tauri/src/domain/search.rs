//! Search filter
//!
//! Maps a query onto the visible index list: the store positions whose
//! record contains the query, in store order.

use super::record::Record;

/// Store positions of the records matching `query`, case-insensitively.
///
/// An empty query matches everything.
pub fn visible_indices<'a, T, I>(records: I, query: &str) -> Vec<usize>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = query.to_lowercase();
    records
        .into_iter()
        .enumerate()
        .filter(|(_, record)| record.matches(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Contact, ContactForm, Record, Task};

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("Alpha", "first"),
            Task::new("Beta", "ALPHA follow-up"),
            Task::new("Gamma", ""),
        ]
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(visible_indices(&tasks(), ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_store_order_preserved() {
        assert_eq!(visible_indices(&tasks(), "alpha"), vec![0, 1]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        assert_eq!(visible_indices(&tasks(), "GAM"), vec![2]);
        assert!(visible_indices(&tasks(), "delta").is_empty());
    }

    #[test]
    fn test_partition_matches_exactly() {
        let records = tasks();
        for query in ["a", "ph", "FIRST", "up", "zz"] {
            let visible = visible_indices(&records, query);
            let needle = query.to_lowercase();
            for (index, task) in records.iter().enumerate() {
                let hit = task.title.to_lowercase().contains(&needle)
                    || task.description.to_lowercase().contains(&needle);
                assert_eq!(visible.contains(&index), hit, "query {:?} index {}", query, index);
            }
        }
    }

    #[test]
    fn test_contact_partition_name_and_phone_only() {
        let records: Vec<Contact> = [
            ("Ada Lovelace", "555-0100", "ada@calc.org", "12 Engine Row"),
            ("Bob", "555-0199", "bob@mail.net", "Lovelace Street"),
            ("Carla", "777-2300", "engine@carla.io", "5 Main St"),
        ]
        .iter()
        .map(|(name, phone, email, address)| {
            Contact::from_form(&ContactForm::new(name, phone, email, address)).unwrap()
        })
        .collect();

        for query in ["LOVE", "555", "01", "engine", "main", "mail", "a", "zz"] {
            let visible = visible_indices(&records, query);
            let needle = query.to_lowercase();
            for (index, contact) in records.iter().enumerate() {
                let hit = contact.name.to_lowercase().contains(&needle)
                    || contact.phone.to_lowercase().contains(&needle);
                assert_eq!(visible.contains(&index), hit, "query {:?} index {}", query, index);
            }
        }
        // email and address are never searched
        assert_eq!(visible_indices(&records, "engine"), Vec::<usize>::new());
        assert_eq!(visible_indices(&records, "street"), Vec::<usize>::new());
    }
}
