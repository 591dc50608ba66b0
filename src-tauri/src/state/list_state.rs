//! List State
//!
//! Application state of one list tool: the store, the search query, the
//! visible index list derived from both, the single selection and the
//! edit-form mirror.
//!
//! The selection is a position in the visible list. It is tied to the
//! selected record's key, so recomputing the visible list keeps it on the
//! same record while that record stays visible and clears it otherwise.

use crate::domain::{Action, DomainError, DomainResult, Record, RecordKey};
use crate::repository::{MemoryStore, SearchableRepository};

pub struct ListState<T: Record, S = MemoryStore<T>> {
    store: S,
    query: String,
    visible: Vec<usize>,
    selected: Option<usize>,
    form: T::Form,
}

impl<T: Record> ListState<T> {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl<T: Record> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record, S: SearchableRepository<T>> ListState<T, S> {
    pub fn with_store(store: S) -> Self {
        let mut state = Self {
            store,
            query: String::new(),
            visible: Vec::new(),
            selected: None,
            form: T::Form::default(),
        };
        state.recompute();
        state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Store positions currently shown, in store order
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Selected position in the visible list
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn form(&self) -> &T::Form {
        &self.form
    }

    /// Store position behind the selection
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|pos| self.visible.get(pos).copied())
    }

    pub fn selected_record(&self) -> Option<&T> {
        let index = self.selected_index()?;
        self.store.get(index).ok().map(|entry| &entry.record)
    }

    /// Append a record built from the form, then reset the form.
    pub fn add(&mut self, form: T::Form) -> DomainResult<usize> {
        let record = T::from_form(&form)?;
        self.store.create(record);
        self.clear_inputs();
        self.recompute();
        Ok(self.store.len() - 1)
    }

    /// Overwrite the selected record with the form contents.
    pub fn update(&mut self, form: T::Form) -> DomainResult<usize> {
        let index = self.require_selection(Action::Update)?;
        let mut record = self.store.get(index)?.record.clone();
        record.apply_form(&form)?;
        self.form = record.to_form();
        self.store.update(index, record)?;
        self.recompute();
        Ok(index)
    }

    /// Remove the selected record and reset the form.
    pub fn delete(&mut self) -> DomainResult<T> {
        let index = self.require_selection(Action::Delete)?;
        let removed = self.store.delete(index)?;
        self.clear_inputs();
        self.recompute();
        Ok(removed)
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    /// Select a visible position, or clear the selection with `None`.
    pub fn select(&mut self, position: Option<usize>) -> DomainResult<()> {
        if let Some(pos) = position {
            if pos >= self.visible.len() {
                return Err(DomainError::OutOfRange(pos));
            }
        }
        self.selected = position;
        Ok(())
    }

    /// Select the row showing the record with `key`, or clear with `None`.
    ///
    /// Rows are addressed by key so a click still lands on the record it was
    /// meant for after the visible list has changed underneath it. A record
    /// that is gone or filtered out clears the selection.
    pub fn select_key(&mut self, key: Option<RecordKey>) -> DomainResult<()> {
        let Some(key) = key else {
            self.selected = None;
            return Ok(());
        };
        let position = self
            .store
            .position_of(key)
            .and_then(|index| self.visible.iter().position(|&v| v == index));
        self.selected = position;
        position.map(|_| ()).ok_or(DomainError::NotListed(key))
    }

    /// Copy the selected record into the form. Returns false without a selection.
    pub fn load_selected(&mut self) -> bool {
        let loaded = self.selected_record().map(Record::to_form);
        match loaded {
            Some(form) => {
                self.form = form;
                true
            }
            None => false,
        }
    }

    pub fn clear_inputs(&mut self) {
        self.form = T::Form::default();
        self.selected = None;
    }

    /// Apply `f` to a copy of the selected record and store the result.
    /// Returns `Ok(false)` without touching anything when nothing is selected.
    pub fn modify_selected(&mut self, f: impl FnOnce(&mut T)) -> DomainResult<bool> {
        let Some(index) = self.selected_index() else {
            return Ok(false);
        };
        let mut record = self.store.get(index)?.record.clone();
        f(&mut record);
        self.store.update(index, record)?;
        self.recompute();
        Ok(true)
    }

    fn require_selection(&self, action: Action) -> DomainResult<usize> {
        self.selected_index().ok_or(DomainError::NoSelection {
            kind: T::KIND,
            action,
        })
    }

    fn recompute(&mut self) {
        let selected_key = self
            .selected_index()
            .and_then(|index| self.store.key_at(index).ok());

        self.visible = self.store.search(&self.query);
        self.selected = selected_key
            .and_then(|key| self.store.position_of(key))
            .and_then(|index| self.visible.iter().position(|&v| v == index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Contact, ContactForm, Task, TaskForm};
    use crate::repository::Repository;

    fn todo_with(titles: &[&str]) -> ListState<Task> {
        let mut state = ListState::new();
        for title in titles {
            state.add(TaskForm::new(*title, "")).unwrap();
        }
        state
    }

    fn store_titles(state: &ListState<Task>) -> Vec<String> {
        state.store().list().iter().map(|s| s.record.title.clone()).collect()
    }

    fn assert_invariants<T: Record>(state: &ListState<T>) {
        let len = state.store().len();
        assert_eq!(state.visible(), state.store().search(state.query()).as_slice());
        assert!(state.visible().iter().all(|&i| i < len));
        if let Some(pos) = state.selected() {
            assert!(pos < state.visible().len());
        }
    }

    #[test]
    fn test_add_appends_and_clears_form() {
        let mut state = todo_with(&["A"]);
        state.select(Some(0)).unwrap();

        let index = state.add(TaskForm::new("B", "second")).unwrap();

        assert_eq!(index, 1);
        assert_eq!(store_titles(&state), vec!["A", "B"]);
        assert_eq!(state.form(), &TaskForm::default());
        assert_eq!(state.selected(), None);
        assert_invariants(&state);
    }

    #[test]
    fn test_add_empty_title_rejected() {
        let mut state = todo_with(&["A"]);

        let err = state.add(TaskForm::new("  ", "desc")).unwrap_err();

        assert_eq!(err, DomainError::EmptyTitle);
        assert_eq!(state.store().len(), 1);
    }

    #[test]
    fn test_update_requires_selection() {
        let mut state = todo_with(&["A"]);

        let err = state.update(TaskForm::new("B", "")).unwrap_err();

        assert_eq!(err, DomainError::NoSelection { kind: "task", action: Action::Update });
        assert_eq!(store_titles(&state), vec!["A"]);
    }

    #[test]
    fn test_update_checks_selection_before_fields() {
        let mut state = todo_with(&["A"]);
        let err = state.update(TaskForm::new("", "")).unwrap_err();
        assert!(matches!(err, DomainError::NoSelection { .. }));
    }

    #[test]
    fn test_update_then_reselect_shows_new_title() {
        let mut state = todo_with(&["Old", "Other"]);
        state.select(Some(0)).unwrap();
        state.load_selected();
        assert_eq!(state.form().title, "Old");

        state.update(TaskForm::new("New", "")).unwrap();
        state.select(None).unwrap();
        state.select(Some(0)).unwrap();
        state.load_selected();

        assert_eq!(state.form().title, "New");
        assert_eq!(state.selected_record().map(|t| t.title.as_str()), Some("New"));
    }

    #[test]
    fn test_update_blank_title_leaves_record() {
        let mut state = todo_with(&["Keep"]);
        state.select(Some(0)).unwrap();

        assert_eq!(state.update(TaskForm::new("", "x")), Err(DomainError::EmptyTitle));
        assert_eq!(store_titles(&state), vec!["Keep"]);
    }

    #[test]
    fn test_update_keeps_selection_while_visible() {
        let mut state = todo_with(&["apple", "banana"]);
        state.search("an");
        state.select(Some(0)).unwrap();

        state.update(TaskForm::new("mango", "")).unwrap();
        assert_eq!(state.selected(), Some(0));

        state.update(TaskForm::new("kiwi", "")).unwrap();
        assert_eq!(state.selected(), None);
        assert!(state.visible().is_empty());
        assert_invariants(&state);
    }

    #[test]
    fn test_delete_through_visible_position() {
        let mut state = todo_with(&["A", "B", "C"]);
        state.search("c");
        state.select(Some(0)).unwrap();

        let removed = state.delete().unwrap();

        assert_eq!(removed.title, "C");
        assert_eq!(store_titles(&state), vec!["A", "B"]);
        assert_eq!(state.selected(), None);
        assert_invariants(&state);
    }

    #[test]
    fn test_delete_middle_shifts_store() {
        let mut state = todo_with(&["A", "B", "C"]);
        state.select(Some(1)).unwrap();

        state.delete().unwrap();

        assert_eq!(store_titles(&state), vec!["A", "C"]);
        assert_eq!(state.visible(), &[0, 1]);
    }

    #[test]
    fn test_delete_requires_selection() {
        let mut state = todo_with(&["A"]);
        let err = state.delete().unwrap_err();
        assert_eq!(err.to_string(), "Select a task to delete.");
        assert_eq!(state.store().len(), 1);
    }

    #[test]
    fn test_search_moves_selection_with_record() {
        let mut state = todo_with(&["red", "green", "blue"]);
        state.select(Some(2)).unwrap();

        state.search("b");
        assert_eq!(state.visible(), &[2]);
        assert_eq!(state.selected(), Some(0));

        state.search("g");
        assert_eq!(state.selected(), None);

        state.search("");
        assert_eq!(state.selected(), None);
        assert_invariants(&state);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut state = todo_with(&["A"]);
        assert_eq!(state.select(Some(1)), Err(DomainError::OutOfRange(1)));
        assert_eq!(state.selected(), None);
    }

    fn key_of(state: &ListState<Task>, title: &str) -> RecordKey {
        state
            .store()
            .list()
            .iter()
            .find(|s| s.record.title == title)
            .map(|s| s.key)
            .unwrap()
    }

    #[test]
    fn test_select_key_after_list_changed() {
        let mut state = todo_with(&["A", "B", "C"]);
        let key_a = key_of(&state, "A");
        let key_c = key_of(&state, "C");

        // row "A" was clicked in the unfiltered list, a search ran first
        state.search("c");
        assert_eq!(state.select_key(Some(key_a)), Err(DomainError::NotListed(key_a)));
        assert_eq!(state.selected(), None);
        assert!(matches!(state.delete(), Err(DomainError::NoSelection { .. })));
        assert_eq!(store_titles(&state), vec!["A", "B", "C"]);

        state.select_key(Some(key_c)).unwrap();
        assert_eq!(state.selected(), Some(0));

        state.search("");
        state.select_key(Some(key_a)).unwrap();
        let removed = state.delete().unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(store_titles(&state), vec!["B", "C"]);
        assert_invariants(&state);
    }

    #[test]
    fn test_select_key_of_deleted_record() {
        let mut state = todo_with(&["A", "B"]);
        let key_b = key_of(&state, "B");
        state.select_key(Some(key_b)).unwrap();
        state.delete().unwrap();

        assert_eq!(state.select_key(Some(key_b)), Err(DomainError::NotListed(key_b)));
        state.select_key(None).unwrap();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_load_without_selection_is_noop() {
        let mut state = todo_with(&["A"]);
        assert!(!state.load_selected());
        assert_eq!(state.form(), &TaskForm::default());
    }

    #[test]
    fn test_clear_inputs() {
        let mut state = todo_with(&["A"]);
        state.select(Some(0)).unwrap();
        state.load_selected();

        state.clear_inputs();

        assert_eq!(state.form(), &TaskForm::default());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_contact_list_flow() {
        let mut state: ListState<Contact> = ListState::new();
        state.add(ContactForm::new("Ada", "555-1", "", "")).unwrap();
        state.add(ContactForm::new("Bob", "555-2", "bob@x.org", "")).unwrap();
        assert_eq!(
            state.add(ContactForm::new("Carl", "", "", "")),
            Err(DomainError::MissingContactFields)
        );

        state.search("BOB");
        state.select(Some(0)).unwrap();
        state.load_selected();
        assert_eq!(state.form().email, "bob@x.org");

        state.update(ContactForm::new("Robert", "555-2", "bob@x.org", "Main St")).unwrap();
        assert_eq!(state.selected(), None);
        assert!(state.visible().is_empty());

        state.search("");
        assert_eq!(state.store().get(1).unwrap().record.name, "Robert");
        assert_invariants(&state);
    }
}
