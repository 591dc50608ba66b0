//! To-do and contact list states

use crate::domain::{Contact, DomainResult, Task};
use crate::repository::SearchableRepository;

use super::list_state::ListState;

pub type TodoState = ListState<Task>;
pub type ContactState = ListState<Contact>;

impl<S: SearchableRepository<Task>> ListState<Task, S> {
    /// Set the completion flag of the selected task.
    ///
    /// Without a selection this does nothing and returns `Ok(false)`.
    pub fn mark(&mut self, completed: bool) -> DomainResult<bool> {
        self.modify_selected(|task| task.completed = completed)
    }
}
