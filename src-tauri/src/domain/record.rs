//! Domain Layer - Core Record Trait
//!
//! Every list-managed entity (tasks, contacts) implements [`Record`].
//! A record is edited through its `Form`, the plain-text mirror of the
//! input fields shown next to the list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::DomainResult;

/// Stable key assigned by a store on insert; never reused
pub type RecordKey = u64;

/// Core trait for records held in a list store
pub trait Record: Sized + Send + Sync + Clone {
    /// Noun used in user-facing messages ("task", "contact")
    const KIND: &'static str;

    /// Edit-form mirror of the record's text fields
    type Form: Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync;

    /// Build a new record from form input, trimming and validating it
    fn from_form(form: &Self::Form) -> DomainResult<Self>;

    /// Current field values, as they should appear in the form
    fn to_form(&self) -> Self::Form;

    /// Overwrite the form-backed fields; state outside the form is kept.
    /// Nothing is changed when validation fails.
    fn apply_form(&mut self, form: &Self::Form) -> DomainResult<()>;

    /// Whether any searchable field contains `needle` (already lowercased)
    fn matches(&self, needle: &str) -> bool;

    /// Text of the record's row in the list
    fn row_label(&self) -> String;

    /// Status line shown while the record is selected
    fn status(&self) -> Option<&'static str> {
        None
    }

    /// Completion flag, for records that have one
    fn completed(&self) -> Option<bool> {
        None
    }
}

/// A record together with the key its store assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub key: RecordKey,
    pub record: T,
}

/// Case-insensitive substring test used by `Record::matches` impls
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
