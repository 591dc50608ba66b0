//! Contact Entity
//!
//! An address-book entry. Name and phone are required, email and
//! address are optional.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::record::{contains_ignore_case, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Edit form of a contact; same fields, untrimmed user input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactForm {
    pub fn new(name: &str, phone: &str, email: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            address: address.to_string(),
        }
    }
}

impl Record for Contact {
    const KIND: &'static str = "contact";

    type Form = ContactForm;

    fn from_form(form: &ContactForm) -> DomainResult<Self> {
        let name = form.name.trim();
        let phone = form.phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(DomainError::MissingContactFields);
        }
        Ok(Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: form.email.trim().to_string(),
            address: form.address.trim().to_string(),
        })
    }

    fn to_form(&self) -> ContactForm {
        ContactForm::new(&self.name, &self.phone, &self.email, &self.address)
    }

    fn apply_form(&mut self, form: &ContactForm) -> DomainResult<()> {
        *self = Contact::from_form(form)?;
        Ok(())
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle) || contains_ignore_case(&self.phone, needle)
    }

    fn row_label(&self) -> String {
        format!("{} - {}", self.name, self.phone)
    }
}
