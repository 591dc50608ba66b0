//! Password generator state
//!
//! Holds the last generated password so it can be copied later. A failed
//! generation leaves the previous password in place.

use rand::Rng;

use crate::domain::{generate_with, parse_length, CharClasses, DomainError, DomainResult};

#[derive(Debug, Default)]
pub struct PasswordGenerator {
    current: Option<String>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate from the raw length field and the enabled classes
    pub fn generate(&mut self, length: &str, classes: CharClasses) -> DomainResult<&str> {
        self.generate_using(length, classes, &mut rand::thread_rng())
    }

    pub fn generate_using<R: Rng + ?Sized>(
        &mut self,
        length: &str,
        classes: CharClasses,
        rng: &mut R,
    ) -> DomainResult<&str> {
        let length = parse_length(length)?;
        let password = generate_with(length, classes, rng)?;
        Ok(self.current.insert(password).as_str())
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Text to put on the clipboard
    pub fn copy_text(&self) -> DomainResult<&str> {
        self.current().ok_or(DomainError::NothingToCopy)
    }
}
