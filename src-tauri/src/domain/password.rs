//! Password rules
//!
//! Character classes, length parsing and generation. Uses the general
//! purpose `rand` generator; the result is not meant to be a secret key.

use rand::distributions::Slice;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Longest password the generator will build
pub const MAX_LENGTH: usize = 1_000_000;

/// Enabled character classes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub fn all() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.upper || self.lower || self.digits || self.symbols)
    }

    /// Union of the enabled alphabets
    pub fn alphabet(&self) -> Vec<char> {
        [
            (self.upper, UPPERCASE),
            (self.lower, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, chars)| chars.chars())
        .collect()
    }
}

/// Parse the length field: any positive whole number up to [`MAX_LENGTH`]
pub fn parse_length(input: &str) -> DomainResult<usize> {
    let input = input.trim();
    if let Ok(n) = input.parse::<u128>() {
        if n == 0 {
            return Err(DomainError::InvalidLength);
        }
        return usize::try_from(n)
            .ok()
            .filter(|&len| len <= MAX_LENGTH)
            .ok_or(DomainError::LengthTooLarge { max: MAX_LENGTH });
    }
    Err(DomainError::InvalidLength)
}

/// Draw `length` characters uniformly from the enabled classes
pub fn generate_with<R: Rng + ?Sized>(
    length: usize,
    classes: CharClasses,
    rng: &mut R,
) -> DomainResult<String> {
    let alphabet = classes.alphabet();
    let chars = Slice::new(&alphabet).map_err(|_| DomainError::NoCharacterClass)?;
    Ok(rng.sample_iter(&chars).take(length).collect())
}
