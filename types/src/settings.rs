//! Validated identifier-generation settings.
//!
//! Raw deserialization structs stay private; the public type can only exist
//! in a valid state.

use serde::Deserialize;
use thiserror::Error;

/// Lowercase letters and the digits 1-9. There is no `0`.
pub const DEFAULT_ID_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz123456789";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdConfigError {
    #[error("id alphabet must not be empty")]
    EmptyAlphabet,
    #[error("id alphabet contains {0:?} more than once")]
    DuplicateCharacter(char),
}

#[derive(Deserialize)]
struct RawIdConfig {
    #[serde(default = "default_alphabet")]
    alphabet: String,
}

fn default_alphabet() -> String {
    DEFAULT_ID_ALPHABET.to_string()
}

/// Alphabet an identifier generator draws from.
///
/// Invariant: `alphabet` is non-empty and has no repeated characters, so every
/// character is equally likely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIdConfig")]
pub struct IdConfig {
    alphabet: Vec<char>,
}

impl IdConfig {
    pub fn new(alphabet: &str) -> Result<Self, IdConfigError> {
        let chars: Vec<char> = alphabet.chars().collect();
        if chars.is_empty() {
            return Err(IdConfigError::EmptyAlphabet);
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(IdConfigError::DuplicateCharacter(*c));
            }
        }
        Ok(Self { alphabet: chars })
    }

    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ID_ALPHABET.chars().collect(),
        }
    }
}

impl TryFrom<RawIdConfig> for IdConfig {
    type Error = IdConfigError;

    fn try_from(raw: RawIdConfig) -> Result<Self, Self::Error> {
        Self::new(&raw.alphabet)
    }
}
