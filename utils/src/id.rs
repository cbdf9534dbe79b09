//! Random identifiers for casual uniqueness.
//!
//! Not suitable for tokens or anything security sensitive: characters come
//! from the thread-local `rand` generator, and collision odds are only those
//! of uniform sampling over the alphabet.

use unikit_types::{DEFAULT_ID_ALPHABET, IdConfig};

/// Generates identifiers over a fixed alphabet.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    config: IdConfig,
}

impl IdGenerator {
    #[must_use]
    pub fn new(config: IdConfig) -> Self {
        let alphabet_size = config.alphabet().len();
        tracing::debug!(alphabet_size, "IdGenerator initialized");
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &IdConfig {
        &self.config
    }

    /// A string of exactly `length` characters, each drawn independently and
    /// uniformly from the alphabet.
    #[must_use]
    pub fn generate(&self, length: usize) -> String {
        let alphabet = self.config.alphabet();
        (0..length)
            .map(|_| alphabet[rand::random_range(0..alphabet.len())])
            .collect()
    }
}

/// A random identifier of `length` characters from `a-z` and `1-9`.
#[must_use]
pub fn generate_id(length: usize) -> String {
    // The default alphabet is ASCII, so bytes are characters.
    let alphabet = DEFAULT_ID_ALPHABET.as_bytes();
    (0..length)
        .map(|_| char::from(alphabet[rand::random_range(0..alphabet.len())]))
        .collect()
}
