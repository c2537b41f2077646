// src/generators/password.rs
use rand::Rng;

/// Fixed, ordered character pool for generated passwords: uppercase,
/// lowercase, digits, punctuation.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Generated passwords are always exactly this long. Manually edited
/// candidates may have any length.
pub const PASSWORD_LENGTH: usize = 8;

// Source of pseudo-random indices. Not cryptographically secure; the
// generated passwords are demo material, not real credentials.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `[0, bound)`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Default source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

pub struct PasswordGenerator<R: RandomSource = ThreadRngSource> {
    source: R,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            source: ThreadRngSource,
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    /// Builds a generator over an explicit random source. Used by tests to
    /// substitute a deterministic source.
    pub fn with_source(source: R) -> Self {
        PasswordGenerator { source }
    }

    /// Generates a password of exactly `PASSWORD_LENGTH` characters, each
    /// drawn independently from `ALPHABET` (sampling with replacement).
    pub fn generate(&mut self) -> String {
        let bytes: Vec<u8> = (0..PASSWORD_LENGTH)
            .map(|_| ALPHABET[self.source.next_index(ALPHABET.len())])
            .collect();

        // ALPHABET is all ASCII, so the bytes are valid UTF-8.
        String::from_utf8(bytes).expect("alphabet is ASCII")
    }
}
