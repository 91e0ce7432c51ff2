//! Short code generation.
//!
//! Codes are drawn from `[0-9A-Za-z]` by a pseudo-random generator. They are
//! not derived from the URL content, so the same URL shortened twice gets two
//! independent codes. Uniqueness is not checked here or anywhere else: a
//! colliding code overwrites the existing record on upsert.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 8;
/// Shortest accepted code length.
pub const MIN_CODE_LENGTH: usize = 4;
/// Longest accepted code length.
pub const MAX_CODE_LENGTH: usize = 32;

/// Requested code length is outside `MIN_CODE_LENGTH..=MAX_CODE_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("code length must be between {min} and {max}, got {0}", min = MIN_CODE_LENGTH, max = MAX_CODE_LENGTH)]
pub struct InvalidCodeLength(pub usize);

/// Produces short codes for submitted URLs.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a short, URL-safe code for `url`. Never fails.
    fn generate(&self, url: &str) -> String;
}

/// Alphanumeric code generator backed by the thread-local PRNG.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCodeLength`] if `length` is outside
    /// `MIN_CODE_LENGTH..=MAX_CODE_LENGTH`.
    pub fn new(length: usize) -> Result<Self, InvalidCodeLength> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
            return Err(InvalidCodeLength(length));
        }
        Ok(Self { length })
    }

    /// Returns the length of generated codes.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, _url: &str) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}
