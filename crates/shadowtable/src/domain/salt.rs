//! Salt generation
//!
//! Every record gets a fresh salt drawn from an injected random source.

use crate::constants::{SALT_ALPHABET, SALT_LENGTH};
use rand::Rng;
use rand::rngs::OsRng;

/// Produces fixed-length alphabetic salts
#[derive(Debug)]
pub struct SaltGenerator<R> {
    rng: R,
}

impl SaltGenerator<OsRng> {
    /// Salt generator backed by the operating system CSPRNG
    pub fn secure() -> Self {
        Self::new(OsRng)
    }
}

impl<R: Rng> SaltGenerator<R> {
    /// Create a generator over an arbitrary random source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one salt of `SALT_LENGTH` characters
    pub fn generate(&mut self) -> String {
        (0..SALT_LENGTH)
            .map(|_| SALT_ALPHABET[self.rng.gen_range(0..SALT_ALPHABET.len())] as char)
            .collect()
    }
}
