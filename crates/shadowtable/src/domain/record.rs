//! Shadow-style hash record format
//!
//! A record is one line of a table file: `$<id>$<salt>$<hash>`.

use crate::domain::algorithm::Algorithm;
use std::fmt;

/// One generated hash candidate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashRecord {
    algorithm: Algorithm,
    salt: String,
    hash: String,
}

impl HashRecord {
    pub fn new(algorithm: Algorithm, salt: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            algorithm,
            salt: salt.into(),
            hash: hash.into(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Parse a `$id$salt$hash` line
    ///
    /// Returns `None` for unknown identifiers or missing/empty fields.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.strip_prefix('$')?.splitn(3, '$');

        let algorithm = Algorithm::from_id(fields.next()?.parse().ok()?)?;
        let salt = fields.next()?;
        let hash = fields.next()?;

        if salt.is_empty() || hash.is_empty() || hash.contains('$') {
            return None;
        }

        Some(Self::new(algorithm, salt, hash))
    }
}

impl fmt::Display for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}${}${}", self.algorithm.id(), self.salt, self.hash)
    }
}
