//! Algorithm registry
//!
//! Maps algorithm names to their shadow-file identifiers.

use crate::constants::{SHA256_CRYPT_ID, SHA512_CRYPT_ID};
use crate::error::TableError;
use std::fmt;
use std::str::FromStr;

/// Supported password hashing algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-256 crypt (`$5$`)
    Sha256,
    /// SHA-512 crypt (`$6$`)
    Sha512,
}

impl Algorithm {
    /// Every registered algorithm, in identifier order
    pub const ALL: [Algorithm; 2] = [Algorithm::Sha256, Algorithm::Sha512];

    /// Name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Numeric identifier used in the `$id$` record prefix
    pub fn id(self) -> u32 {
        match self {
            Algorithm::Sha256 => SHA256_CRYPT_ID,
            Algorithm::Sha512 => SHA512_CRYPT_ID,
        }
    }

    /// Look up an algorithm by its record identifier
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.id() == id)
    }

    /// Names of all registered algorithms, for usage messages
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|algorithm| algorithm.name()).collect()
    }
}

impl FromStr for Algorithm {
    type Err = TableError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| TableError::UnknownAlgorithm(name.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve an algorithm name
pub fn resolve(name: &str) -> Result<Algorithm, TableError> {
    name.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(resolve("sha256").unwrap(), Algorithm::Sha256);
        assert_eq!(resolve("sha512").unwrap(), Algorithm::Sha512);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(Algorithm::Sha256.id(), 5);
        assert_eq!(Algorithm::Sha512.id(), 6);
    }

    #[test]
    fn test_resolve_unknown_name() {
        for name in ["md5", "SHA256", "", "sha-512", "bcrypt"] {
            let result = resolve(name);
            assert!(
                matches!(result, Err(TableError::UnknownAlgorithm(ref n)) if n == name),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Algorithm::from_id(5), Some(Algorithm::Sha256));
        assert_eq!(Algorithm::from_id(6), Some(Algorithm::Sha512));
        assert_eq!(Algorithm::from_id(1), None);
    }

    #[test]
    fn test_display_matches_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
        assert_eq!(Algorithm::names(), vec!["sha256", "sha512"]);
    }
}
