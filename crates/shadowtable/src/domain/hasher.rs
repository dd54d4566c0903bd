//! Hashing primitive binding
//!
//! The crypt derivation itself is delegated to `pwhash`; this module only
//! builds the setup string and extracts the hash segment from the result.

use crate::domain::algorithm::Algorithm;
use crate::domain::record::HashRecord;
use crate::domain::secret::Secret;
use crate::error::{Result, TableError};
use pwhash::{sha256_crypt, sha512_crypt};

/// Capability to derive a crypt hash from a secret and a salt
pub trait PasswordHasher {
    /// Return the hash segment (the part after `$id$salt$`)
    fn hash(&self, secret: &Secret, salt: &str, algorithm: Algorithm) -> Result<String>;

    /// Hash the secret and assemble the full record
    fn record(&self, secret: &Secret, salt: String, algorithm: Algorithm) -> Result<HashRecord> {
        let hash = self.hash(secret, &salt, algorithm)?;
        Ok(HashRecord::new(algorithm, salt, hash))
    }

    /// Check whether the secret reproduces a stored record
    fn verify(&self, secret: &Secret, record: &HashRecord) -> Result<bool> {
        let hash = self.hash(secret, record.salt(), record.algorithm())?;
        Ok(hash == record.hash())
    }
}

/// SHA-crypt hasher backed by `pwhash` (default 5000 rounds)
#[derive(Clone, Copy, Debug, Default)]
pub struct CryptHasher;

impl PasswordHasher for CryptHasher {
    fn hash(&self, secret: &Secret, salt: &str, algorithm: Algorithm) -> Result<String> {
        let setup = format!("${}${}", algorithm.id(), salt);

        let full = match algorithm {
            // still needed for `$5$` tables
            #[allow(deprecated)]
            Algorithm::Sha256 => sha256_crypt::hash_with(setup.as_str(), secret.expose()),
            Algorithm::Sha512 => sha512_crypt::hash_with(setup.as_str(), secret.expose()),
        }
        .map_err(|e| TableError::Hashing(e.to_string()))?;

        // pwhash truncates salts and may emit a rounds= field; both would break the record
        full.strip_prefix(&setup)
            .and_then(|rest| rest.strip_prefix('$'))
            .map(str::to_owned)
            .ok_or_else(|| {
                TableError::Hashing(format!("unexpected crypt output for salt {:?}", salt))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: &str = "abcdefghABCDEFGH";

    #[test]
    fn test_hash_is_deterministic_per_salt() {
        let secret = Secret::from("correct horse");

        for algorithm in Algorithm::ALL {
            let a = CryptHasher.hash(&secret, SALT, algorithm).unwrap();
            let b = CryptHasher.hash(&secret, SALT, algorithm).unwrap();
            assert_eq!(a, b);
            assert!(!a.contains('$'));
        }
    }

    #[test]
    fn test_hash_lengths() {
        let secret = Secret::from("correct horse");

        // base64-like encodings of 32 and 64 byte digests
        assert_eq!(CryptHasher.hash(&secret, SALT, Algorithm::Sha256).unwrap().len(), 43);
        assert_eq!(CryptHasher.hash(&secret, SALT, Algorithm::Sha512).unwrap().len(), 86);
    }

    #[test]
    fn test_record_matches_pwhash_verify() {
        let secret = Secret::from("correct horse");

        let record = CryptHasher.record(&secret, SALT.to_string(), Algorithm::Sha256).unwrap();
        assert!(sha256_crypt::verify("correct horse", &record.to_string()));
        assert!(!sha256_crypt::verify("wrong horse", &record.to_string()));

        let record = CryptHasher.record(&secret, SALT.to_string(), Algorithm::Sha512).unwrap();
        assert!(sha512_crypt::verify("correct horse", &record.to_string()));
    }

    #[test]
    fn test_different_salts_give_different_hashes() {
        let secret = Secret::from("correct horse");
        let a = CryptHasher.hash(&secret, "aaaaaaaaaaaaaaaa", Algorithm::Sha512).unwrap();
        let b = CryptHasher.hash(&secret, "aaaaaaaaaaaaaaab", Algorithm::Sha512).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_verify() {
        let secret = Secret::from("hunter2");
        let record = CryptHasher.record(&secret, SALT.to_string(), Algorithm::Sha512).unwrap();

        assert!(CryptHasher.verify(&secret, &record).unwrap());
        assert!(!CryptHasher.verify(&Secret::from("hunter3"), &record).unwrap());
    }

    #[test]
    fn test_overlong_salt_is_rejected() {
        let secret = Secret::from("x");
        let result = CryptHasher.hash(&secret, "abcdefghijklmnopqrstuvwxyz", Algorithm::Sha256);

        assert!(matches!(result, Err(TableError::Hashing(_))));
    }
}
