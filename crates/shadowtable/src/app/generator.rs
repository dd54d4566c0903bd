//! Table generation workflow
//!
//! Validation runs in full before the secret is requested, so a bad token or
//! an open directory never costs the operator a password prompt.

use crate::constants::PASSWORD_PROMPT;
use crate::domain::algorithm;
use crate::domain::hasher::{CryptHasher, PasswordHasher};
use crate::domain::salt::SaltGenerator;
use crate::domain::secret::Secret;
use crate::domain::validate::{parse_amount, validate_token};
use crate::error::Result;
use crate::infra::permissions::validate_directory_permissions;
use crate::infra::table_io::write_table;
use crate::infra::terminal::prompt_secret;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Raw generation inputs as supplied by the CLI
#[derive(Clone, Copy, Debug)]
pub struct TableRequest<'a> {
    pub token: &'a str,
    pub amount: &'a str,
    pub algorithm: &'a str,
    pub tables_dir: &'a Path,
}

/// Generate a hash table
///
/// Steps: validate token, validate directory, parse count, resolve algorithm,
/// acquire the secret via `read_secret`, then write `amount` records to
/// `tables_dir/token`. The first failing step aborts the run.
pub fn generate_table<S, H, R>(
    request: &TableRequest<'_>,
    read_secret: S,
    hasher: &H,
    salts: &mut SaltGenerator<R>,
) -> Result<PathBuf>
where
    S: FnOnce() -> Result<Secret>,
    H: PasswordHasher,
    R: Rng,
{
    validate_token(request.token)?;
    validate_directory_permissions(request.tables_dir)?;
    let amount = parse_amount(request.amount)?;
    let algorithm = algorithm::resolve(request.algorithm)?;

    log::debug!(
        "generating {} {} records for token {:?} in {}",
        amount,
        algorithm,
        request.token,
        request.tables_dir.display()
    );

    let secret = read_secret()?;

    let path = write_table(request.tables_dir, request.token, amount, |_| {
        hasher.record(&secret, salts.generate(), algorithm)
    })?;

    log::info!("wrote {} records to {}", amount, path.display());
    Ok(path)
}

/// Generate a hash table, reading the secret from the controlling terminal
pub fn generate_table_interactive(request: &TableRequest<'_>) -> Result<PathBuf> {
    generate_table(
        request,
        || prompt_secret(PASSWORD_PROMPT),
        &CryptHasher,
        &mut SaltGenerator::secure(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::algorithm::Algorithm;
    use crate::domain::record::HashRecord;
    use crate::error::TableError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Hasher that returns the salt reversed, so records are cheap and predictable
    struct ReverseHasher;

    impl PasswordHasher for ReverseHasher {
        fn hash(&self, _secret: &Secret, salt: &str, _algorithm: Algorithm) -> Result<String> {
            Ok(salt.chars().rev().collect())
        }
    }

    fn private_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o700)).unwrap();
        dir
    }

    fn request<'a>(dir: &'a TempDir, token: &'a str, amount: &'a str) -> TableRequest<'a> {
        TableRequest {
            token,
            amount,
            algorithm: "sha512",
            tables_dir: dir.path(),
        }
    }

    #[test]
    fn test_generate_table_small() {
        let dir = private_dir();
        let mut salts = SaltGenerator::new(StdRng::seed_from_u64(42));

        let path = generate_table(
            &request(&dir, "alice", "5"),
            || Ok(Secret::from("pw")),
            &ReverseHasher,
            &mut salts,
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);

        for line in lines {
            let record = HashRecord::parse(line).unwrap();
            assert_eq!(record.algorithm(), Algorithm::Sha512);
            assert_eq!(record.hash(), record.salt().chars().rev().collect::<String>());
        }
    }

    #[test]
    fn test_generate_table_deterministic_with_seeded_salts() {
        let dir_a = private_dir();
        let dir_b = private_dir();

        for dir in [&dir_a, &dir_b] {
            let mut salts = SaltGenerator::new(StdRng::seed_from_u64(9));
            generate_table(
                &request(dir, "t", "4"),
                || Ok(Secret::from("pw")),
                &ReverseHasher,
                &mut salts,
            )
            .unwrap();
        }

        assert_eq!(
            fs::read(dir_a.path().join("t")).unwrap(),
            fs::read(dir_b.path().join("t")).unwrap()
        );
    }

    #[test]
    fn test_invalid_count_checked_before_secret() {
        let dir = private_dir();
        let mut asked = false;

        let result = generate_table(
            &request(&dir, "alice", "-3"),
            || {
                asked = true;
                Ok(Secret::from("pw"))
            },
            &ReverseHasher,
            &mut SaltGenerator::new(StdRng::seed_from_u64(0)),
        );

        assert!(matches!(result, Err(TableError::InvalidCount(_))));
        assert!(!asked);
    }

    #[test]
    fn test_unknown_algorithm_checked_before_secret() {
        let dir = private_dir();
        let mut asked = false;
        let req = TableRequest {
            algorithm: "md5",
            ..request(&dir, "alice", "1")
        };

        let result = generate_table(
            &req,
            || {
                asked = true;
                Ok(Secret::from("pw"))
            },
            &ReverseHasher,
            &mut SaltGenerator::new(StdRng::seed_from_u64(0)),
        );

        assert!(matches!(result, Err(TableError::UnknownAlgorithm(_))));
        assert!(!asked);
    }

    #[test]
    fn test_secret_error_propagates() {
        let dir = private_dir();

        let result = generate_table(
            &request(&dir, "alice", "1"),
            || Err(TableError::Terminal(std::io::Error::other("no tty"))),
            &ReverseHasher,
            &mut SaltGenerator::new(StdRng::seed_from_u64(0)),
        );

        assert!(matches!(result, Err(TableError::Terminal(_))));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
