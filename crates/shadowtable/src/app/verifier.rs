//! Table verification workflow

use crate::constants::PASSWORD_PROMPT;
use crate::domain::hasher::{CryptHasher, PasswordHasher};
use crate::domain::record::HashRecord;
use crate::domain::secret::Secret;
use crate::domain::validate::validate_token;
use crate::error::Result;
use crate::infra::permissions::validate_directory_permissions;
use crate::infra::table_io::{get_table_path, load_table};
use crate::infra::terminal::prompt_secret;
use std::path::Path;

/// Outcome of checking a secret against a table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    /// Records the secret reproduces
    pub matched: usize,
    /// Records in the table
    pub total: usize,
}

/// Count the records whose hash the secret reproduces
pub fn count_matches<H: PasswordHasher>(
    records: &[HashRecord],
    secret: &Secret,
    hasher: &H,
) -> Result<usize> {
    let mut matched = 0;
    for record in records {
        if hasher.verify(secret, record)? {
            matched += 1;
        }
    }
    Ok(matched)
}

/// Check a secret against the table for `token`
///
/// Applies the same token and directory checks as generation, and loads the
/// table before asking for the secret.
pub fn verify_table<S, H>(
    tables_dir: &Path,
    token: &str,
    read_secret: S,
    hasher: &H,
) -> Result<VerifyReport>
where
    S: FnOnce() -> Result<Secret>,
    H: PasswordHasher,
{
    validate_token(token)?;
    validate_directory_permissions(tables_dir)?;

    let records = load_table(get_table_path(tables_dir, token))?;
    log::debug!("loaded {} records for token {:?}", records.len(), token);

    let secret = read_secret()?;
    let matched = count_matches(&records, &secret, hasher)?;

    Ok(VerifyReport {
        matched,
        total: records.len(),
    })
}

/// Check a secret read from the controlling terminal against the table for `token`
pub fn verify_table_interactive(tables_dir: &Path, token: &str) -> Result<VerifyReport> {
    verify_table(
        tables_dir,
        token,
        || prompt_secret(PASSWORD_PROMPT),
        &CryptHasher,
    )
}
