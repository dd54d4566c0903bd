//! Input validation for tokens and record counts

use crate::error::{Result, TableError};
use std::path::{Component, Path};

/// Check that a token names exactly one file inside the tables directory
///
/// Rejects `../` anywhere, path separators, NUL bytes, and the special names
/// `""`, `.` and `..`.
pub fn validate_token(token: &str) -> Result<()> {
    let invalid = || TableError::InvalidToken(token.to_string());

    if token.contains("../") || token.contains('/') || token.contains('\0') {
        return Err(invalid());
    }

    let mut components = Path::new(token).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

/// Parse the requested number of records
///
/// Only plain decimal digits are accepted; signs and whitespace are not.
pub fn parse_amount(value: &str) -> Result<usize> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TableError::InvalidCount(value.to_string()));
    }

    value
        .parse()
        .map_err(|_| TableError::InvalidCount(value.to_string()))
}
