//! shadowtable - Salted shadow-style password hash table generation
//!
//! This crate provides functionality to:
//! - Generate a table of `$id$salt$hash` candidates for a single secret
//! - Read that secret from the controlling terminal with echo disabled
//! - Refuse traversal tokens and tables directories readable by others
//! - Check a secret against a previously generated table

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod infra;

// Re-export commonly used types
pub use constants::*;
pub use domain::algorithm::Algorithm;
pub use domain::hasher::{CryptHasher, PasswordHasher};
pub use domain::record::HashRecord;
pub use domain::salt::SaltGenerator;
pub use domain::secret::Secret;
pub use error::{Result, TableError};
