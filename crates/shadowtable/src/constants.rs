//! Hash table related constants

// =============================================================================
// Salt parameters
// =============================================================================

/// Number of characters in every generated salt
///
/// 16 is also the longest salt SHA-crypt accepts; anything longer is truncated.
pub const SALT_LENGTH: usize = 16;

/// Characters a salt is drawn from (52 symbols)
pub const SALT_ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Shadow algorithm identifiers
// =============================================================================

/// `$5$` - SHA-256 crypt
pub const SHA256_CRYPT_ID: u32 = 5;

/// `$6$` - SHA-512 crypt
pub const SHA512_CRYPT_ID: u32 = 6;

// =============================================================================
// Table directory
// =============================================================================

/// Permission bits that must be clear on the tables directory (group + other)
pub const FORBIDDEN_DIR_MODE_BITS: u32 = 0o077;

/// Prefix of the scratch file a table is written to before it is renamed into place
pub const TEMP_TABLE_PREFIX: &str = ".shadowtable-";

// =============================================================================
// CLI defaults
// =============================================================================

/// Default number of records per table
pub const DEFAULT_AMOUNT: usize = 100;

/// Default algorithm name
pub const DEFAULT_ALGORITHM: &str = "sha512";

/// Default tables directory (relative to the working directory)
pub const DEFAULT_TABLES_DIR: &str = "hash_tables";

/// Prompt shown before the password is read
pub const PASSWORD_PROMPT: &str = "Enter password: ";

/// Initial size of the password buffer; it grows by copying into a fresh
/// buffer and wiping the old one
pub const SECRET_BUFFER_CAPACITY: usize = 256;

/// Controlling terminal device
pub const TTY_PATH: &str = "/dev/tty";
