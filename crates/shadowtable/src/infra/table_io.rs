//! Table file I/O operations
//!
//! Tables are plain text, one `$id$salt$hash` record per line.

use crate::constants::TEMP_TABLE_PREFIX;
use crate::domain::record::HashRecord;
use crate::error::{Result, TableError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Get the file path of the table for `token`
pub fn get_table_path(tables_dir: impl AsRef<Path>, token: &str) -> PathBuf {
    tables_dir.as_ref().join(token)
}

/// Write `amount` records to `tables_dir/token`
///
/// Records are produced by `next_record` (called with the record index) and
/// written to an owner-only scratch file in the same directory, which replaces
/// the table only after every record has been written and synced. Any error
/// leaves the previous table, if any, untouched.
pub fn write_table<F>(
    tables_dir: impl AsRef<Path>,
    token: &str,
    amount: usize,
    mut next_record: F,
) -> Result<PathBuf>
where
    F: FnMut(usize) -> Result<HashRecord>,
{
    let tables_dir = tables_dir.as_ref();
    let path = get_table_path(tables_dir, token);

    let scratch = tempfile::Builder::new()
        .prefix(TEMP_TABLE_PREFIX)
        .tempfile_in(tables_dir)?;

    {
        let mut writer = BufWriter::new(scratch.as_file());
        for index in 0..amount {
            let record = next_record(index)?;
            writeln!(writer, "{}", record)?;
        }
        writer.flush()?;
    }

    scratch.as_file().sync_all()?;
    scratch.persist(&path).map_err(|e| e.error)?;

    Ok(path)
}

/// Load every record of a table file
pub fn load_table(path: impl AsRef<Path>) -> Result<Vec<HashRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record =
            HashRecord::parse(&line).ok_or(TableError::MalformedRecord { line: index + 1 })?;
        records.push(record);
    }

    Ok(records)
}
