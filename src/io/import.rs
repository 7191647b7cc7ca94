use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::types::RecordTable;

/// Read a whole CSV file into a [`RecordTable`].
///
/// The reader is strict: a row whose field count differs from the
/// header fails the read, and the parser's error propagates unwrapped
/// (as does a file-not-found from the underlying open).
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<RecordTable> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    let mut table = RecordTable::new(headers);

    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(str::to_string).collect());
    }

    debug!("read {} rows from {}", table.len(), path.display());
    Ok(table)
}
