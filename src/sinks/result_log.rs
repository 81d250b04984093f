use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::CallRecord;

/// Append one record line to the flat result log
///
/// The file is opened in append mode, created if missing, and closed when
/// the handle goes out of scope. Concurrent invocations may interleave
/// whole records; each invocation appends exactly once.
pub fn append_record(path: &Path, record: &CallRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open result log: {:?}", path))?;

    file.write_all(record.to_log_line().as_bytes())
        .with_context(|| format!("Failed to append to result log: {:?}", path))?;

    Ok(())
}
