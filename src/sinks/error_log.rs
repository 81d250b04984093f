use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

/// Append one diagnostic entry to the error log
///
/// Entry layout: the failure message, the joined command-line arguments, a
/// timestamp, then a 60-dash rule and a blank line. This is the
/// authoritative failure record for a run.
pub fn append_error(path: &Path, message: &str, argv: &[String]) -> Result<()> {
    let entry = format!(
        "{}\nИнвокационные параметры: {}\n{}\n{}\n\n",
        message,
        argv.join(" "),
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
        "-".repeat(60),
    );

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open error log: {:?}", path))?;

    file.write_all(entry.as_bytes())
        .with_context(|| format!("Failed to append to error log: {:?}", path))?;

    Ok(())
}
