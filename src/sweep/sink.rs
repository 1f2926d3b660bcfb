//! Results sink - append-only persistence of trial records
//!
//! The metrics log is the one shared, mutable resource in a sweep. Design
//! rules:
//!
//! - the log only grows; rows are never edited, removed, or deduplicated
//! - the header is written at most once over the log's whole lifetime,
//!   across process runs
//! - each append opens, writes, flushes, and closes the file (scoped
//!   acquisition), so a killed run leaves a syntactically valid prefix
//!
//! Single-writer, single-process by design. Concurrent writers would need
//! external file locking and are not supported.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::Result;

use super::TrialResult;

/// Persistence boundary for trial records.
///
/// Swap in [`MemoryResultsSink`] to test the driver without touching the
/// filesystem.
pub trait ResultsSink {
    /// Make sure the log exists and starts with exactly one header row.
    ///
    /// Idempotent: a log that already has content is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] when the log cannot be created or
    /// inspected.
    fn ensure_header(&mut self) -> Result<()>;

    /// Append one trial record as a delimited row in header column order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] or [`crate::Error::Csv`] when the row
    /// cannot be written; the file handle is released either way.
    fn append(&mut self, trial: &TrialResult) -> Result<()>;
}

/// CSV-backed sink appending to a log file on disk.
#[derive(Debug, Clone)]
pub struct CsvResultsSink {
    path: PathBuf,
}

impl CsvResultsSink {
    /// Create a sink for the given log path. Nothing is touched on disk
    /// until [`ResultsSink::ensure_header`] runs.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultsSink for CsvResultsSink {
    fn ensure_header(&mut self) -> Result<()> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            File::create(&self.path)?;
        }

        if fs::metadata(&self.path)?.len() == 0 {
            let file = OpenOptions::new().append(true).open(&self.path)?;
            let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
            writer.write_record(TrialResult::HEADER)?;
            writer.flush()?;
        }

        Ok(())
    }

    fn append(&mut self, trial: &TrialResult) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(trial.to_row())?;
        writer.flush()?;
        Ok(())
    }
}

/// In-memory sink for tests: records header emission and every appended
/// row, in order.
#[derive(Debug, Default)]
pub struct MemoryResultsSink {
    header_written: bool,
    rows: Vec<TrialResult>,
}

impl MemoryResultsSink {
    /// Create an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the header has been emitted.
    #[must_use]
    pub const fn header_written(&self) -> bool {
        self.header_written
    }

    /// Appended rows, oldest first.
    #[must_use]
    pub fn rows(&self) -> &[TrialResult] {
        &self.rows
    }
}

impl ResultsSink for MemoryResultsSink {
    fn ensure_header(&mut self) -> Result<()> {
        self.header_written = true;
        Ok(())
    }

    fn append(&mut self, trial: &TrialResult) -> Result<()> {
        self.rows.push(trial.clone());
        Ok(())
    }
}
