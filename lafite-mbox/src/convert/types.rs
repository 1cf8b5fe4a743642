//! Conversion options and results

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::config::ConversionConfig;
use crate::error::ConvertError;

/// Options for converting a single file
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Sender token of the synthetic `From ` line
    pub program_id: String,
    /// Quote body lines matching `^>*From `
    pub quote_from_lines: bool,
    /// Drop messages whose deleted flag is `D`
    pub skip_deleted: bool,
    /// Stamp every `From ` line with this date instead of the current time
    pub timestamp: Option<DateTime<Utc>>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::from(&ConversionConfig::default())
    }
}

impl From<&ConversionConfig> for ConvertOptions {
    fn from(config: &ConversionConfig) -> Self {
        Self {
            program_id: config.program_id.clone(),
            quote_from_lines: config.quote_from_lines,
            skip_deleted: config.skip_deleted,
            timestamp: None,
        }
    }
}

/// Counters for one converted file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Messages written to the mbox
    pub messages: u64,
    /// Deleted messages dropped with `skip_deleted`
    pub skipped: u64,
    /// Messages whose stamp carried an anomalous flag
    pub anomalies: u64,
}

/// A successfully converted file
#[derive(Debug, Clone)]
pub struct FileSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: ConversionSummary,
}

/// A file whose conversion was aborted
#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: ConvertError,
}

/// Outcome of converting a directory
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<FileSummary>,
    pub failed: Vec<FileFailure>,
}

impl BatchReport {
    pub fn converted_count(&self) -> usize {
        self.converted.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Total messages written across all converted files
    pub fn message_count(&self) -> u64 {
        self.converted.iter().map(|f| f.summary.messages).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
