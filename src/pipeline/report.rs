//! Per-run reporting.
//!
//! Row-level failures are collected during the run and surfaced together at
//! the end, preserving maximal partial progress.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::observations::SkippedRecord;

/// A row excluded from segmentation.
#[derive(Debug, Clone, Serialize)]
pub struct ExcludedRow {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Why the row was excluded.
    pub reason: String,
}

impl From<&SkippedRecord> for ExcludedRow {
    fn from(skipped: &SkippedRecord) -> Self {
        Self {
            line: skipped.line,
            reason: skipped.reason.to_string(),
        }
    }
}

/// Summary of one event ID assignment run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Total data rows read from the input.
    pub total_rows: usize,
    /// Rows that received an event identifier.
    pub segmented_rows: usize,
    /// Number of identity-key groups.
    pub groups: usize,
    /// Number of events assigned.
    pub events: usize,
    /// Rows excluded from segmentation.
    pub excluded: Vec<ExcludedRow>,
}

impl RunReport {
    /// Log the report through tracing.
    pub fn log(&self) {
        if self.total_rows == 0 {
            info!("No observations to process; wrote an empty output");
            return;
        }

        info!(
            "Assigned {} event(s) across {} group(s): {} of {} row(s) segmented",
            self.events, self.groups, self.segmented_rows, self.total_rows
        );

        if !self.excluded.is_empty() {
            warn!("{} row(s) excluded from segmentation:", self.excluded.len());
            for row in &self.excluded {
                warn!("  line {}: {}", row.line, row.reason);
            }
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| Error::ReportWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
