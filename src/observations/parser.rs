//! Observations file parsing.
//!
//! Reads a Camtrap DP style observations CSV. Rows with a usable identity
//! key and start timestamp become [`ObservationRecord`]s; rows missing a
//! required value are collected as [`SkippedRecord`]s so the run can report
//! them and still pass them through to the output. Uses the `csv` crate for
//! robust parsing (BOM, quoting, embedded commas).

use std::path::Path;

use csv::StringRecord;

use super::{EventKey, ObservationRecord, SkipReason, SkippedRecord};
use crate::constants::columns;
use crate::error::{Error, Result};
use crate::utils::time::parse_timestamp;

/// Resolved column indices of the observations header.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    /// Index of `deploymentID`.
    pub deployment_id: usize,
    /// Index of `observationType`.
    pub observation_type: usize,
    /// Index of `scientificName`.
    pub scientific_name: usize,
    /// Index of `eventStart`.
    pub event_start: usize,
    /// Index of `eventEnd`, when present.
    pub event_end: Option<usize>,
    /// Index of an existing `eventID` column, when present.
    pub event_id: Option<usize>,
}

/// Result of loading an observations file.
#[derive(Debug)]
pub struct ParsedObservations {
    /// The source header row.
    pub headers: StringRecord,
    /// Resolved column indices.
    pub columns: ColumnMap,
    /// Rows eligible for segmentation.
    pub records: Vec<ObservationRecord>,
    /// Rows excluded from segmentation.
    pub skipped: Vec<SkippedRecord>,
}

/// Parse an observations CSV file.
///
/// Missing required *columns* are a fatal error; missing or malformed
/// required *values* exclude only the affected row.
///
/// Returns empty record and skip lists for an empty or header-only file.
pub fn parse_observations_file(path: &Path) -> Result<ParsedObservations> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::ObservationsRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers = reader
        .headers()
        .map_err(|e| Error::ObservationsRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    let column_map = resolve_columns(&headers, path)?;

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        // Header is line 1, first data row is line 2.
        let line = row_idx as u64 + 2;
        let row = result.map_err(|e| Error::ObservationsRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        match parse_row(&row, column_map) {
            Ok((key, event_start, event_end, existing_event_id)) => {
                records.push(ObservationRecord {
                    line,
                    key,
                    event_start,
                    event_end,
                    existing_event_id,
                    event_id: None,
                    row,
                });
            }
            Err(reason) => skipped.push(SkippedRecord { line, reason, row }),
        }
    }

    Ok(ParsedObservations {
        headers,
        columns: column_map,
        records,
        skipped,
    })
}

/// Resolve required and optional column indices from the header row.
fn resolve_columns(headers: &StringRecord, path: &Path) -> Result<ColumnMap> {
    let find = |name: &str| headers.iter().position(|h| h == name);
    let require = |name: &str| {
        find(name).ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
    };

    Ok(ColumnMap {
        deployment_id: require(columns::DEPLOYMENT_ID)?,
        observation_type: require(columns::OBSERVATION_TYPE)?,
        scientific_name: require(columns::SCIENTIFIC_NAME)?,
        event_start: require(columns::EVENT_START)?,
        event_end: find(columns::EVENT_END),
        event_id: find(columns::EVENT_ID),
    })
}

type ParsedRow = (
    EventKey,
    chrono::DateTime<chrono::Utc>,
    Option<chrono::DateTime<chrono::Utc>>,
    Option<String>,
);

/// Extract key fields and timestamps from one row.
fn parse_row(row: &StringRecord, columns: ColumnMap) -> std::result::Result<ParsedRow, SkipReason> {
    let field = |idx: usize| row.get(idx).unwrap_or("").trim();

    let deployment_id = field(columns.deployment_id);
    if deployment_id.is_empty() {
        return Err(SkipReason::MissingDeploymentId);
    }

    let observation_type = field(columns.observation_type);
    if observation_type.is_empty() {
        return Err(SkipReason::MissingObservationType);
    }

    let start_value = field(columns.event_start);
    if start_value.is_empty() {
        return Err(SkipReason::MissingTimestamp);
    }
    let event_start = parse_timestamp(start_value).ok_or_else(|| SkipReason::MalformedTimestamp {
        value: start_value.to_string(),
    })?;

    // eventEnd is passthrough data for the summary; an unparseable value
    // does not exclude the row.
    let event_end = columns
        .event_end
        .and_then(|idx| parse_timestamp(field(idx)));

    let existing_event_id = columns.event_id.and_then(|idx| {
        let value = field(idx);
        (!value.is_empty()).then(|| value.to_string())
    });

    let key = EventKey {
        deployment_id: deployment_id.to_string(),
        observation_type: observation_type.to_string(),
        scientific_name: field(columns.scientific_name).to_string(),
    };

    Ok((key, event_start, event_end, existing_event_id))
}
