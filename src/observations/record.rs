//! Observation record types.

use chrono::{DateTime, Utc};
use csv::StringRecord;

/// Identity key deciding which observations may share an event.
///
/// Two records belong to the same group only if all three fields compare
/// exactly equal as extracted from the source file. An empty scientific name
/// is a valid key component and forms its own group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventKey {
    /// Deployment identifier.
    pub deployment_id: String,
    /// Observation type (e.g. "animal", "human", "blank", "vehicle").
    pub observation_type: String,
    /// Scientific name of the observed subject; may be empty.
    pub scientific_name: String,
}

/// A single observation row with its parsed key fields and timestamps.
///
/// The full source row is carried alongside the parsed fields so the writer
/// can reproduce every column untouched.
#[derive(Debug, Clone)]
pub struct ObservationRecord {
    /// 1-based line number in the source file (the header is line 1).
    pub line: u64,
    /// Identity key extracted from the row.
    pub key: EventKey,
    /// Observation start timestamp.
    pub event_start: DateTime<Utc>,
    /// Observation end timestamp, when present and parseable.
    pub event_end: Option<DateTime<Utc>>,
    /// Event identifier already present in the source file, if non-empty.
    pub existing_event_id: Option<String>,
    /// Event identifier assigned by this run.
    pub event_id: Option<String>,
    /// The unmodified source row.
    pub row: StringRecord,
}

/// Why a row was excluded from segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The deployment identifier field is empty.
    MissingDeploymentId,
    /// The observation type field is empty.
    MissingObservationType,
    /// The start timestamp field is empty.
    MissingTimestamp,
    /// The start timestamp could not be parsed.
    MalformedTimestamp {
        /// The unparseable value.
        value: String,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDeploymentId => write!(f, "missing deploymentID"),
            Self::MissingObservationType => write!(f, "missing observationType"),
            Self::MissingTimestamp => write!(f, "missing eventStart"),
            Self::MalformedTimestamp { value } => {
                write!(f, "unparseable eventStart '{value}'")
            }
        }
    }
}

/// A row excluded from segmentation, kept for the output and the run report.
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Why the row was excluded.
    pub reason: SkipReason,
    /// The unmodified source row.
    pub row: StringRecord,
}
