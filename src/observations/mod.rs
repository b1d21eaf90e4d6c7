//! Observation records and CSV loading.

mod parser;
mod record;

pub use parser::{ColumnMap, ParsedObservations, parse_observations_file};
pub use record::{EventKey, ObservationRecord, SkipReason, SkippedRecord};
