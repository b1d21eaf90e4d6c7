//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "camevents";

/// Default gap threshold between observations in the same event, in seconds.
pub const DEFAULT_THRESHOLD_SECS: f64 = 180.0;

/// Maximum accepted gap threshold in seconds (one year).
///
/// Thresholds beyond this are almost certainly a unit mistake and are
/// rejected up front rather than silently producing one giant event per
/// group.
pub const MAX_THRESHOLD_SECS: f64 = 31_536_000.0;

/// Fallback input file when neither the CLI nor the config names one.
pub const DEFAULT_INPUT: &str = "output/observations.csv";

/// Number of hex characters in a generated event identifier.
pub const EVENT_ID_HEX_LEN: usize = 8;

/// Column names of the observations table.
pub mod columns {
    /// Deployment identifier column.
    pub const DEPLOYMENT_ID: &str = "deploymentID";
    /// Observation type column.
    pub const OBSERVATION_TYPE: &str = "observationType";
    /// Scientific name column.
    pub const SCIENTIFIC_NAME: &str = "scientificName";
    /// Observation start timestamp column.
    pub const EVENT_START: &str = "eventStart";
    /// Observation end timestamp column.
    pub const EVENT_END: &str = "eventEnd";
    /// Assigned event identifier column.
    pub const EVENT_ID: &str = "eventID";
}

/// Column names of the optional event summary table.
pub mod summary_columns {
    /// Event identifier.
    pub const EVENT_ID: &str = "eventID";
    /// Deployment identifier.
    pub const DEPLOYMENT_ID: &str = "deploymentID";
    /// Observation type.
    pub const OBSERVATION_TYPE: &str = "observationType";
    /// Scientific name.
    pub const SCIENTIFIC_NAME: &str = "scientificName";
    /// Earliest observation start in the event.
    pub const EVENT_START: &str = "eventStart";
    /// Latest observation end in the event.
    pub const EVENT_END: &str = "eventEnd";
    /// Number of observations in the event.
    pub const OBSERVATION_COUNT: &str = "observationCount";
}

/// UTF-8 Byte Order Mark for Excel compatibility in CSV files.
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";
