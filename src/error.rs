//! Error types for camevents.

/// Result type alias for camevents operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for camevents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Gap threshold is outside the accepted range.
    #[error("invalid gap threshold {value}: {reason}")]
    InvalidThreshold {
        /// The rejected threshold value in seconds.
        value: f64,
        /// Description of why the value was rejected.
        reason: String,
    },

    /// Failed to open or read the observations file.
    #[error("failed to read observations file '{path}'")]
    ObservationsRead {
        /// Path to the observations file.
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A required column is missing from the observations header.
    #[error("observations file '{path}' is missing required column '{column}'")]
    MissingColumn {
        /// Path to the observations file.
        path: std::path::PathBuf,
        /// Name of the missing column.
        column: String,
    },

    /// Failed to write a CSV output file.
    #[error("failed to write CSV file '{path}'")]
    CsvWrite {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A record already carries an event identifier.
    #[error(
        "record at line {line} already has eventID '{existing}' (pass --overwrite-ids to replace existing identifiers)"
    )]
    EventIdConflict {
        /// 1-based line number of the conflicting record in the source file.
        line: u64,
        /// The identifier already present on the record.
        existing: String,
    },

    /// Output path equals the input path without explicit confirmation.
    #[error("output path '{path}' equals the input path (pass --in-place to overwrite the source)")]
    InPlaceNotConfirmed {
        /// The shared input/output path.
        path: std::path::PathBuf,
    },

    /// Failed to write the run report.
    #[error("failed to write run report '{path}'")]
    ReportWrite {
        /// Path to the report file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
