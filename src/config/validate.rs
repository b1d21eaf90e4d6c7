//! Configuration validation.
//!
//! Threshold problems are configuration errors and must fail before any
//! group is processed, never be clamped.

use crate::config::Config;
use crate::constants::MAX_THRESHOLD_SECS;
use crate::error::{Error, Result};

/// Validate a gap threshold in seconds.
///
/// Accepted values are finite, strictly positive, and at most one year.
pub fn validate_threshold(secs: f64) -> Result<()> {
    if !secs.is_finite() {
        return Err(Error::InvalidThreshold {
            value: secs,
            reason: "must be a finite number".to_string(),
        });
    }
    if secs <= 0.0 {
        return Err(Error::InvalidThreshold {
            value: secs,
            reason: "must be greater than zero".to_string(),
        });
    }
    if secs > MAX_THRESHOLD_SECS {
        return Err(Error::InvalidThreshold {
            value: secs,
            reason: format!("must be at most {MAX_THRESHOLD_SECS} seconds (one year)"),
        });
    }
    Ok(())
}

/// Validate a loaded configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_threshold(config.defaults.threshold_secs)
}
