//! Event identifier assignment.

use std::ops::Range;

use sha2::{Digest, Sha256};

use crate::constants::EVENT_ID_HEX_LEN;
use crate::error::{Error, Result};
use crate::observations::{EventKey, ObservationRecord};

/// What to do when a record already carries an event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistingIdPolicy {
    /// Abort the run on the first record with a non-empty identifier.
    #[default]
    Fail,
    /// Replace any existing identifiers.
    Overwrite,
}

/// Compute the identifier for segment `index` of the group keyed by `key`.
///
/// The identifier is a pure function of the key fields and the zero-based
/// segment index, so reruns on the same input reproduce the same IDs. The
/// key fields are joined with `|`, which cannot appear in a pipe-delimited
/// Camtrap DP identifier, keeping distinct keys from colliding on
/// concatenation.
pub fn event_id(key: &EventKey, index: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.deployment_id.as_bytes());
    hasher.update(b"|");
    hasher.update(key.observation_type.as_bytes());
    hasher.update(b"|");
    hasher.update(key.scientific_name.as_bytes());
    hasher.update(b"|");
    hasher.update(index.to_string().as_bytes());
    let digest = hasher.finalize();

    let mut id = String::with_capacity(EVENT_ID_HEX_LEN);
    for byte in digest.iter().take(EVENT_ID_HEX_LEN.div_ceil(2)) {
        id.push_str(&format!("{byte:02x}"));
    }
    id.truncate(EVENT_ID_HEX_LEN);
    id
}

/// Write event identifiers onto every record of a sorted group.
///
/// Segments are numbered 0, 1, 2, … in the order produced by the segmenter,
/// which is temporal order. Only the `event_id` field is touched. Returns
/// the number of events assigned.
///
/// # Errors
///
/// Returns [`Error::EventIdConflict`] for the first record that already
/// carries an identifier when the policy is [`ExistingIdPolicy::Fail`]; the
/// check runs before any assignment so a failed group is left unmodified.
pub fn assign_event_ids(
    key: &EventKey,
    group: &mut [ObservationRecord],
    segments: &[Range<usize>],
    policy: ExistingIdPolicy,
) -> Result<usize> {
    if policy == ExistingIdPolicy::Fail {
        if let Some(conflict) = group.iter().find(|r| r.existing_event_id.is_some()) {
            return Err(Error::EventIdConflict {
                line: conflict.line,
                existing: conflict
                    .existing_event_id
                    .clone()
                    .unwrap_or_default(),
            });
        }
    }

    for (index, range) in segments.iter().enumerate() {
        let id = event_id(key, index);
        for record in &mut group[range.clone()] {
            record.event_id = Some(id.clone());
        }
    }

    Ok(segments.len())
}
