//! Gap-based segmentation of a time-sorted group.

use std::ops::Range;
use std::time::Duration;

use chrono::TimeDelta;

use crate::constants::MAX_THRESHOLD_SECS;
use crate::error::{Error, Result};
use crate::observations::ObservationRecord;

/// Convert a threshold in seconds to a [`TimeDelta`].
///
/// The value must already have passed configuration validation; this only
/// guards the chrono range conversion itself.
pub fn threshold_from_secs(secs: f64) -> Result<TimeDelta> {
    if !secs.is_finite() || secs < 0.0 || secs > MAX_THRESHOLD_SECS {
        return Err(Error::InvalidThreshold {
            value: secs,
            reason: "outside the representable range".to_string(),
        });
    }
    TimeDelta::from_std(Duration::from_secs_f64(secs)).map_err(|_| Error::InvalidThreshold {
        value: secs,
        reason: "outside the representable range".to_string(),
    })
}

/// Lazy iterator over the segments of a time-sorted group.
///
/// Each item is an index range into the group slice. Segments are maximal
/// runs in which every gap between consecutive records is at most the
/// threshold; the gap is always measured to the immediately preceding
/// record, not to the segment's first record, so a steady stream of
/// near-threshold detections stays one event.
#[derive(Debug)]
pub struct Segments<'a> {
    group: &'a [ObservationRecord],
    threshold: TimeDelta,
    pos: usize,
}

impl Iterator for Segments<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.pos >= self.group.len() {
            return None;
        }

        let start = self.pos;
        let mut end = start + 1;
        while end < self.group.len() {
            let gap = self.group[end].event_start - self.group[end - 1].event_start;
            if gap > self.threshold {
                break;
            }
            end += 1;
        }

        self.pos = end;
        Some(start..end)
    }
}

/// Cut a time-sorted group into segments separated by gaps over `threshold`.
///
/// Single linear scan, O(n) for a group of n records. The input must be
/// sorted ascending by start timestamp (see [`super::sort_by_start`]).
pub fn segments(group: &[ObservationRecord], threshold: TimeDelta) -> Segments<'_> {
    Segments {
        group,
        threshold,
        pos: 0,
    }
}
