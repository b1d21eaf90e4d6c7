//! In-group temporal ordering.

use crate::observations::ObservationRecord;

/// Sort a group by ascending start timestamp.
///
/// The sort is stable: records with equal timestamps keep their original
/// input order, so segment boundaries are reproducible across reruns on the
/// same input.
pub fn sort_by_start(group: &mut [ObservationRecord]) {
    group.sort_by_key(|record| record.event_start);
}
