//! Identity-key grouping.

use std::collections::BTreeMap;

use crate::observations::{EventKey, ObservationRecord};

/// Partition records into groups sharing an identity key.
///
/// Pure function: no record is dropped or duplicated, and membership depends
/// only on exact equality of the extracted key fields. Within a group,
/// records keep their input order; across groups, the `BTreeMap` fixes a
/// deterministic key order for the rest of the pipeline.
pub fn group_by_key(records: Vec<ObservationRecord>) -> BTreeMap<EventKey, Vec<ObservationRecord>> {
    let mut groups: BTreeMap<EventKey, Vec<ObservationRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.key.clone()).or_default().push(record);
    }
    groups
}
