//! Event segmentation core.
//!
//! Observations are partitioned by identity key, sorted in time, cut into
//! segments at gaps exceeding the threshold, and each segment receives a
//! deterministic event identifier. Groups are independent; nothing here
//! performs I/O.

mod assigner;
mod grouper;
mod segmenter;
mod sorter;

pub use assigner::{ExistingIdPolicy, assign_event_ids, event_id};
pub use grouper::group_by_key;
pub use segmenter::{Segments, segments, threshold_from_secs};
pub use sorter::sort_by_start;
