//! Output writers.

mod csv;
pub mod progress;
mod summary;

pub use csv::ObservationWriter;
pub use summary::{EventSummary, summarize_events, write_summary_file};
