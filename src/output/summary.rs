//! Per-event summary output.
//!
//! One row per event: identity key, temporal extent, and observation count.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::constants::{UTF8_BOM, summary_columns};
use crate::error::{Error, Result};
use crate::observations::{EventKey, ObservationRecord};
use crate::utils::time::format_utc;

/// Aggregated view of one event.
#[derive(Debug, Clone)]
pub struct EventSummary {
    /// The assigned event identifier.
    pub event_id: String,
    /// Identity key of the group the event belongs to.
    pub key: EventKey,
    /// Earliest observation start in the event.
    pub start: DateTime<Utc>,
    /// Latest observation end in the event; an observation without an end
    /// timestamp contributes its start instead.
    pub end: DateTime<Utc>,
    /// Number of observations in the event.
    pub observation_count: usize,
}

/// Build summaries for a sorted group whose identifiers have been assigned.
pub fn summarize_events(group: &[ObservationRecord], segments: &[Range<usize>]) -> Vec<EventSummary> {
    segments
        .iter()
        .filter_map(|range| {
            let records = &group[range.clone()];
            let first = records.first()?;
            let end = records
                .iter()
                .map(|r| r.event_end.unwrap_or(r.event_start))
                .max()
                .unwrap_or(first.event_start);

            Some(EventSummary {
                event_id: first.event_id.clone().unwrap_or_default(),
                key: first.key.clone(),
                start: first.event_start,
                end,
                observation_count: records.len(),
            })
        })
        .collect()
}

/// Write the summary CSV. An empty summary still produces a header row.
pub fn write_summary_file(path: &Path, summaries: &[EventSummary], bom: bool) -> Result<()> {
    let file = File::create(path)?;
    let mut buffered = BufWriter::new(file);
    if bom {
        buffered.write_all(UTF8_BOM)?;
    }

    let mut writer = csv::Writer::from_writer(buffered);
    let wrap = |e| Error::CsvWrite {
        path: path.to_path_buf(),
        source: e,
    };

    writer
        .write_record([
            summary_columns::EVENT_ID,
            summary_columns::DEPLOYMENT_ID,
            summary_columns::OBSERVATION_TYPE,
            summary_columns::SCIENTIFIC_NAME,
            summary_columns::EVENT_START,
            summary_columns::EVENT_END,
            summary_columns::OBSERVATION_COUNT,
        ])
        .map_err(wrap)?;

    for summary in summaries {
        writer
            .write_record([
                summary.event_id.as_str(),
                summary.key.deployment_id.as_str(),
                summary.key.observation_type.as_str(),
                summary.key.scientific_name.as_str(),
                &format_utc(summary.start),
                &format_utc(summary.end),
                &summary.observation_count.to_string(),
            ])
            .map_err(wrap)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use csv::StringRecord;
    use tempfile::NamedTempFile;

    fn at(m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, m, s).unwrap()
    }

    fn make_group() -> Vec<ObservationRecord> {
        let key = EventKey {
            deployment_id: "dep1".to_string(),
            observation_type: "animal".to_string(),
            scientific_name: "Vulpes vulpes".to_string(),
        };
        let make = |line, start, end: Option<DateTime<Utc>>, id: &str| ObservationRecord {
            line,
            key: key.clone(),
            event_start: start,
            event_end: end,
            existing_event_id: None,
            event_id: Some(id.to_string()),
            row: StringRecord::new(),
        };
        vec![
            make(2, at(0, 0), Some(at(0, 12)), "ev0"),
            make(3, at(1, 0), Some(at(1, 4)), "ev0"),
            make(4, at(10, 0), None, "ev1"),
        ]
    }

    #[test]
    fn test_summarize_extents_and_counts() {
        let group = make_group();
        let summaries = summarize_events(&group, &[0..2, 2..3]);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].event_id, "ev0");
        assert_eq!(summaries[0].observation_count, 2);
        assert_eq!(summaries[0].start, at(0, 0));
        assert_eq!(summaries[0].end, at(1, 4));

        // Missing eventEnd falls back to the start timestamp.
        assert_eq!(summaries[1].end, at(10, 0));
        assert_eq!(summaries[1].observation_count, 1);
    }

    #[test]
    fn test_write_summary_file() {
        let group = make_group();
        let summaries = summarize_events(&group, &[0..2, 2..3]);

        let file = NamedTempFile::new().unwrap();
        write_summary_file(file.path(), &summaries, false).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "eventID,deploymentID,observationType,scientificName,eventStart,eventEnd,observationCount"
        );
        assert_eq!(
            lines[1],
            "ev0,dep1,animal,Vulpes vulpes,2024-06-01T10:00:00Z,2024-06-01T10:01:04Z,2"
        );
        assert_eq!(
            lines[2],
            "ev1,dep1,animal,Vulpes vulpes,2024-06-01T10:10:00Z,2024-06-01T10:10:00Z,1"
        );
    }

    #[test]
    fn test_empty_summary_writes_header_only() {
        let file = NamedTempFile::new().unwrap();
        write_summary_file(file.path(), &[], false).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
