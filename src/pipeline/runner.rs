//! Run orchestration.
//!
//! Validates the configuration, loads the observations file, and drives the
//! core per group: sort, segment, assign. All groups funnel into a single
//! writer, so no coordination between groups is needed; processing a group
//! touches nothing outside its own record list.

use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::validate_threshold;
use crate::error::{Error, Result};
use crate::events::{
    ExistingIdPolicy, assign_event_ids, group_by_key, segments, sort_by_start, threshold_from_secs,
};
use crate::observations::parse_observations_file;
use crate::output::{
    EventSummary, ObservationWriter, progress, summarize_events, write_summary_file,
};
use crate::pipeline::report::{ExcludedRow, RunReport};

/// Options for one event ID assignment run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Input observations CSV.
    pub input: PathBuf,
    /// Output destination; may equal the input when `in_place` is set.
    pub output: PathBuf,
    /// Optional per-event summary CSV destination.
    pub summary: Option<PathBuf>,
    /// Optional JSON run report destination.
    pub report: Option<PathBuf>,
    /// Gap threshold in seconds.
    pub threshold_secs: f64,
    /// What to do with event IDs already present in the input.
    pub policy: ExistingIdPolicy,
    /// Confirmation that overwriting the input file is intended.
    pub in_place: bool,
    /// Prefix CSV output with a UTF-8 BOM.
    pub csv_bom: bool,
    /// Show a progress bar over groups.
    pub progress: bool,
}

/// Run the full pipeline: load, group, sort, segment, assign, write.
///
/// Configuration errors (threshold, in-place confirmation) fail before any
/// record is touched. Row-level problems never abort the run; they are
/// collected into the returned [`RunReport`].
pub fn run_pipeline(options: &RunOptions) -> Result<RunReport> {
    validate_threshold(options.threshold_secs)?;
    let threshold = threshold_from_secs(options.threshold_secs)?;

    if paths_collide(&options.input, &options.output) && !options.in_place {
        return Err(Error::InPlaceNotConfirmed {
            path: options.output.clone(),
        });
    }

    info!(
        "Assigning event IDs: {} -> {} (threshold {}s)",
        options.input.display(),
        options.output.display(),
        options.threshold_secs
    );

    // The input is fully loaded before the output file is created, so an
    // in-place run never reads a partially written file.
    let parsed = parse_observations_file(&options.input)?;
    let total_rows = parsed.records.len() + parsed.skipped.len();
    debug!(
        "Loaded {} row(s): {} eligible, {} excluded",
        total_rows,
        parsed.records.len(),
        parsed.skipped.len()
    );

    // Conflicts must surface before the writer truncates the output;
    // otherwise a failed in-place run would destroy the source file.
    if options.policy == ExistingIdPolicy::Fail {
        if let Some(conflict) = parsed
            .records
            .iter()
            .find(|r| r.existing_event_id.is_some())
        {
            return Err(Error::EventIdConflict {
                line: conflict.line,
                existing: conflict.existing_event_id.clone().unwrap_or_default(),
            });
        }
    }

    let groups = group_by_key(parsed.records);
    let group_count = groups.len();
    let bar = progress::create_group_progress(group_count, options.progress);

    let mut writer = ObservationWriter::create(
        &options.output,
        &parsed.headers,
        parsed.columns.event_id,
        options.csv_bom,
    )?;

    let mut segmented_rows = 0;
    let mut event_count = 0;
    let mut summaries: Vec<EventSummary> = Vec::new();

    for (key, mut group) in groups {
        sort_by_start(&mut group);
        let ranges: Vec<Range<usize>> = segments(&group, threshold).collect();
        event_count += assign_event_ids(&key, &mut group, &ranges, options.policy)?;

        if options.summary.is_some() {
            summaries.extend(summarize_events(&group, &ranges));
        }

        for record in &group {
            writer.write_row(&record.row, record.event_id.as_deref())?;
            segmented_rows += 1;
        }
        progress::inc_progress(bar.as_ref());
    }

    // Excluded rows pass through with an empty eventID, after all groups.
    for skipped in &parsed.skipped {
        writer.write_row(&skipped.row, None)?;
    }
    writer.finish()?;
    progress::finish_progress(bar, "Complete");

    if let Some(summary_path) = &options.summary {
        write_summary_file(summary_path, &summaries, options.csv_bom)?;
        info!(
            "Wrote {} event(s) to summary {}",
            summaries.len(),
            summary_path.display()
        );
    }

    let report = RunReport {
        total_rows,
        segmented_rows,
        groups: group_count,
        events: event_count,
        excluded: parsed.skipped.iter().map(ExcludedRow::from).collect(),
    };

    if let Some(report_path) = &options.report {
        report.write_json(report_path)?;
    }

    Ok(report)
}

/// Whether the output would overwrite the input.
///
/// Falls back to literal path comparison when the output does not exist yet.
fn paths_collide(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (std::fs::canonicalize(input), std::fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
