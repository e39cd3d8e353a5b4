//! JSON output of a finished run.

use crate::models::{ExtractionResult, HeadlineReport};
use chrono::Local;
use std::error::Error;
use std::io::Write;
use tracing::{info, instrument};

/// Wrap a run's headlines in a [`HeadlineReport`] stamped with the current local time.
pub fn build_report(source_id: &str, headlines: ExtractionResult) -> HeadlineReport {
    HeadlineReport {
        source: source_id.to_string(),
        fetched_at: Local::now().to_rfc3339(),
        headlines,
    }
}

/// Write `report` as pretty-printed JSON followed by a newline.
#[instrument(level = "info", skip_all, fields(source = %report.source))]
pub fn write_report<W: Write>(
    out: &mut W,
    report: &HeadlineReport,
) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    info!(count = report.headlines.len(), "Wrote JSON report");
    Ok(())
}
