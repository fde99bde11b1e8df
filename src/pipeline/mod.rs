use std::io::Write;

use crate::input::InputError;
use crate::model::config::ScanConfig;

pub mod stage1_discover;
pub mod stage2_extract;
pub mod stage3_rank;
pub mod stage4_report;

use stage1_discover::discover_stat_files;
use stage2_extract::run_stage2;
use stage3_rank::rank_records;
use stage4_report::{ReportFormat, write_report};

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

/// Runs discover, extract, rank and report in order.
///
/// Nothing is written to `out` unless every matching file parsed cleanly.
pub fn run_scan<W: Write>(
    config: &ScanConfig,
    format: ReportFormat,
    out: &mut W,
) -> Result<(), ScanError> {
    let paths = discover_stat_files(config)?;
    tracing::info!(
        dir = %config.dir.display(),
        pattern = %config.pattern,
        files = paths.len(),
        "discovered stat files"
    );

    let records = run_stage2(&paths)?;
    let best = rank_records(records, config.best_count);
    write_report(out, &best, format)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
