use std::io::Write;

use crate::model::record::ResultRecord;
use crate::pipeline::ScanError;
use crate::report::json::render_records_json;
use crate::report::text::render_records_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render_report(records: &[ResultRecord], format: ReportFormat) -> Result<String, ScanError> {
    match format {
        ReportFormat::Text => Ok(render_records_text(records)),
        ReportFormat::Json => Ok(render_records_json(records)?),
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    records: &[ResultRecord],
    format: ReportFormat,
) -> Result<(), ScanError> {
    let rendered = render_report(records, format)?;
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(ScanError::Output)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
