use crate::model::record::ResultRecord;

// serde_json writes non-finite scores as `null`.
pub fn render_records_json(records: &[ResultRecord]) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(records)?;
    out.push('\n');
    Ok(out)
}
