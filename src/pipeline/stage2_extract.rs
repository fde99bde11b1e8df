use std::path::PathBuf;

use crate::input::stat::extract_records;
use crate::input::{InputError, read_stat_text};
use crate::model::record::ResultRecord;

pub fn run_stage2(paths: &[PathBuf]) -> Result<Vec<ResultRecord>, InputError> {
    let mut records = Vec::new();
    for path in paths {
        let text = read_stat_text(path)?;
        let extracted = extract_records(&text, path)?;
        tracing::info!(
            path = %path.display(),
            records = extracted.len(),
            "extracted best-of-run records"
        );
        records.extend(extracted);
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_extract.rs"]
mod tests;
