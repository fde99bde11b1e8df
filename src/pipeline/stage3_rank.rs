use std::cmp::Ordering;

use crate::model::record::ResultRecord;

/// Stable ascending sort by score, truncated to `best_count`.
pub fn rank_records(mut records: Vec<ResultRecord>, best_count: usize) -> Vec<ResultRecord> {
    records.sort_by(|a, b| compare_scores(a.score, b.score));
    records.truncate(best_count);
    records
}

// NaN ranks after every number; -0.0 and 0.0 tie.
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_rank.rs"]
mod tests;
