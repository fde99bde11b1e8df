use std::path::Path;

use crate::input::{InputError, ParseFailure};
use crate::model::record::ResultRecord;

pub const BLOCK_SEPARATOR: &str = "\n\n";
pub const BEST_INDIVIDUAL_HEADER: &str = "Best Individual of Run:";
pub const STANDARDIZED_PREFIX: &str = "Standardized=";
const FITNESS_LINE_INDEX: usize = 3;

/// Extracts one record per `Best Individual of Run:` block of a job stat file.
///
/// Any other block kind is skipped. A qualifying block whose fitness line
/// cannot be parsed aborts the whole file with [`InputError::Parse`].
pub fn extract_records(text: &str, source: &Path) -> Result<Vec<ResultRecord>, InputError> {
    let mut records = Vec::new();

    for (block_idx, block) in text.split(BLOCK_SEPARATOR).enumerate() {
        if block.is_empty() {
            continue;
        }
        let lines: Vec<&str> = block.split('\n').filter(|line| !line.is_empty()).collect();
        let (Some(&header), Some(&tree)) = (lines.first(), lines.last()) else {
            continue;
        };
        if header != BEST_INDIVIDUAL_HEADER {
            tracing::debug!(
                path = %source.display(),
                block = block_idx,
                header,
                "skipping block"
            );
            continue;
        }

        let score = parse_fitness(&lines).map_err(|reason| InputError::Parse {
            path: source.to_path_buf(),
            block: block_idx,
            reason,
        })?;
        records.push(ResultRecord::new(score, tree, source.display().to_string()));
    }

    Ok(records)
}

pub fn parse_fitness(lines: &[&str]) -> Result<f64, ParseFailure> {
    let line = lines
        .get(FITNESS_LINE_INDEX)
        .ok_or(ParseFailure::MissingFitnessLine { lines: lines.len() })?;
    // Single-space split: runs of spaces yield empty tokens.
    let token = line
        .split(' ')
        .nth(1)
        .ok_or_else(|| ParseFailure::MissingFitnessToken {
            line: line.to_string(),
        })?;
    let value = token
        .strip_prefix(STANDARDIZED_PREFIX)
        .ok_or_else(|| ParseFailure::MissingPrefix {
            token: token.to_string(),
        })?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| ParseFailure::InvalidNumber {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/stat.rs"]
mod tests;
