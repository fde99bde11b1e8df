use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

pub mod pattern;
pub mod stat;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {} (block {block}): {reason}", .path.display())]
    Parse {
        path: PathBuf,
        block: usize,
        #[source]
        reason: ParseFailure,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ParseFailure {
    #[error("expected a fitness line as the 4th non-empty line, block has only {lines}")]
    MissingFitnessLine { lines: usize },
    #[error("fitness line has fewer than 2 space-separated tokens: {line:?}")]
    MissingFitnessToken { line: String },
    #[error("fitness token {token:?} does not start with {prefix:?}", prefix = stat::STANDARDIZED_PREFIX)]
    MissingPrefix { token: String },
    #[error("invalid fitness value {value:?}: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

pub fn read_stat_text(path: &Path) -> Result<String, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_newlines(raw))
}

// Universal newlines: "\r\n" and lone "\r" both become "\n".
pub fn normalize_newlines(raw: String) -> String {
    if !raw.contains('\r') {
        return raw;
    }
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
