use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::input::InputError;
use crate::model::config::ScanConfig;

/// Lists the entries of `config.dir` whose names match `config.pattern`,
/// sorted by name.
///
/// A missing directory yields no files rather than an error.
pub fn discover_stat_files(config: &ScanConfig) -> Result<Vec<PathBuf>, InputError> {
    let io_err = |source| InputError::Io {
        path: config.dir.clone(),
        source,
    };

    let entries = match fs::read_dir(&config.dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(dir = %config.dir.display(), "scan directory does not exist");
            return Ok(Vec::new());
        }
        Err(err) => return Err(io_err(err)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(io_err)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if config.pattern.matches(name) {
            names.push(name.to_string());
        }
    }
    names.sort();

    Ok(names
        .iter()
        .map(|name| resolve_stat_path(&config.dir, name))
        .collect())
}

pub fn resolve_stat_path(dir: &Path, name: &str) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_discover.rs"]
mod tests;
