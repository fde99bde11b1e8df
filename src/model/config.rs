use std::path::PathBuf;

use crate::input::pattern::FilePattern;

pub const DEFAULT_BEST_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub dir: PathBuf,
    pub pattern: FilePattern,
    pub best_count: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            pattern: FilePattern::default(),
            best_count: DEFAULT_BEST_COUNT,
        }
    }
}
