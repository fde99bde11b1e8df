use std::fmt;

/// File name pattern with exactly one `*` wildcard.
///
/// `*` matches any run of characters, the empty run included, but the literal
/// prefix and suffix may not share characters: `job.*.out.stat` does not match
/// `job.out.stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePattern {
    prefix: &'static str,
    suffix: &'static str,
}

impl FilePattern {
    pub fn matches(&self, name: &str) -> bool {
        name.len() >= self.prefix.len() + self.suffix.len()
            && name.starts_with(self.prefix)
            && name.ends_with(self.suffix)
    }
}

impl Default for FilePattern {
    fn default() -> Self {
        Self {
            prefix: "job.",
            suffix: ".out.stat",
        }
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/pattern.rs"]
mod tests;
