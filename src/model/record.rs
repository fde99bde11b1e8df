use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub score: f64,
    pub tree: String,
    pub source_path: String,
}

impl ResultRecord {
    pub fn new(score: f64, tree: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            score,
            tree: tree.into(),
            source_path: source_path.into(),
        }
    }
}
