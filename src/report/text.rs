use crate::model::record::ResultRecord;
use crate::report::format_score;

pub fn render_records_text(records: &[ResultRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("Fitness:  {}\n", format_score(record.score)));
        out.push_str(&record.tree);
        out.push('\n');
        out.push_str(&format!("File:  {}\n", record.source_path));
        out.push('\n');
    }
    out
}
