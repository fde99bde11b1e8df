use super::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("gp_beststat_scan_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn best_block(score: &str, tree: &str) -> String {
    format!(
        "Best Individual of Run:\nSubpopulation 0:\nEvaluated: true\nFitness: Standardized={score} Adjusted=0.5 Hits=4\nTree 0:\n{tree}\n"
    )
}

fn scan_text(dir: &Path) -> Result<String, ScanError> {
    let config = ScanConfig {
        dir: dir.to_path_buf(),
        ..ScanConfig::default()
    };
    let mut out = Vec::new();
    run_scan(&config, ReportFormat::Text, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_end_to_end_single_file() {
    let dir = make_temp_dir();
    let contents = format!(
        "{}\nGeneration: 3\nBest Individual:\nSubpopulation 0:\nFitness: Standardized=0.1\n(* x x)\n",
        best_block("2.0", "tree-A")
    );
    fs::write(dir.join("job.1.out.stat"), contents).unwrap();

    let out = scan_text(&dir).unwrap();
    let path = dir.join("job.1.out.stat");
    assert_eq!(
        out,
        format!("Fitness:  2.0\ntree-A\nFile:  {}\n\n", path.display())
    );
}

#[test]
fn test_no_matching_files_prints_nothing() {
    let dir = make_temp_dir();
    fs::write(dir.join("job.out.stat"), best_block("1.0", "t")).unwrap();
    fs::write(dir.join("notes.txt"), best_block("1.0", "t")).unwrap();
    assert_eq!(scan_text(&dir).unwrap(), "");
}

#[test]
fn test_ranks_across_files_and_truncates_to_five() {
    let dir = make_temp_dir();
    fs::write(
        dir.join("job.1.out.stat"),
        format!("{}\n{}", best_block("5.0", "worst-tree"), best_block("1.0", "t1")),
    )
    .unwrap();
    fs::write(
        dir.join("job.2.out.stat"),
        format!(
            "{}\n{}\n{}",
            best_block("3.0", "t3"),
            best_block("2.0", "t2"),
            best_block("4.0", "t4")
        ),
    )
    .unwrap();
    fs::write(dir.join("job.3.out.stat"), best_block("0.5", "t05")).unwrap();

    let out = scan_text(&dir).unwrap();
    let fitness: Vec<&str> = out
        .lines()
        .filter_map(|line| line.strip_prefix("Fitness:  "))
        .collect();
    assert_eq!(fitness, vec!["0.5", "1.0", "2.0", "3.0", "4.0"]);
    assert_eq!(out.lines().count(), 20);
    assert!(!out.contains("worst-tree"));
}

#[test]
fn test_malformed_fitness_aborts_without_output() {
    let dir = make_temp_dir();
    fs::write(dir.join("job.1.out.stat"), best_block("1.0", "good")).unwrap();
    fs::write(dir.join("job.2.out.stat"), best_block("abc", "bad")).unwrap();

    let config = ScanConfig {
        dir: dir.clone(),
        ..ScanConfig::default()
    };
    let mut out = Vec::new();
    let err = run_scan(&config, ReportFormat::Text, &mut out).unwrap_err();
    assert!(matches!(err, ScanError::Input(InputError::Parse { .. })));
    assert!(out.is_empty());
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_rescan_is_idempotent() {
    let dir = make_temp_dir();
    for (i, score) in ["1.0", "1.0", "0.25"].iter().enumerate() {
        fs::write(
            dir.join(format!("job.{i}.out.stat")),
            best_block(score, &format!("tree-{i}")),
        )
        .unwrap();
    }
    let first = scan_text(&dir).unwrap();
    let second = scan_text(&dir).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("Fitness:  0.25\ntree-2\n"));
}

#[test]
fn test_json_format_matches_text_order() {
    let dir = make_temp_dir();
    fs::write(
        dir.join("job.1.out.stat"),
        format!("{}\n{}", best_block("2.0", "b"), best_block("1.0", "a")),
    )
    .unwrap();
    let config = ScanConfig {
        dir: dir.clone(),
        ..ScanConfig::default()
    };
    let mut out = Vec::new();
    run_scan(&config, ReportFormat::Json, &mut out).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed[0]["tree"], "a");
    assert_eq!(parsed[1]["tree"], "b");
}
