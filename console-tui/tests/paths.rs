use std::fs;
use std::path::PathBuf;

use console_tui::paths::{MAX_OLD_LOGS, rotate_logs_in};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("console-paths-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn log_names(dir: &PathBuf) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_latest_log_is_archived() {
    let dir = scratch_dir("archive");
    fs::write(dir.join("latest.log"), "previous run").unwrap();

    rotate_logs_in(&dir);

    let names = log_names(&dir);
    assert_eq!(names.len(), 1);
    assert_ne!(names[0], "latest.log");
    assert!(names[0].ends_with(".log"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_old_logs_are_pruned() {
    let dir = scratch_dir("prune");
    for i in 0..MAX_OLD_LOGS + 5 {
        fs::write(dir.join(format!("20240101_0000{:02}.log", i)), "").unwrap();
    }
    fs::write(dir.join("notes.txt"), "keep").unwrap();

    rotate_logs_in(&dir);

    let names = log_names(&dir);
    assert!(names.contains(&"notes.txt".to_string()));
    let logs: Vec<_> = names.iter().filter(|n| n.ends_with(".log")).collect();
    assert_eq!(logs.len(), MAX_OLD_LOGS);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_dir_is_ignored() {
    let dir = std::env::temp_dir().join(format!("console-paths-missing-{}", std::process::id()));
    rotate_logs_in(&dir);
    assert!(!dir.exists());
}

#[test]
fn test_open_log_starts_fresh_file() {
    let dir = std::env::temp_dir().join(format!("console-paths-open-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("latest.log"), "old").unwrap();

    let file = console_tui::paths::open_log_in(&dir).unwrap();
    drop(file);

    assert_eq!(fs::read_to_string(dir.join("latest.log")).unwrap(), "");
    assert_eq!(log_names(&dir).len(), 2);
    fs::remove_dir_all(&dir).unwrap();
}
