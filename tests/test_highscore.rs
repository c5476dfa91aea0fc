use std::fs;
use std::path::PathBuf;

use space_jumper::highscore::*;

/// A path in the temp dir unique to this test and process.
fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "space_jumper_test_{}_{}.json",
        name,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn missing_file_reads_as_zero() {
    let path = temp_path("missing");
    assert_eq!(load_high_score(&path), 0);
}

#[test]
fn save_then_load() {
    let path = temp_path("roundtrip");
    save_high_score(&path, 42).unwrap();
    assert_eq!(load_high_score(&path), 42);
    let _ = fs::remove_file(&path);
}

#[test]
fn file_holds_a_plain_json_integer() {
    let path = temp_path("format");
    save_high_score(&path, 1234).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1234");
    let _ = fs::remove_file(&path);
}

#[test]
fn save_overwrites_previous_value() {
    let path = temp_path("overwrite");
    save_high_score(&path, 9).unwrap();
    save_high_score(&path, 30).unwrap();
    assert_eq!(load_high_score(&path), 30);
    let _ = fs::remove_file(&path);
}

#[test]
fn corrupt_or_negative_file_reads_as_zero() {
    let path = temp_path("corrupt");
    fs::write(&path, "not json").unwrap();
    assert_eq!(load_high_score(&path), 0);
    fs::write(&path, "-5").unwrap();
    assert_eq!(load_high_score(&path), 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn trailing_newline_is_accepted() {
    let path = temp_path("newline");
    fs::write(&path, "17\n").unwrap();
    assert_eq!(load_high_score(&path), 17);
    let _ = fs::remove_file(&path);
}

#[test]
fn save_creates_parent_directories() {
    let dir = temp_path("nested_dir");
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("best.json");
    save_high_score(&path, 3).unwrap();
    assert_eq!(load_high_score(&path), 3);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn record_score_keeps_better_stored_value() {
    let path = temp_path("record_lower");
    save_high_score(&path, 50).unwrap();
    assert_eq!(record_score(&path, 50, 20).unwrap(), 50);
    assert_eq!(record_score(&path, 50, 50).unwrap(), 50);
    assert_eq!(load_high_score(&path), 50);
    let _ = fs::remove_file(&path);
}

#[test]
fn record_score_writes_new_best() {
    let path = temp_path("record_higher");
    save_high_score(&path, 50).unwrap();
    assert_eq!(record_score(&path, 50, 51).unwrap(), 51);
    assert_eq!(load_high_score(&path), 51);
    let _ = fs::remove_file(&path);
}

#[test]
fn record_score_does_not_touch_disk_when_not_better() {
    let path = temp_path("record_untouched");
    assert_eq!(record_score(&path, 10, 3).unwrap(), 10);
    assert!(!path.exists());
}
