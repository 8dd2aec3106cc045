use std::fs;
use std::path::{Path, PathBuf};

use splicedump_core::{Pattern, decode_file};

fn golden_dir(case: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("golden")
        .join(case)
}

fn load_expected_pattern(dir: &Path) -> Pattern {
    let expected_json =
        fs::read_to_string(dir.join("expected.json")).expect("read expected.json");
    serde_json::from_str(&expected_json).expect("parse expected pattern")
}

fn run_golden(case: &str) {
    let dir = golden_dir(case);
    let expected = load_expected_pattern(&dir);
    let expected_text = fs::read_to_string(dir.join("expected.txt")).expect("read expected.txt");

    let actual = decode_file(&dir.join("input.splice")).expect("decode splice");

    assert_eq!(actual, expected, "golden pattern mismatch in {case}");
    assert_eq!(
        actual.to_string(),
        expected_text,
        "golden printout mismatch in {case}"
    );
}

#[test]
fn golden_pattern_1() {
    run_golden("pattern_1");
}

#[test]
fn golden_pattern_2() {
    run_golden("pattern_2");
}

#[test]
fn golden_pattern_empty() {
    run_golden("pattern_empty");
}

#[test]
fn golden_pattern_trailing() {
    run_golden("pattern_trailing");
}

#[test]
fn golden_pattern_1_has_four_tracks() {
    let pattern = decode_file(&golden_dir("pattern_1").join("input.splice")).expect("decode");
    assert_eq!(pattern.version, "0.808-alpha");
    assert_eq!(pattern.tempo, 120.0);
    let names: Vec<&str> = pattern.tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["kick", "snare", "clap", "hh-open"]);
}

#[test]
fn golden_trailing_blob_is_ignored() {
    let trailing = decode_file(&golden_dir("pattern_trailing").join("input.splice"))
        .expect("decode trailing");
    let plain = decode_file(&golden_dir("pattern_1").join("input.splice")).expect("decode plain");
    assert_eq!(trailing, plain);
}
