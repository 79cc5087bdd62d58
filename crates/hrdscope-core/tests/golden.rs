use std::fs;
use std::path::{Path, PathBuf};

use hrdscope_core::{AvcTimingHrdDescriptor, Element, display_payload, parse_hex};

fn case_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("golden")
        .join(name)
}

fn load_input(dir: &Path) -> Vec<u8> {
    let text = fs::read_to_string(dir.join("input.hex")).expect("read input.hex");
    parse_hex(&text).expect("valid hex input")
}

fn load_expected_tree(dir: &Path) -> Element {
    let json = fs::read_to_string(dir.join("expected_tree.json")).expect("read expected_tree.json");
    serde_json::from_str(&json).expect("parse expected tree")
}

fn run_golden(name: &str) {
    let dir = case_dir(name);
    let input = load_input(&dir);

    let expected_display =
        fs::read_to_string(dir.join("expected_display.txt")).expect("read expected_display.txt");
    assert_eq!(
        display_payload(&input, 0),
        expected_display,
        "display mismatch in {name}"
    );

    let error_path = dir.join("expected_error.txt");
    if error_path.exists() {
        let expected_error = fs::read_to_string(&error_path).expect("read expected_error.txt");
        let err = AvcTimingHrdDescriptor::deserialize(&input).unwrap_err();
        assert_eq!(err.to_string(), expected_error.trim_end(), "error mismatch in {name}");
        return;
    }

    let desc = AvcTimingHrdDescriptor::deserialize(&input).expect("decode golden input");
    let expected_tree = load_expected_tree(&dir);
    let actual_value = serde_json::to_value(desc.to_text()).expect("serialize actual");
    let expected_value = serde_json::to_value(&expected_tree).expect("serialize expected");
    assert_eq!(actual_value, expected_value, "tree mismatch in {name}");

    let from_tree = AvcTimingHrdDescriptor::from_text(&expected_tree).expect("parse golden tree");
    assert_eq!(from_tree, desc, "text decode mismatch in {name}");
}

#[test]
fn golden_minimal() {
    run_golden("minimal");
}

#[test]
fn golden_full() {
    run_golden("full");
}

#[test]
fn golden_ticks_only() {
    run_golden("ticks_only");
}

#[test]
fn golden_reserved_zero() {
    run_golden("reserved_zero");
}

#[test]
fn golden_truncated() {
    run_golden("truncated");
}

#[test]
fn golden_full_reencodes_byte_exact() {
    let input = load_input(&case_dir("full"));
    let desc = AvcTimingHrdDescriptor::deserialize(&input).expect("decode");
    assert_eq!(desc.serialize(), input);
}

#[test]
fn golden_reserved_zero_reencodes_with_ones() {
    let input = load_input(&case_dir("reserved_zero"));
    let desc = AvcTimingHrdDescriptor::deserialize(&input).expect("decode");
    assert_eq!(desc.serialize(), vec![0x7E, 0xFF]);
}
