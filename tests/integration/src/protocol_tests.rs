//! Scenario tests for the command protocol
//!
//! Each test drives the dispatcher with a raw token list and checks the
//! single `<TAG> <json>` line it prints along with the exit status.

use ledger_core::{OutputLine, Tag, run_command};
use ledger_test_utils::TestImageDir;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn run(tokens: &[&str]) -> (i32, Tag, Value) {
    let mut out = Vec::new();
    let code = run_command(tokens, &mut out);
    let text = String::from_utf8(out).unwrap();
    let (tag, value) = OutputLine::parse(&text).unwrap();
    (code, tag, value)
}

#[test]
fn test_export_survives_missing_source() {
    let dir = TestImageDir::with_images(&["p1.png", "p2.png"]);
    dir.write("ledger.csv", b"Page,Filename\r\n1,p1.png\r\n2,gone.png\r\n3,p2.png\r\n");
    let ledger = dir.path_string("ledger.csv");
    let zip_path = dir.path_string("out/export.zip");

    let (code, tag, value) = run(&["export", "-l", &ledger, "-o", &zip_path]);

    assert_eq!(code, 0);
    assert_eq!(tag, Tag::Info);
    assert_eq!(value, json!({"exported": 2, "zip": zip_path}));
}

#[test]
fn test_audit_nonexistent_ledger() {
    let dir = TestImageDir::new();
    let ledger = dir.path_string("missing.csv");

    let (code, tag, value) = run(&["audit", "-l", &ledger]);

    assert_eq!(code, 1);
    assert_eq!(tag, Tag::Error);
    assert_eq!(value, json!({"code": "ledger_not_found", "path": ledger}));
}

#[test]
fn test_audit_is_idempotent() {
    let dir = TestImageDir::with_images(&["a.png", "b.png"]);
    run(&["index", dir.root_str()]);
    dir.touch("c.png");
    let ledger = dir.path_string("ledger.csv");

    let first = run(&["audit", "-l", &ledger]);
    let second = run(&["audit", "-l", &ledger]);

    assert_eq!(first, second);
    assert_eq!(first.2, json!({"missing": [], "extra": ["c.png"]}));
}

#[test]
fn test_dangling_ledger_flag_reports_null_path() {
    let (code, _, value) = run(&["audit", "-l"]);

    assert_eq!(code, 1);
    assert_eq!(value, json!({"code": "ledger_not_found", "path": null}));
}

#[test]
fn test_first_flag_occurrence_wins() {
    let first = TestImageDir::with_images(&["a.png"]);
    let second = TestImageDir::with_images(&["b.png"]);
    run(&["index", first.root_str()]);
    run(&["index", second.root_str()]);
    let first_ledger = first.path_string("ledger.csv");
    let second_ledger = second.path_string("ledger.csv");

    let (_, _, value) = run(&["audit", "-l", &first_ledger, "-l", &second_ledger]);

    assert_eq!(value, json!({"missing": [], "extra": []}));
    let (_, _, cross) = run(&["audit", "-l", &first_ledger, "-d", second.root_str()]);
    assert_eq!(cross, json!({"missing": ["a.png"], "extra": ["b.png"]}));
}

#[test]
fn test_index_without_directory_is_bad_args() {
    let (code, tag, value) = run(&["index"]);

    assert_eq!(code, 1);
    assert_eq!(tag, Tag::Error);
    assert_eq!(value, json!({"code": "bad_args", "hint": "index <dir> [-o ledger.csv]"}));
}
