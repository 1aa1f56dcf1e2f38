//! Integration tests for the invox CLI.

use assert_cmd::Command;
use predicates::prelude::*;

fn invox() -> Command {
    Command::cargo_bin("invox").unwrap()
}

#[test]
fn parse_outputs_json_updates() {
    invox()
        .args(["parse", "client email jay12@gmail.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""client.email":"jay12@gmail.com""#,
        ));
}

#[test]
fn parse_unrecognized_yields_empty_outcome() {
    invox()
        .args(["parse", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""updates":{}"#))
        .stdout(predicate::str::contains(r#""new_items":[]"#));
}

#[test]
fn parse_reads_stdin() {
    invox()
        .arg("parse")
        .write_stdin("add item description soap price 100")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""description":"soap""#))
        .stdout(predicate::str::contains(r#""price":100.0"#));
}

#[test]
fn parse_text_format() {
    invox()
        .args(["parse", "--format", "text", "client name acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("client.name = acme"));
}

#[test]
fn parse_normalizes_dates() {
    invox()
        .args(["parse", "invoice date 10th october 2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""meta.date":"2024-10-10""#));
}

#[test]
fn parse_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.txt");
    std::fs::write(&path, "business name acme traders").unwrap();

    invox()
        .arg("parse")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""sender.name":"acme traders""#,
        ));
}

#[test]
fn batch_parses_file_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("transcripts.txt");
    std::fs::write(&input, "client name acme\nadd item description soap\n").unwrap();

    invox()
        .arg("batch")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""client.name":"acme""#))
        .stdout(predicate::str::contains(r#""description":"soap""#));
}

#[test]
fn batch_writes_summary_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("transcripts.txt");
    let summary = dir.path().join("summary.csv");
    std::fs::write(&input, "client name acme\nhello world\n").unwrap();

    invox()
        .arg("batch")
        .arg(&input)
        .arg("--summary")
        .arg(&summary)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&summary).unwrap();
    assert!(csv.starts_with("line,updates,items"));
    assert!(csv.contains("1,1,0"));
    assert!(csv.contains("2,0,0"));
}

#[test]
fn triggers_lists_rule_tables() {
    invox()
        .arg("triggers")
        .assert()
        .success()
        .stdout(predicate::str::contains("client.email"))
        .stdout(predicate::str::contains("description"));
}
