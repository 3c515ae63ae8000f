//! Integration tests for the unicleaner CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn unicleaner() -> Command {
    Command::cargo_bin("unicleaner").unwrap()
}

#[test]
fn test_clean_file() {
    unicleaner()
        .arg("clean")
        .arg("-i")
        .arg(fixture_path("invisible-sample.txt"))
        .assert()
        .success()
        .stdout("Hello, world! Second line & <tag>\n");
}

#[test]
fn test_clean_stdin() {
    unicleaner()
        .args(["clean", "-i", "-"])
        .write_stdin("a\u{200B}b  c")
        .assert()
        .success()
        .stdout("ab c\n");
}

#[test]
fn test_clean_report_goes_to_stderr() {
    unicleaner()
        .args(["clean", "-r", "-i"])
        .arg(fixture_path("invisible-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Удалено").not())
        .stderr(predicate::str::contains("Удалено 3 невидимых символа."));
}

#[test]
fn test_clean_report_nothing_found() {
    unicleaner()
        .args(["clean", "--report", "-i"])
        .arg(fixture_path("plain-sample.txt"))
        .assert()
        .success()
        .stdout("Nothing hidden here.\n")
        .stderr(predicate::str::contains("Невидимые символы не найдены."));
}

#[test]
fn test_clean_json_output() {
    unicleaner()
        .args(["clean", "-f", "json", "-i", "-"])
        .write_stdin("\u{2028}x\u{200B}y ")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cleaned_text\": \"xy\""))
        .stdout(predicate::str::contains("\"removed_invisible_count\": 2"))
        .stdout(predicate::str::contains("\"source\": \"<stdin>\""));
}

#[test]
fn test_clean_markdown_output() {
    unicleaner()
        .args(["clean", "-f", "markdown", "-i"])
        .arg(fixture_path("invisible-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## tests/fixtures/invisible-sample.txt"))
        .stdout(predicate::str::contains("```text"))
        .stdout(predicate::str::contains("*Total documents: 1*"));
}

#[test]
fn test_highlight_text_output() {
    unicleaner()
        .args(["highlight", "-i", "-"])
        .write_stdin("a\u{200B}b  c")
        .assert()
        .success()
        .stdout("a[U+200B]b··c\n");
}

#[test]
fn test_highlight_text_keeps_markup_literal() {
    unicleaner()
        .args(["highlight", "-i"])
        .arg(fixture_path("invisible-sample.txt"))
        .assert()
        .success()
        .stdout("[U+FEFF]Hello,[U+200B]··world!\nSecond[U+2028]line & <tag>\n\n");
}

#[test]
fn test_highlight_html_output() {
    unicleaner()
        .args(["highlight", "-f", "html", "-i"])
        .arg(fixture_path("invisible-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("data-invisible-count=\"3\""))
        .stdout(predicate::str::contains("&amp; &lt;tag&gt;"))
        .stdout(predicate::str::contains("<br />"))
        .stdout(predicate::str::contains("outline-orange-400"));
}

#[test]
fn test_highlight_json_segments() {
    unicleaner()
        .args(["highlight", "-f", "json", "-i", "-"])
        .write_stdin("x  y")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"invisible_count\": 0"))
        .stdout(predicate::str::contains("\"class\": \"double_space\""));
}

#[test]
fn test_stats_output() {
    unicleaner()
        .args(["stats", "-i"])
        .arg(fixture_path("invisible-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "37 символов | 3 невидимых символа | двойных пробелов: 1",
        ));
}

#[test]
fn test_glob_pattern_keeps_sorted_order() {
    let output = unicleaner()
        .args(["clean", "-i"])
        .arg(fixture_path("*.txt"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Hello, world! Second line & <tag>\nNothing hidden here.\n"
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = unicleaner()
        .args(["stats", "-q", "-f", "json", "-i"])
        .arg(fixture_path("*.txt"))
        .output()
        .unwrap();
    let parallel = unicleaner()
        .args(["stats", "-q", "-p", "-f", "json", "-i"])
        .arg(fixture_path("*.txt"))
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    unicleaner()
        .args(["clean", "-i"])
        .arg(fixture_path("invisible-sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "Hello, world! Second line & <tag>\n");
}

#[test]
fn test_invalid_file() {
    unicleaner()
        .args(["clean", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_format() {
    unicleaner()
        .args(["clean", "-f", "pdf", "-i", "-"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_list_formats() {
    unicleaner()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"))
        .stdout(predicate::str::contains("html"));
}

#[test]
fn test_help() {
    unicleaner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("invisible Unicode characters"));
}
