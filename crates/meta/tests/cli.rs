// ABOUTME: Integration tests for the meta CLI binary.
// ABOUTME: Tests HTML file extraction, configuration handling and argument validation.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn meta_cmd() -> Command {
    Command::cargo_bin("meta").unwrap()
}

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>TechCrunch | My Article</title>
<meta property="og:site_name" content="TechCrunch">
<meta name="description" content="A test page">
<link rel="canonical" href="https://techcrunch.example/my-article">
</head>
<body><p>Hi there</p></body>
</html>"#;

fn write_page(dir: &TempDir) -> std::path::PathBuf {
    let html_path = dir.path().join("page.html");
    fs::write(&html_path, PAGE).unwrap();
    html_path
}

#[test]
fn extract_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    meta_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://techcrunch.example/my-article?ref=feed")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title": "My Article""#))
        .stdout(predicate::str::contains(r#""meta_description": "A test page""#))
        .stdout(predicate::str::contains(
            r#""canonical_link": "https://techcrunch.example/my-article""#,
        ))
        .stdout(predicate::str::contains(r#""language": "en""#));
}

#[test]
fn language_flag_sets_default() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    meta_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://example.com/")
        .arg("--language")
        .arg("sv")
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language":"sv""#));
}

#[test]
fn config_file_sets_default() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{"language":"nb"}"#).unwrap();

    meta_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://example.com/")
        .arg("--config")
        .arg(&config_path)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language":"nb""#));
}

#[test]
fn reads_stdin() {
    meta_cmd()
        .arg("--html")
        .arg("-")
        .arg("--url")
        .arg("https://example.com/")
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("My Article"));
}

#[test]
fn output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);
    let output_path = temp_dir.path().join("output.json");

    meta_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://example.com")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let output_content = fs::read_to_string(&output_path).unwrap();
    assert!(
        output_content.contains("\"open_graph\":"),
        "output file should contain JSON with open_graph field"
    );
}

#[test]
fn timing_flag_prints_elapsed() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    meta_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://example.com")
        .arg("--timing")
        .assert()
        .success()
        .stderr(predicate::str::contains("elapsed:"))
        .stderr(predicate::str::contains("ms"));
}

#[test]
fn malformed_url_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    meta_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("http://exa mple.com/")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed URL"));
}

#[test]
fn missing_url_with_html_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir);

    meta_cmd()
        .arg("--html")
        .arg(&html_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url is required"));
}

#[test]
fn no_args_fails() {
    meta_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--html is required"));
}
