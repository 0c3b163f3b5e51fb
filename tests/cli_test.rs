mod common;

use assert_cmd::Command;
use common::serve_once;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("grader").expect("grader binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn file_mode_prints_sorted_report() {
    let tmp = TempDir::new().expect("tempdir");
    let checks = write(tmp.path(), "checks.json", r#"["h2", "h1"]"#);
    let page = write(tmp.path(), "index.html", "<h1>Hi</h1>");

    cmd()
        .arg("--checks")
        .arg(&checks)
        .arg("--file")
        .arg(&page)
        .assert()
        .success()
        .stdout("{\n    \"h1\": true,\n    \"h2\": false\n}\n")
        .stderr("");
}

#[test]
fn attribute_selector_without_attribute_is_false() {
    let tmp = TempDir::new().expect("tempdir");
    let checks = write(tmp.path(), "checks.json", r#"["a[href]"]"#);
    let page = write(tmp.path(), "index.html", "<a>no link</a>");

    cmd()
        .arg("-c")
        .arg(&checks)
        .arg("-f")
        .arg(&page)
        .assert()
        .success()
        .stdout("{\n    \"a[href]\": false\n}\n");
}

#[test]
fn duplicate_selectors_collapse() {
    let tmp = TempDir::new().expect("tempdir");
    let checks = write(tmp.path(), "checks.json", r#"["h1", "h1"]"#);
    let page = write(tmp.path(), "index.html", "<h1>Hi</h1>");

    cmd()
        .arg("-c")
        .arg(&checks)
        .arg("-f")
        .arg(&page)
        .assert()
        .success()
        .stdout("{\n    \"h1\": true\n}\n");
}

#[test]
fn default_checks_file_is_read_from_working_dir() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "checks.json", "[]");
    write(tmp.path(), "index.html", "<h1>Hi</h1>");

    cmd()
        .current_dir(tmp.path())
        .args(["--file", "index.html"])
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn missing_html_file_exits_1_without_report() {
    let tmp = TempDir::new().expect("tempdir");
    let checks = write(tmp.path(), "checks.json", r#"["h1"]"#);
    let missing = tmp.path().join("missing.html");

    cmd()
        .arg("-c")
        .arg(&checks)
        .arg("-f")
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(contains("does not exist. Exiting."))
        .stdout(contains("{").not());
}

#[test]
fn missing_checks_file_exits_1() {
    let tmp = TempDir::new().expect("tempdir");
    let page = write(tmp.path(), "index.html", "<h1>Hi</h1>");

    cmd()
        .current_dir(tmp.path())
        .arg("-f")
        .arg(&page)
        .assert()
        .code(1)
        .stdout(contains("checks.json does not exist. Exiting."));
}

#[test]
fn invalid_url_exits_1() {
    let tmp = TempDir::new().expect("tempdir");
    let checks = write(tmp.path(), "checks.json", r#"["h1"]"#);

    cmd()
        .arg("-c")
        .arg(&checks)
        .args(["--url", "not-a-url"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("Error: Invalid url"));
}

#[test]
fn invalid_checks_json_exits_1() {
    let tmp = TempDir::new().expect("tempdir");
    let checks = write(tmp.path(), "checks.json", r#"["h1""#);
    let page = write(tmp.path(), "index.html", "<h1>Hi</h1>");

    cmd()
        .arg("-c")
        .arg(&checks)
        .arg("-f")
        .arg(&page)
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("Invalid checks file"));
}

#[test]
fn invalid_selector_exits_1_without_partial_report() {
    let tmp = TempDir::new().expect("tempdir");
    let checks = write(tmp.path(), "checks.json", r#"["h1", "div >"]"#);
    let page = write(tmp.path(), "index.html", "<h1>Hi</h1>");

    cmd()
        .arg("-c")
        .arg(&checks)
        .arg("-f")
        .arg(&page)
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("Invalid selector \"div >\""));
}

#[test]
fn source_is_required() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "checks.json", "[]");

    cmd().current_dir(tmp.path()).assert().code(2).stdout("");
}

#[test]
fn file_and_url_conflict() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "checks.json", "[]");
    write(tmp.path(), "index.html", "<h1>Hi</h1>");

    cmd()
        .current_dir(tmp.path())
        .args(["--file", "index.html", "--url", "https://example.com"])
        .assert()
        .code(2)
        .stderr(contains("cannot be used with"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let tmp = TempDir::new().expect("tempdir");
    let checks = write(tmp.path(), "checks.json", r#"["h1"]"#);
    let page = write(tmp.path(), "index.html", "<h1>Hi</h1>");

    cmd()
        .arg("-vv")
        .arg("-c")
        .arg(&checks)
        .arg("-f")
        .arg(&page)
        .assert()
        .success()
        .stdout("{\n    \"h1\": true\n}\n")
        .stderr(contains("evaluation complete"));
}

#[test]
fn validation_follows_command_line_order() {
    let tmp = TempDir::new().expect("tempdir");
    let missing_checks = tmp.path().join("missing-checks.json");
    let missing_page = tmp.path().join("missing.html");

    cmd()
        .arg("-f")
        .arg(&missing_page)
        .arg("-c")
        .arg(&missing_checks)
        .assert()
        .code(1)
        .stdout(contains("missing.html does not exist. Exiting."))
        .stdout(contains("missing-checks.json").not());

    cmd()
        .arg("-c")
        .arg(&missing_checks)
        .arg("-f")
        .arg(&missing_page)
        .assert()
        .code(1)
        .stdout(contains("missing-checks.json does not exist. Exiting."))
        .stdout(contains("missing.html").not());
}

#[test]
fn url_mode_404_prints_status_and_exits_1() {
    let tmp = TempDir::new().expect("tempdir");
    let checks = write(tmp.path(), "checks.json", r#"["h1"]"#);
    // Loopback hosts fail the URL-shape check, so route a well-formed URL
    // through the local server acting as an HTTP proxy.
    let proxy = serve_once("404 Not Found", "", b"");

    cmd()
        .env("http_proxy", &proxy)
        .env("HTTP_PROXY", &proxy)
        .env_remove("no_proxy")
        .env_remove("NO_PROXY")
        .env_remove("REQUEST_METHOD")
        .arg("-c")
        .arg(&checks)
        .args(["-u", "http://grader-test.example.com/index.html", "--timeout", "5"])
        .assert()
        .code(1)
        .stdout("Error: 404\n");
}
