//! End-to-end tests for the `pyinspect` binary

use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MODULE: &str = indoc! {r#"
    """Utilities."""
    import os


    def capitalize(text):
        """Capitalize the first letter of a string."""
        return text[0].upper() + text[1:]  # no empty guard
"#};

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("utils.py"), MODULE).unwrap();
    dir
}

fn pyinspect(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pyinspect").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = workspace();
    pyinspect(&dir)
        .assert()
        .success()
        .stdout("Python project loaded\n");
}

#[test]
fn test_symbols_json() {
    let dir = workspace();
    let output = pyinspect(&dir)
        .args(["symbols", "utils.py", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["functions"], serde_json::json!(["capitalize"]));
    assert_eq!(value["imports"], serde_json::json!(["os"]));
}

#[test]
fn test_docstrings_terminal() {
    let dir = workspace();
    pyinspect(&dir)
        .args(["docstrings", "utils.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Capitalize the first letter of a string.",
        ));
}

#[test]
fn test_comments_from_stdin() {
    let dir = workspace();
    let output = pyinspect(&dir)
        .args(["comments", "-", "-f", "json"])
        .write_stdin("x = 1  # set x\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!(["set x"]));
}

#[test]
fn test_inspect_broken_file_warns_and_succeeds() {
    let dir = workspace();
    fs::write(dir.path().join("broken.py"), "def broken(:\n").unwrap();
    pyinspect(&dir)
        .args(["inspect", "broken.py", "-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Syntax error"));
}

#[test]
fn test_python2_print_warns_and_reports_nothing() {
    let dir = workspace();
    fs::write(dir.path().join("legacy.py"), "import os\nprint \"hi\"\n").unwrap();
    pyinspect(&dir)
        .args(["symbols", "legacy.py", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"imports\": []"))
        .stderr(predicate::str::contains("missing parentheses in call to 'print'"));
}

#[test]
fn test_missing_file_fails() {
    let dir = workspace();
    pyinspect(&dir)
        .args(["symbols", "missing.py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load missing.py"));
}

#[test]
fn test_text_operations() {
    let dir = workspace();
    pyinspect(&dir)
        .args(["text", "capitalize", "python"])
        .assert()
        .success()
        .stdout("Python\n");
    pyinspect(&dir)
        .args(["text", "palindrome", "A man, a plan, a canal: Panama"])
        .assert()
        .success()
        .stdout("true\n");
    pyinspect(&dir)
        .args(["text", "count-words", "a b  c"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_capitalize_empty_fails() {
    let dir = workspace();
    pyinspect(&dir)
        .args(["text", "capitalize", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_config_file_sets_default_format() {
    let dir = workspace();
    fs::write(
        dir.path().join(".pyinspect.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = pyinspect(&dir)
        .args(["comments", "utils.py"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!(["no empty guard"]));
}

#[test]
fn test_init_creates_config_once() {
    let dir = workspace();
    pyinspect(&dir).arg("init").assert().success();
    assert!(dir.path().join(".pyinspect.toml").exists());

    pyinspect(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    pyinspect(&dir).args(["init", "--force"]).assert().success();
}
