//! Integration tests driving the scenscramble binary

use crate::fixtures::{CORPUS_LINES, create_corpus, output_lines};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scenscramble"))
}

#[test]
fn test_help() {
    let output = bin().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scenario Scrambler"));
    assert!(stdout.contains("<DIRECTORY> <AMOUNT>"));
}

#[test]
fn test_version() {
    let output = bin().arg("--version").output().expect("Failed to execute command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("scenscramble "));
}

#[test]
fn test_samples_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_corpus(temp_dir.path()).unwrap();

    let output = bin()
        .arg(&root)
        .args(["5", "--seed", "17"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let lines = output_lines(&output.stdout);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "version 1");
    for line in &lines[1..] {
        assert!(CORPUS_LINES.contains(&line.as_str()), "unexpected line {line}");
    }
}

#[test]
fn test_zero_amount_prints_header_only() {
    let temp_dir = TempDir::new().unwrap();

    let output = bin()
        .arg(temp_dir.path())
        .arg("0")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"version 1\n");
}

#[test]
fn test_output_file_and_report() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_corpus(temp_dir.path()).unwrap();
    let out_path = temp_dir.path().join("sample.scen");

    let output = bin()
        .arg(&root)
        .arg("4")
        .arg("--output")
        .arg(&out_path)
        .arg("--report")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = std::fs::read(&out_path).unwrap();
    assert_eq!(output_lines(&written).len(), 5);

    let report: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("report should be JSON");
    assert_eq!(report["emitted"], 4);
    assert_eq!(report["eligible_lines"], 9);
}

#[test]
fn test_inventory_mode() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_corpus(temp_dir.path()).unwrap();

    let output = bin()
        .arg(&root)
        .arg("--inventory")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let inventory: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(inventory["file_count"], 3);
    assert_eq!(inventory["eligible_lines"], 9);
}

#[test]
fn test_invalid_amount_fails_before_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = bin()
        .arg(temp_dir.path())
        .arg("lots")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("AMOUNT"));
}

#[test]
fn test_missing_arguments_fail() {
    let output = bin().output().expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let temp_dir = TempDir::new().unwrap();
    let output = bin().arg(temp_dir.path()).output().expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing required argument: AMOUNT"));
}

#[test]
fn test_missing_directory_fails_without_output() {
    let output = bin()
        .args(["/definitely/does/not/exist/xyz123", "3"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_pass_bound_on_empty_corpus_exits_with_exhausted() {
    let temp_dir = TempDir::new().unwrap();

    let output = bin()
        .arg(temp_dir.path())
        .args(["3", "--max-passes", "5"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(output.stdout, b"version 1\n");
}

#[test]
fn test_empty_corpus_without_bound_keeps_running() {
    let temp_dir = TempDir::new().unwrap();

    let mut child = bin()
        .arg(temp_dir.path())
        .arg("3")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn command");

    thread::sleep(Duration::from_millis(500));
    let still_running = child.try_wait().unwrap().is_none();
    child.kill().ok();
    child.wait().ok();

    assert!(still_running, "sampling an empty corpus should not terminate");
}

#[test]
fn test_unwritable_output_exits_with_io_code() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_corpus(temp_dir.path()).unwrap();
    let out_path = temp_dir.path().join("missing").join("sample.txt");

    let output = bin()
        .arg(&root)
        .arg("3")
        .arg("--output")
        .arg(&out_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn test_unreadable_scenario_exits_with_io_code() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = create_corpus(temp_dir.path()).unwrap();
    let locked = root.join("b.scen");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores permission bits
    if fs::File::open(&locked).is_ok() {
        return;
    }

    let output = bin()
        .arg(&root)
        .arg("3")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty(), "pre-scan failures precede the header");
}

#[test]
fn test_output_inside_corpus_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_corpus(temp_dir.path()).unwrap();
    let out_path = root.join("sample.scen");

    let output = bin()
        .arg(&root)
        .arg("3")
        .arg("--output")
        .arg(&out_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(!out_path.exists(), "rejected output must not be created");
    assert!(String::from_utf8_lossy(&output.stderr).contains("inside the scenario directory"));
}
