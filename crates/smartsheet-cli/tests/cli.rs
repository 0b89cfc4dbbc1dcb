//! End-to-end tests of the binary that need no network access.

use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, env_file: &Path, envs: &[(&str, &str)], args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_smartsheet-attachments"));
    command
        .current_dir(dir)
        .env_remove("SMARTSHEET_API")
        .env_remove("SHEET_ID")
        .env_remove("SMARTSHEET_OUTPUT_CSV")
        .env_remove("SMARTSHEET_API_BASE_URL")
        .env_remove("RUST_LOG")
        .arg("--env-file")
        .arg(env_file)
        .arg("--output")
        .arg(dir.join("out.csv"))
        .args(args);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("run binary")
}

#[test]
fn missing_credential_exits_with_one_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &dir.path().join("absent.env"), &[], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("SMARTSHEET_API"));
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn invalid_sheet_id_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &dir.path().join("absent.env"),
        &[("SMARTSHEET_API", "tok")],
        &["--sheet-id", "abc"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid sheet id"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn credential_from_env_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join("test.env");
    std::fs::write(
        &env_file,
        "SMARTSHEET_API=tok\nSMARTSHEET_API_BASE_URL=http://127.0.0.1:9/2.0\n",
    )
    .unwrap();

    let output = run(dir.path(), &env_file, &[], &[]);

    // Credential accepted, so the run gets as far as the (refused) sheet fetch.
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fetching sheet 3002834590427012 ..."));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to fetch sheet"));
    assert!(!dir.path().join("out.csv").exists());
}
