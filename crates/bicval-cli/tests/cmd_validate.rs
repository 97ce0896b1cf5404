//! Integration tests for `bicval validate`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `bicval` binary.
fn bicval_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is something like …/deps/cmd_validate-<hash>
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("bicval");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(bicval_bin())
        .arg("--no-color")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run bicval validate")
}

fn input_file(content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(content.as_bytes()).expect("write");
    f
}

// ---------------------------------------------------------------------------
// validate: valid candidates (exit 0)
// ---------------------------------------------------------------------------

#[test]
fn validate_valid_bics_exits_0() {
    let out = run(&["validate", "DEUTDEFF", "deutdeff500", "COBADEFFXXX"]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn validate_produces_no_stdout() {
    let out = run(&["validate", "DEUTDEFF", "DEUT1DFF"]);
    assert!(
        out.stdout.is_empty(),
        "validate should not write to stdout; stdout: {}",
        String::from_utf8_lossy(&out.stdout)
    );
}

#[test]
fn validate_summary_on_stderr() {
    let out = run(&["validate", "DEUTDEFF"]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("1 candidate: 1 valid, 0 rejected"),
        "stderr: {stderr}"
    );
}

#[test]
fn validate_advisory_does_not_change_exit_code() {
    let out = run(&["validate", "ABCDQQ20"]);
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[W]"), "stderr: {stderr}");
}

#[test]
fn validate_honours_any_no_color_value() {
    for value in ["1", "", "yes", "true"] {
        let out = Command::new(bicval_bin())
            .args(["validate", "DEUTDEFF"])
            .env("NO_COLOR", value)
            .env_remove("RUST_LOG")
            .output()
            .expect("run bicval validate");
        assert_eq!(
            out.status.code(),
            Some(0),
            "NO_COLOR={value:?}; stderr: {}",
            String::from_utf8_lossy(&out.stderr)
        );
        assert!(
            !String::from_utf8_lossy(&out.stderr).contains('\x1b'),
            "NO_COLOR={value:?} should disable colors"
        );
    }
}

// ---------------------------------------------------------------------------
// validate: rejected candidates (exit 1)
// ---------------------------------------------------------------------------

#[test]
fn validate_invalid_bic_exits_1() {
    let out = run(&["validate", "DEUTDEFF", "DEUT1DFF"]);
    assert_eq!(
        out.status.code(),
        Some(1),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("[R] ISO_9362 check  \"DEUT1DFF\": BIC is not valid."),
        "stderr: {stderr}"
    );
}

#[test]
fn validate_wrong_length_exits_1() {
    for candidate in ["", "DEUTDE", "DEUTDEFF5", "DEUTDEFF5000"] {
        let out = run(&["validate", candidate]);
        assert_eq!(out.status.code(), Some(1), "candidate {candidate:?}");
    }
}

#[test]
fn validate_quiet_shows_only_rejections() {
    let out = run(&["validate", "--quiet", "ABCDQQ20", "DEUT1DFF"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[R]"), "stderr: {stderr}");
    assert!(!stderr.contains("[W]"), "stderr: {stderr}");
    assert!(!stderr.contains("candidates:"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// validate: --input
// ---------------------------------------------------------------------------

#[test]
fn validate_input_file_skips_comments_and_blanks() {
    let f = input_file("# counterparties\nDEUTDEFF\n\nCOBADEFFXXX\n");
    let out = run(&["validate", "--input", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("2 candidates: 2 valid"), "stderr: {stderr}");
}

#[test]
fn validate_input_file_with_bom_exits_0() {
    let f = input_file("\u{feff}DEUTDEFF\nCOBADEFFXXX\n");
    let out = run(&["validate", "--input", f.path().to_str().expect("path")]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn validate_input_file_combines_with_positional() {
    let f = input_file("DEUT1DFF\n");
    let out = run(&[
        "validate",
        "DEUTDEFF",
        "--input",
        f.path().to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("2 candidates: 1 valid, 1 rejected"), "stderr: {stderr}");
}

#[test]
fn validate_stdin_input() {
    let mut child = Command::new(bicval_bin())
        .args(["--no-color", "validate", "--input", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn bicval");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"DEUTDEFF\nDEUTDEFFX\n")
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("\"DEUTDEFFX\""), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// validate: input failures (exit 2)
// ---------------------------------------------------------------------------

#[test]
fn validate_nonexistent_file_exits_2() {
    let out = run(&["validate", "--input", "/no/such/file/bics.txt"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn validate_oversized_file_exits_2() {
    let f = input_file("DEUTDEFF\nCOBADEFF\n");
    let out = run(&[
        "validate",
        "--max-file-size",
        "8",
        "--input",
        f.path().to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn validate_without_candidates_exits_2() {
    let out = run(&["validate"]);
    assert_eq!(out.status.code(), Some(2));

    let f = input_file("# nothing here\n\n");
    let out = run(&["validate", "--input", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// validate: --format json
// ---------------------------------------------------------------------------

#[test]
fn validate_json_output_is_ndjson() {
    let out = run(&["validate", "--format", "json", "DEUT1DFF", "ABCDQQ20"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    let lines: Vec<serde_json::Value> = stderr
        .lines()
        .map(|l| serde_json::from_str(l).expect("each stderr line is JSON"))
        .collect();
    assert_eq!(lines[0]["severity"], "REJECT");
    assert_eq!(lines[0]["candidate"], "DEUT1DFF");
    let summary = &lines.last().expect("summary line")["summary"];
    assert_eq!(summary["candidates"], 2);
    assert_eq!(summary["rejected"], 1);
    assert_eq!(summary["warnings"], 1);
}
