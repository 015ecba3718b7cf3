use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nfa-regex"))
        .args(args)
        .output()
        .expect("binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn cli_when_subject_matches_then_prints_true() {
    let output = run(&["-r", "a(b|c)+", "-s", "abcb"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true");
}

#[test]
fn cli_when_subject_does_not_match_then_prints_false_and_succeeds() {
    let output = run(&["--regex", "a{2,4}", "--string", "aaaaa"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "false");
}

#[test]
fn cli_when_long_options_use_equals_then_accepted() {
    let output = run(&["--regex=x*", "--string=xxx"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true");
}

#[test]
fn cli_when_argument_missing_then_exits_nonzero() {
    let output = run(&["-r", "abc"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn cli_when_argument_empty_then_exits_nonzero() {
    let output = run(&["-r", "abc", "-s", ""]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn cli_when_option_value_absent_then_exits_nonzero() {
    let output = run(&["-s", "abc", "-r"]);
    assert!(!output.status.success());
}

#[test]
fn cli_when_pattern_malformed_then_reports_syntax_error() {
    let output = run(&["-r", "a{1,2,3}", "-s", "a"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 or 2 values"), "{stderr}");
}

#[test]
fn cli_when_help_requested_then_prints_usage() {
    let output = run(&["-h"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}

#[test]
fn cli_when_pattern_nests_too_deep_then_exits_nonzero_without_abort() {
    let pattern = format!("{}a{}", "(".repeat(20_000), ")".repeat(20_000));
    let output = run(&["-r", &pattern, "-s", "a"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nests deeper than"), "{stderr}");
}
