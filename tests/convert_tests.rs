//! Convert command tests
//!
//! Conversion runs against a shell script standing in for the Studio Pro
//! `mx` tool, so the tool-driven tests only run on Unix.

mod common;

use common::{TestEnv, mx_cmd};
use predicates::prelude::*;

#[test]
fn test_convert_requires_both_options() {
    let env = TestEnv::new();

    mx_cmd(&env)
        .args(["convert", "-p", "portal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--version"));
}

#[test]
fn test_convert_ambiguous_version_fails() {
    let env = TestEnv::new();
    env.add_version("10.6.3");
    env.add_version("10.6.4");
    env.add_project("Portal");

    mx_cmd(&env)
        .args(["convert", "-v", "10.6", "-p", "portal", "--all"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("- 10.6.3\n- 10.6.4\n"))
        .stderr(predicate::str::contains("Multiple version matches (2)"));
}

#[test]
fn test_convert_unknown_version_fails() {
    let env = TestEnv::new();
    env.add_version("10.6.3");
    env.add_project("Portal");

    mx_cmd(&env)
        .args(["convert", "-v", "9.24", "-p", "portal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No version matches found"));
}

#[test]
fn test_convert_no_project_matches() {
    let env = TestEnv::new();
    env.add_version("10.6.3");
    env.add_project("Portal");

    mx_cmd(&env)
        .args(["convert", "-v", "10.6.3", "-p", "intranet"])
        .assert()
        .success()
        .stdout("No project matches found.\n");
}

#[cfg(unix)]
#[test]
fn test_convert_single_project() {
    let env = TestEnv::new();
    let version = env.add_scripted_version("10.6.3", &[0]);
    env.add_project("Portal");

    mx_cmd(&env)
        .args(["convert", "--version", "10.6.3", "--project", "portal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1/1) Converting project: "))
        .stdout(predicate::str::contains("(success)"));

    let log = env.conversion_log(&version);
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("convert --in-place "));
    assert!(log[0].ends_with("Portal"));
}

#[cfg(unix)]
#[test]
fn test_convert_options_error_fails_without_all() {
    let env = TestEnv::new();
    env.add_scripted_version("10.6.3", &[2]);
    env.add_project("Portal");

    mx_cmd(&env)
        .args(["convert", "-v", "10.6.3", "-p", "portal"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error with options: "))
        .stderr(predicate::str::contains("Failed to convert"));
}

#[cfg(unix)]
#[test]
fn test_convert_all_continues_after_recognized_failure() {
    let env = TestEnv::new();
    let version = env.add_scripted_version("10.6.3", &[3, 0]);
    env.add_project("Portal-A");
    env.add_project("Portal-B");

    mx_cmd(&env)
        .args(["convert", "-v", "10.6.3", "-p", "portal", "-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion failed: "))
        .stdout(predicate::str::contains("(2/2) Converting project: "))
        .stdout(predicate::str::contains("Converted 1 of 2 project(s)."));

    assert_eq!(env.conversion_log(&version).len(), 2);
}

#[cfg(unix)]
#[test]
fn test_convert_unexpected_exit_code_aborts() {
    let env = TestEnv::new();
    let version = env.add_scripted_version("10.6.3", &[7, 0]);
    env.add_project("Portal-A");
    env.add_project("Portal-B");

    mx_cmd(&env)
        .args(["convert", "-v", "10.6.3", "-p", "portal", "-a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected exit code 7"));

    assert_eq!(env.conversion_log(&version).len(), 1);
}

#[cfg(unix)]
#[test]
fn test_convert_killed_tool_aborts_batch() {
    let env = TestEnv::new();
    let version = env.add_version_with_tool("10.6.3", "kill -9 $$");
    env.add_project("Portal-A");
    env.add_project("Portal-B");

    mx_cmd(&env)
        .args(["convert", "-v", "10.6.3", "-p", "portal", "--all"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("(2/2)").not())
        .stderr(predicate::str::contains("terminated before reporting an exit code"));

    assert_eq!(env.conversion_log(&version).len(), 1);
}

#[cfg(unix)]
#[test]
fn test_convert_caps_batch_at_three() {
    let env = TestEnv::new();
    let version = env.add_scripted_version("10.6.3", &[]);
    for name in ["P1", "P2", "P3", "P4", "P5"] {
        env.add_project(name);
    }

    mx_cmd(&env)
        .args(["convert", "-v", "10.6.3", "-p", "p", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converting first 3 of 5 matches."));

    let log = env.conversion_log(&version);
    assert_eq!(log.len(), 3);
    assert!(log[2].ends_with("P3"));
}

#[cfg(unix)]
#[test]
fn test_convert_missing_tool_is_reported() {
    let env = TestEnv::new();
    env.add_version("10.6.3");
    env.add_project("Portal");

    mx_cmd(&env)
        .args(["convert", "-v", "10.6.3", "-p", "portal"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Could not start the conversion tool for: ",
        ));
}
