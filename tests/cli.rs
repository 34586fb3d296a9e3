//! Command-line tests
//!
//! These tests run the `scarg` binary and check its output lines and exit status.

use std::process::{Command, Output};

fn scarg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scarg"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run scarg")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_every_i386_offset() {
    let output = scarg(&["--arch", "x86"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        [
            "arg 0: offset 4",
            "arg 1: offset 8",
            "arg 2: offset 12",
            "arg 3: offset 16",
            "arg 4: offset 20",
            "arg 5: offset 24",
        ]
    );
}

#[test]
fn single_argument_low_half() {
    let output = scarg(&["--arch", "x86_64", "-n", "2", "--half", "lo"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["arg 2: offset 32"]);
}

#[test]
fn high_half_fails() {
    let output = scarg(&["--arch", "x86", "--half", "hi", "-n", "0"]);
    assert!(!output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["arg 0: high-half argument offsets are not defined for x86"]
    );
}

#[test]
fn unsupported_arch_fails() {
    let output = scarg(&["--arch", "arm", "-n", "0"]);
    assert!(!output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["arg 0: no argument offsets are defined for arm"]
    );
}
