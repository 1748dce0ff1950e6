//! CLI Integration Tests
//!
//! Spawns the built `rsprobe` binary and verifies the exit-code contract
//! and stream discipline:
//!
//! - no arguments → 3, usage line on stdout
//! - unrecognized subcommand → 4, "unknown command" on stdout
//! - `ping` without a port → 3
//! - `ping` with a non-numeric port → 2, diagnostic on stderr
//! - `ping` against an unreachable endpoint → 2, empty stdout
//!
//! None of these require a running mongod; the unreachable-endpoint test
//! reserves an ephemeral port by binding and dropping a listener.

use std::net::TcpListener;
use std::process::{Command, Output};

fn rsprobe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rsprobe"))
        .args(args)
        .output()
        .expect("failed to spawn rsprobe")
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = rsprobe(&[]);
    assert_eq!(output.status.code(), Some(3));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("usage: ping <port> | init | status"));
}

#[test]
fn test_unknown_command() {
    let output = rsprobe(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(4));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unknown command"));
}

#[test]
fn test_ping_requires_a_port_argument() {
    let output = rsprobe(&["ping"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_ping_with_non_numeric_port_fails_operationally() {
    let output = rsprobe(&["ping", "not-a-port"]);
    assert_eq!(output.status.code(), Some(2));

    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid port number 'not-a-port'"));
}

#[test]
fn test_ping_against_unreachable_endpoint() {
    // Bind to an ephemeral port and release it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().unwrap().port().to_string();
    drop(listener);

    let output = rsprobe(&["ping", &port]);
    assert_eq!(output.status.code(), Some(2));

    // Failure leaves stdout untouched; the diagnostic goes to stderr.
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_command_token_is_case_insensitive() {
    // PING dispatches to the ping operation, which rejects the port before
    // any network activity. An unknown command would have exited 4.
    let output = rsprobe(&["PING", "not-a-port"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_help_is_not_an_error() {
    let output = rsprobe(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(!output.stdout.is_empty());
}
