//! CLI tests for the `cmdtree run` subcommand.

use std::process::Command;

use assert_cmd::cargo;

fn cmdtree_cmd() -> Command {
    Command::new(cargo::cargo_bin!("cmdtree"))
}

#[test]
fn run_list_prints_arenas() {
    let output = cmdtree_cmd()
        .args(["run", "list", "--output", "pretty"])
        .output()
        .expect("run command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded arenas"), "unexpected: {stdout}");
}

#[test]
fn run_join_with_valid_slot_value() {
    let output = cmdtree_cmd()
        .args(["run", "join castle", "--output", "json"])
        .output()
        .expect("run command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["messages"][0], "Joining castle.");
}

#[test]
fn run_join_with_invalid_slot_value_sends_usage() {
    let output = cmdtree_cmd()
        .args(["run", "join moon", "--output", "json"])
        .output()
        .expect("run command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    let message = json["messages"][0].as_str().expect("one message");
    assert!(message.contains("Usage:"), "unexpected: {message}");
    assert!(message.contains("/arena join <arena>"), "unexpected: {message}");
}

#[test]
fn run_admin_without_permission_is_rejected() {
    let output = cmdtree_cmd()
        .args(["run", "admin reload", "--output", "json"])
        .output()
        .expect("run command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(
        json["messages"][0],
        "[Arena] You do not have permission to do that."
    );
}

#[test]
fn run_admin_with_permission_succeeds() {
    let output = cmdtree_cmd()
        .args([
            "run",
            "admin reload",
            "--perm",
            "arena.admin",
            "--perm",
            "arena.admin.reload",
            "--output",
            "json",
        ])
        .output()
        .expect("run command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["messages"][0], "Configuration reloaded.");
}

#[test]
fn run_join_as_console_is_rejected() {
    let output = cmdtree_cmd()
        .args([
            "run",
            "join castle",
            "--sender",
            "non-interactive",
            "--output",
            "json",
        ])
        .output()
        .expect("run command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(
        json["messages"][0],
        "[Arena] You do not have permission to do that."
    );
}

#[test]
fn run_without_tokens_prints_credits() {
    let output = cmdtree_cmd()
        .args(["run", "", "--output", "json"])
        .output()
        .expect("run command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["messages"][0], "[Arena] cmdtree demo, version 0.1.0");
}

#[test]
fn run_help_lists_permitted_commands() {
    let output = cmdtree_cmd()
        .args(["run", "help", "--output", "json"])
        .output()
        .expect("run command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    let messages: Vec<String> = json["messages"]
        .as_array()
        .expect("array")
        .iter()
        .map(|m| m.as_str().unwrap().to_string())
        .collect();
    assert!(messages.iter().any(|m| m.contains("/arena list")));
    // The admin branch is gated and the default sender holds no permissions.
    assert!(!messages.iter().any(|m| m.contains("/arena admin")));
}
