//! CLI tests for the `cmdtree complete` and `cmdtree tree` subcommands.

use std::process::Command;

use assert_cmd::cargo;

fn cmdtree_cmd() -> Command {
    Command::new(cargo::cargo_bin!("cmdtree"))
}

fn candidates(args: &[&str]) -> Vec<String> {
    let output = cmdtree_cmd().args(args).output().expect("run command");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    json["candidates"]
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn complete_prefix_filters_children() {
    let found = candidates(&["complete", "jo", "--output", "json"]);
    assert_eq!(found, ["join"]);
}

#[test]
fn complete_empty_line_offers_all_permitted_children_and_help() {
    let found = candidates(&["complete", "", "--output", "json"]);
    // The gated admin branch is absent without its permission.
    assert_eq!(found, ["help", "join", "list", "spectate"]);
}

#[test]
fn complete_with_permission_includes_admin() {
    let found = candidates(&[
        "complete",
        "",
        "--perm",
        "arena.admin",
        "--output",
        "json",
    ]);
    assert_eq!(found, ["admin", "help", "join", "list", "spectate"]);
}

#[test]
fn complete_slot_region_offers_slot_options() {
    // "help" is also accepted at the first slot position.
    let found = candidates(&["complete", "join ", "--output", "json"]);
    assert_eq!(found, ["castle", "help", "nether", "void"]);
}

#[test]
fn complete_admin_kick_offers_player_names() {
    let found = candidates(&[
        "complete",
        "admin kick ",
        "--perm",
        "arena.admin",
        "--perm",
        "arena.admin.kick",
        "--output",
        "json",
    ]);
    assert_eq!(found, ["alex", "casey", "help", "steve"]);
}

#[test]
fn complete_as_console_hides_interactive_only_children() {
    let found = candidates(&[
        "complete",
        "",
        "--sender",
        "non-interactive",
        "--output",
        "json",
    ]);
    assert_eq!(found, ["help", "list"]);
}

#[test]
fn tree_dump_is_valid_json_with_children() {
    let output = cmdtree_cmd().args(["tree"]).output().expect("run command");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["name"], "arena");
    let children = json["children"].as_array().expect("children array");
    let names: Vec<&str> = children
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["admin", "join", "list", "spectate"]);
}
