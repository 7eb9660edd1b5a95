//! End-to-end tests for the `tt` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BAGEL_STORY: &str = r#"{
    "meta": {
        "title": "Bagel Test",
        "first_scene": "front",
        "initial_flags": "DEFAULT,BAGEL_PRESENT",
        "intro": "A bagel awaits."
    },
    "targets": [
        { "target": "bagel", "color": "brown" },
        { "target": "table", "color": "grey" }
    ],
    "scenes": [
        { "scene": "front", "description": "A terrace with a table." },
        { "scene": "counter", "description": "Inside." }
    ],
    "scene_targets": [
        { "scene": "front", "target": "bagel", "flag": "DEFAULT" },
        { "scene": "front", "target": "table", "flag": "DEFAULT" }
    ],
    "scene_actions": [
        { "scene": "front", "action": "take", "flag": "DEFAULT" },
        { "scene": "front", "action": "enter", "flag": "HAS_BAGEL" }
    ],
    "rules": [
        { "scene": "front", "action": "take", "target": "bagel", "flag": "BAGEL_PRESENT",
          "text": "Take the bagel", "flag_off": "BAGEL_PRESENT", "flag_on": "HAS_BAGEL" },
        { "scene": "front", "action": "enter", "target": "table", "flag": "HAS_BAGEL",
          "text": "You go in.", "new_scene": "counter" }
    ]
}"#;

/// Create a temp directory holding a small story file.
fn test_story() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("story.json");
    fs::write(&path, BAGEL_STORY).unwrap();
    (dir, path)
}

fn tt() -> Command {
    let mut cmd = Command::cargo_bin("tt").unwrap();
    cmd.env_remove("TT_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_story_directory() {
    let parent = TempDir::new().unwrap();
    tt().args(["init", "mystory"])
        .current_dir(parent.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created story 'mystory'"));

    assert!(parent.path().join("mystory/story.json").exists());
}

#[test]
fn init_fails_if_dir_exists() {
    let parent = TempDir::new().unwrap();
    fs::create_dir(parent.path().join("mystory")).unwrap();

    tt().args(["init", "mystory"])
        .current_dir(parent.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_then_check() {
    let parent = TempDir::new().unwrap();
    tt().args(["init", "cafe"])
        .current_dir(parent.path())
        .assert()
        .success();

    tt().arg("check")
        .current_dir(parent.path().join("cafe"))
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_valid_story() {
    let (_dir, path) = test_story();
    tt().args(["check", "-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bagel Test")
                .and(predicate::str::contains("2 scenes, 2 targets, 2 rules")),
        );
}

#[test]
fn check_reports_dangling_target() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("story.json");
    fs::write(
        &path,
        BAGEL_STORY.replace(
            r#"{ "scene": "front", "target": "table", "flag": "DEFAULT" }"#,
            r#"{ "scene": "front", "target": "chair", "flag": "DEFAULT" }"#,
        ),
    )
    .unwrap();

    tt().args(["check", "-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("unknown target \"chair\"")
                .and(predicate::str::contains("1 error")),
        );
}

#[test]
fn check_fails_on_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("story.json");
    fs::write(&path, "{ not json").unwrap();

    tt().args(["check", "-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid story data"));
}

#[test]
fn check_missing_file() {
    let dir = TempDir::new().unwrap();
    tt().arg("check")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_rules() {
    let (_dir, path) = test_story();
    tt().args(["list", "rules", "-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("take bagel")
                .and(predicate::str::contains("+HAS_BAGEL"))
                .and(predicate::str::contains("2 rows")),
        );
}

#[test]
fn list_targets() {
    let (_dir, path) = test_story();
    tt().args(["list", "targets", "-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("brown").and(predicate::str::contains("grey")));
}

#[test]
fn list_rejects_unknown_table() {
    let (_dir, path) = test_story();
    tt().args(["list", "monsters", "-f", path.to_str().unwrap()])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_look_around_and_exit() {
    let (_dir, path) = test_story();
    tt().args(["play", "--no-color", "-f", path.to_str().unwrap()])
        .write_stdin("look around\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A bagel awaits.")
                .and(predicate::str::contains("A terrace with a table.")),
        );
}

#[test]
fn play_take_twice() {
    let (_dir, path) = test_story();
    tt().args(["play", "--no-color", "-f", path.to_str().unwrap()])
        .write_stdin("take bagel\ntake bagel\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Take the bagel")
                .and(predicate::str::contains(">>> You can't do that!\n")),
        );
}

#[test]
fn play_highlights_targets() {
    let (_dir, path) = test_story();
    tt().args(["play", "-f", path.to_str().unwrap()])
        .env_remove("NO_COLOR")
        .write_stdin("take bagel\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Take the \x1b[1;38;2;150;75;0mbagel\x1b[0m",
        ));
}

#[test]
fn play_rejections() {
    let (_dir, path) = test_story();
    tt().args(["play", "--no-color", "-f", path.to_str().unwrap()])
        .write_stdin("dance\ntake\ntake spoon\n\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Type \"?\" to see the available actions.")
                .count(2)
                .and(predicate::str::contains("Type \"?\" to see the available targets.").count(2)),
        );
}

#[test]
fn play_help_lists_actions() {
    let (_dir, path) = test_story();
    tt().args(["play", "--no-color", "-f", path.to_str().unwrap()])
        .write_stdin("?\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Actions you can currently take are:")
                .and(predicate::str::contains("Interactables in the area are:\nbagel\ntable")),
        );
}

#[test]
fn play_extra_flag_unlocks_action() {
    let (_dir, path) = test_story();
    tt().args([
        "play",
        "--no-color",
        "--flag",
        "HAS_BAGEL",
        "-f",
        path.to_str().unwrap(),
    ])
    .write_stdin("enter table\nlook around\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("You go in.").and(predicate::str::contains("Inside.")));
}

#[test]
fn play_unknown_start_scene() {
    let (_dir, path) = test_story();
    tt().args(["play", "--scene", "attic", "-f", path.to_str().unwrap()])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scene not found: \"attic\""));
}

#[test]
fn play_verbose_logs_to_stderr() {
    let (_dir, path) = test_story();
    tt().args(["play", "-v", "--no-color", "-f", path.to_str().unwrap()])
        .write_stdin("take bagel\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("rule matched").not())
        .stderr(predicate::str::contains("rule matched"));
}

#[test]
fn play_survives_invalid_utf8() {
    let (_dir, path) = test_story();
    tt().args(["play", "--no-color", "-f", path.to_str().unwrap()])
        .write_stdin(b"\xffbagel\ntake bagel\nexit\n".to_vec())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Type \"?\" to see the available actions.")
                .and(predicate::str::contains("Take the bagel")),
        );
}
