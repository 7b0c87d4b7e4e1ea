use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn cmd(dir: &std::path::Path) -> Command {
    let mut c = Command::cargo_bin("taskd").unwrap();
    c.arg("--db").arg(dir.join("tasks.db"));
    c
}

fn create(dir: &std::path::Path, title: &str) -> Value {
    let out = cmd(dir).arg("create").arg(title).output().unwrap();
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn create_show_and_delete_round_trip() {
    let dir = tempdir().unwrap();

    let task = create(dir.path(), "Buy milk");
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["status"], "pending");
    assert_eq!(task["priority"], "medium");
    let id = task["id"].as_str().unwrap();

    cmd(dir.path())
        .args(["show", id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));

    cmd(dir.path())
        .args(["delete", id])
        .assert()
        .success()
        .stdout(predicate::str::contains(id));

    cmd(dir.path())
        .args(["show", id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not_found"));
}

#[test]
fn blank_title_is_rejected_with_validation_error() {
    let dir = tempdir().unwrap();

    cmd(dir.path())
        .args(["create", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation_error"));

    // Nothing was inserted.
    let out = cmd(dir.path()).arg("stats").output().unwrap();
    let stats: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(stats["total"], 0);
}

#[test]
fn status_changes_are_reflected_in_stats() {
    let dir = tempdir().unwrap();
    let task = create(dir.path(), "Toggle me");
    create(dir.path(), "Keep pending");
    let id = task["id"].as_str().unwrap();

    cmd(dir.path())
        .args(["status", id, "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed"));

    let out = cmd(dir.path()).arg("stats").output().unwrap();
    let stats: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["pending"], 1);
}

#[test]
fn list_filters_by_status() {
    let dir = tempdir().unwrap();
    let done = create(dir.path(), "Done task");
    create(dir.path(), "Open task");
    let id = done["id"].as_str().unwrap();

    cmd(dir.path())
        .args(["status", id, "completed"])
        .assert()
        .success();

    let out = cmd(dir.path())
        .args(["list", "--status", "completed"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let tasks: Value = serde_json::from_slice(&out.stdout).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Done task");
}

#[test]
fn edit_updates_fields() {
    let dir = tempdir().unwrap();
    let task = create(dir.path(), "Original");
    let id = task["id"].as_str().unwrap();

    let out = cmd(dir.path())
        .args(["edit", id, "--title", "Renamed", "--priority", "high"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let edited: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(edited["title"], "Renamed");
    assert_eq!(edited["priority"], "high");
    assert_eq!(edited["createdAt"], task["createdAt"]);
}

#[test]
fn pretty_format_prints_human_readable_output() {
    let dir = tempdir().unwrap();
    create(dir.path(), "Readable");

    cmd(dir.path())
        .args(["list", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Readable"))
        .stdout(predicate::str::contains("priority: medium"));
}
