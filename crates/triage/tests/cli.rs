#![allow(deprecated)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    fn new(files: &[&str]) -> Self {
        let temp = TempDir::new().unwrap();
        for name in files {
            let path = temp.path().join("inbox").join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"x").unwrap();
        }
        Self { temp }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.temp.path().join(rel)
    }

    fn task_file(&self) -> PathBuf {
        self.path("sort.yaml")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("triage"));
        cmd.current_dir(self.temp.path())
            .env("HOME", self.temp.path())
            .env("XDG_CONFIG_HOME", self.path("config"))
            .env("XDG_DATA_HOME", self.path("data"))
            .env("TRIAGE_TRASH_DIR", self.path("trash"))
            .env("NO_COLOR", "1")
            .env_remove("TRIAGE_TASK")
            .env_remove("RUST_LOG");
        cmd
    }

    fn task_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--task").arg(self.task_file());
        cmd
    }

    fn create(&self) {
        self.task_cmd()
            .args(["new", "inbox"])
            .assert()
            .success();
    }

    fn status_json(&self) -> serde_json::Value {
        let output = self.task_cmd().args(["status", "--json"]).output().unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

fn file_name(value: &serde_json::Value) -> Option<String> {
    value
        .as_str()
        .and_then(|s| Path::new(s).file_name())
        .map(|n| n.to_string_lossy().into_owned())
}

#[test]
fn test_new_writes_task_file() {
    let ws = Workspace::new(&["a.jpg", "b.png", "c.mp4", "notes.txt"]);

    ws.task_cmd()
        .args(["new", "inbox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task with 3 files"))
        .stdout(predicate::str::contains("Saved sort.yaml"));

    let record = fs::read_to_string(ws.task_file()).unwrap();
    assert!(record.contains("init_file_count: 3"));
    assert!(!record.contains("notes.txt"));
}

#[test]
fn test_new_refuses_to_overwrite_without_force() {
    let ws = Workspace::new(&["a.jpg"]);
    ws.create();

    ws.task_cmd()
        .args(["new", "inbox"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    ws.task_cmd()
        .args(["new", "inbox", "--force"])
        .assert()
        .success();
}

#[test]
fn test_new_rejects_non_media_extension() {
    let ws = Workspace::new(&["a.jpg"]);

    ws.task_cmd()
        .args(["new", "inbox", "--ext", "txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("neither an image nor a video"));
    assert!(!ws.task_file().exists());
}

#[test]
fn test_status_json_reports_progress() {
    let ws = Workspace::new(&["a.jpg", "b.png", "c.mp4", "d.gif"]);
    ws.create();

    let status = ws.status_json();
    assert_eq!(status["remaining"], 4);
    assert_eq!(status["reviewed"], 0);
    assert_eq!(status["init_file_count"], 4);
    assert_eq!(file_name(&status["current"]).as_deref(), Some("a.jpg"));

    ws.task_cmd().arg("next").assert().success();
    let status = ws.status_json();
    assert_eq!(status["remaining"], 3);
    assert_eq!(status["percent_complete"], 25.0);
}

#[test]
fn test_next_and_back_persist_between_runs() {
    let ws = Workspace::new(&["a.jpg", "b.png", "c.mp4"]);
    ws.create();

    ws.task_cmd()
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("b.png"))
        .stdout(predicate::str::contains("(2 left)"));

    ws.task_cmd()
        .arg("n")
        .assert()
        .success()
        .stdout(predicate::str::contains("c.mp4"));

    ws.task_cmd()
        .arg("back")
        .assert()
        .success()
        .stdout(predicate::str::contains("b.png"));

    let status = ws.status_json();
    assert_eq!(status["reviewed"], 1);
    assert_eq!(file_name(&status["last_reviewed"]).as_deref(), Some("a.jpg"));
}

#[test]
fn test_next_past_the_end() {
    let ws = Workspace::new(&["a.jpg"]);
    ws.create();

    ws.task_cmd()
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("All files reviewed"));
    ws.task_cmd()
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("No more files to review"));
}

#[test]
fn test_move_into_category() {
    let ws = Workspace::new(&["a.jpg", "b.png"]);
    fs::create_dir(ws.path("cats")).unwrap();
    ws.create();

    ws.task_cmd()
        .args(["category", "add", "cats", "--name", "Cats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added category Cats"));

    ws.task_cmd()
        .args(["move", "Cats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved a.jpg to Cats"));

    assert!(ws.path("cats/a.jpg").exists());
    assert!(!ws.path("inbox/a.jpg").exists());

    let status = ws.status_json();
    assert_eq!(file_name(&status["current"]).as_deref(), Some("b.png"));
}

#[test]
fn test_move_to_unknown_category_fails() {
    let ws = Workspace::new(&["a.jpg"]);
    ws.create();

    ws.task_cmd()
        .args(["mv", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No category named 'Nowhere'"));
    assert!(ws.path("inbox/a.jpg").exists());
}

#[test]
fn test_trash_moves_file_out_of_the_task() {
    let ws = Workspace::new(&["a.jpg", "b.png"]);
    ws.create();

    ws.task_cmd()
        .arg("trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trashed a.jpg"));

    assert!(ws.path("trash/a.jpg").exists());
    assert!(!ws.path("inbox/a.jpg").exists());

    let status = ws.status_json();
    assert_eq!(status["remaining"], 1);
    assert_eq!(status["reviewed"], 0);
}

#[test]
fn test_rename_keeps_extension() {
    let ws = Workspace::new(&["a.jpg"]);
    ws.create();

    ws.task_cmd()
        .args(["rename", "beach"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed: a.jpg -> beach.jpg"));
    assert!(ws.path("inbox/beach.jpg").exists());

    let status = ws.status_json();
    assert_eq!(file_name(&status["current"]).as_deref(), Some("beach.jpg"));
}

#[test]
fn test_category_list_json() {
    let ws = Workspace::new(&["a.jpg"]);
    fs::create_dir_all(ws.path("sorted/Beach")).unwrap();
    fs::create_dir_all(ws.path("sorted/Mountains")).unwrap();
    ws.create();

    ws.task_cmd()
        .args(["category", "from-dir", "sorted"])
        .assert()
        .success();

    let output = ws
        .task_cmd()
        .args(["cat", "ls", "--json", "-f", "mou"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Mountains");
}

#[test]
fn test_vanished_files_are_reported_and_dropped() {
    let ws = Workspace::new(&["a.jpg", "b.png"]);
    ws.create();
    fs::remove_file(ws.path("inbox/b.png")).unwrap();

    ws.task_cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped 1 missing file"));

    // The reconciled task was written back.
    let record = fs::read_to_string(ws.task_file()).unwrap();
    assert!(!record.contains("b.png"));
}

#[test]
fn test_task_commands_need_a_task_file() {
    let ws = Workspace::new(&[]);

    ws.cmd()
        .arg("next")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No task file given"));
}

#[test]
fn test_task_file_from_environment() {
    let ws = Workspace::new(&["a.jpg"]);
    ws.create();

    ws.cmd()
        .env("TRIAGE_TASK", ws.task_file())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 remaining of 1"));
}

#[test]
fn test_favorites_need_no_task() {
    let ws = Workspace::new(&["sunset[★].jpg", "plain.jpg"]);
    fs::create_dir(ws.path("best")).unwrap();

    ws.cmd()
        .args(["favorites", "inbox", "best"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 1 favorite"));
    assert!(ws.path("best/sunset[★].jpg").exists());
}

#[test]
fn test_config_shows_trash_dir() {
    let ws = Workspace::new(&[]);

    ws.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("favorite_mark = [★]"))
        .stdout(predicate::str::contains("trash"));
}
