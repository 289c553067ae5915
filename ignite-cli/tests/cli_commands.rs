use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn ignite_cmd(home: &Path, cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ignite"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(cwd);
    cmd
}

/// Home with a Desktop folder, plus a project directory to run from.
fn setup() -> (TempDir, PathBuf) {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(home.path().join("Desktop")).expect("desktop");
    let project = home.path().join("code").join("demo");
    fs::create_dir_all(&project).expect("project");
    (home, project)
}

fn config_dir(home: &Path) -> PathBuf {
    home.join(".hop-cli").join("launchers")
}

fn ext() -> &'static str {
    if cfg!(windows) {
        "bat"
    } else if cfg!(target_os = "macos") {
        "command"
    } else {
        "sh"
    }
}

fn create_quick(home: &Path, project: &Path, name: &str) {
    ignite_cmd(home, project)
        .args(["create", "--quick", "--name", name])
        .assert()
        .success()
        .stdout(contains("Launcher created successfully"));
}

#[test]
fn list_empty() {
    let (home, project) = setup();
    ignite_cmd(home.path(), &project)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No launchers saved."));
}

#[test]
fn list_json_empty_is_empty_array() {
    let (home, project) = setup();
    let output = ignite_cmd(home.path(), &project)
        .args(["list", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn dry_run_prints_preview_and_writes_nothing() {
    let (home, project) = setup();
    ignite_cmd(home.path(), &project)
        .args(["create", "--quick", "--name", "demo", "--dry"])
        .assert()
        .success()
        .stdout(contains("Dry run: script preview"))
        .stdout(contains(format!("ignite-demo.{}", ext())))
        .stdout(contains("npm run dev"));

    let dir = config_dir(home.path());
    assert!(!dir.join(format!("ignite-demo.{}", ext())).exists());
    assert!(!dir.join("ignite-demo.json").exists());
    assert!(!home.path().join("Desktop").join(format!("ignite-demo.{}", ext())).exists());
}

#[test]
fn quick_create_writes_both_copies_and_records_recent() {
    let (home, project) = setup();
    create_quick(home.path(), &project, "demo");

    let dir = config_dir(home.path());
    let script = dir.join(format!("ignite-demo.{}", ext()));
    let desktop = home.path().join("Desktop").join(format!("ignite-demo.{}", ext()));
    assert_eq!(fs::read(&script).unwrap(), fs::read(&desktop).unwrap());

    let record: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("ignite-demo.json")).unwrap()).unwrap();
    assert_eq!(record["name"], "demo");
    assert_eq!(record["config"]["command"], "npm run dev");

    let recent: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("recent.json")).unwrap()).unwrap();
    assert_eq!(recent[0]["name"], "demo");
    assert!(recent[0]["createdAt"].is_string());
}

#[test]
fn preset_peek_only_opens_folder() {
    let (home, project) = setup();
    ignite_cmd(home.path(), &project)
        .args(["create", "--quick", "--name", "peeky", "--preset", "peek", "--dry"])
        .assert()
        .success()
        .stdout(contains("npm run dev").not());
}

#[test]
fn list_shows_created_launchers() {
    let (home, project) = setup();
    create_quick(home.path(), &project, "web");
    create_quick(home.path(), &project, "api");

    let output = ignite_cmd(home.path(), &project)
        .args(["list", "--json"])
        .output()
        .expect("run");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["api", "web"]);
    assert_eq!(value[0]["status"], "ok");
}

#[test]
fn rename_missing_launcher_fails() {
    let (home, project) = setup();
    ignite_cmd(home.path(), &project)
        .args(["rename", "ghost", "new"])
        .assert()
        .failure()
        .stderr(contains("launcher \"ghost\" not found"));
}

#[test]
fn rename_onto_existing_launcher_fails() {
    let (home, project) = setup();
    create_quick(home.path(), &project, "one");
    create_quick(home.path(), &project, "two");
    ignite_cmd(home.path(), &project)
        .args(["rename", "one", "two"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn rename_then_list() {
    let (home, project) = setup();
    create_quick(home.path(), &project, "old");
    ignite_cmd(home.path(), &project)
        .args(["rename", "old", "new"])
        .assert()
        .success();
    let output = ignite_cmd(home.path(), &project)
        .args(["list", "--json"])
        .output()
        .expect("run");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["name"], "new");
}

#[test]
fn delete_is_idempotent() {
    let (home, project) = setup();
    create_quick(home.path(), &project, "gone");
    ignite_cmd(home.path(), &project)
        .args(["delete", "gone"])
        .assert()
        .success()
        .stdout(contains("Deleted gone"));
    ignite_cmd(home.path(), &project)
        .args(["delete", "gone"])
        .assert()
        .success()
        .stdout(contains("Nothing to delete"));
    assert!(!config_dir(home.path()).join("ignite-gone.json").exists());
}

#[test]
fn run_missing_launcher_fails() {
    let (home, project) = setup();
    ignite_cmd(home.path(), &project)
        .args(["run", "ghost", "--direct"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn invalid_name_is_rejected() {
    let (home, project) = setup();
    ignite_cmd(home.path(), &project)
        .args(["create", "--quick", "--name", "a/b", "--dry"])
        .assert()
        .failure()
        .stderr(contains("path separators"));
}
