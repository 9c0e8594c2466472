//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a throwaway data directory and verify
//! the JSON it prints.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_focusxp"))
        .args(args)
        .env("FOCUSXP_DATA_DIR", data_dir)
        .env_remove("FOCUSXP_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_json(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    let (code, stdout, stderr) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("stdout is JSON")
}

fn create_project(data_dir: &Path, title: &str, cost: &str, benefit: &str) -> String {
    let project = run_json(
        data_dir,
        &["project", "create", title, "--cost", cost, "--benefit", benefit],
    );
    project["id"].as_str().unwrap().to_string()
}

#[test]
fn test_project_create_and_list() {
    let dir = TempDir::new().unwrap();
    let id = create_project(dir.path(), "Write thesis", "7", "8");

    let projects = run_json(dir.path(), &["project", "list"]);
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], id.as_str());
    assert_eq!(projects[0]["status"], "active");
}

#[test]
fn test_project_complete_awards_xp() {
    let dir = TempDir::new().unwrap();
    let id = create_project(dir.path(), "Ship it", "7", "8");

    run_json(dir.path(), &["project", "status", &id, "completed"]);
    let total = run_json(dir.path(), &["xp", "total"]);
    assert_eq!(total["total_xp"], 560);

    let history = run_json(dir.path(), &["project", "history", &id]);
    assert_eq!(history.as_array().unwrap().len(), 2);
}

#[test]
fn test_session_log_scores() {
    let dir = TempDir::new().unwrap();
    let id = create_project(dir.path(), "Deep work", "5", "5");

    let outcome = run_json(
        dir.path(),
        &[
            "session", "log", &id, "--planned", "60", "--actual", "65", "--willpower", "medium",
            "--quality", "good",
        ],
    );
    // (10 + 6 + 5) × 2.0 × 1.0
    assert_eq!(outcome["xp_awarded"], 42);
    assert_eq!(outcome["session"]["difficulty_label"], "Come Get Some");
    assert_eq!(outcome["session"]["session_number_today"], 1);

    let streak = run_json(dir.path(), &["streak", "show"]);
    assert_eq!(streak["current"], 1);
}

#[test]
fn test_session_start_and_end() {
    let dir = TempDir::new().unwrap();
    let id = create_project(dir.path(), "Focus", "5", "5");

    let handle = run_json(
        dir.path(),
        &["session", "start", &id, "--length", "25", "--willpower", "high"],
    );
    assert_eq!(handle["planned_duration"], 25);

    let current = run_json(dir.path(), &["session", "current"]);
    assert_eq!(current["session"]["id"], handle["id"]);

    let outcome = run_json(dir.path(), &["session", "end", "--quality", "excellent"]);
    assert_eq!(outcome["session"]["completion_status"], "completed");

    let (code, stdout, _) = run_cli(dir.path(), &["session", "current"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "null");
}

#[test]
fn test_session_end_without_start_fails() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["session", "end"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no session in flight"));
}

#[test]
fn test_capture_triage_to_project() {
    let dir = TempDir::new().unwrap();
    let item = run_json(dir.path(), &["capture", "add", "Learn Rust macros"]);
    let item_id = item["id"].as_str().unwrap();

    let triaged = run_json(dir.path(), &["capture", "triage", item_id, "project"]);
    assert_eq!(triaged["outcome"]["decision"], "project");
    assert!(triaged["resulting_project_id"].is_string());

    let pending = run_json(dir.path(), &["capture", "list"]);
    assert!(pending.as_array().unwrap().is_empty());

    let projects = run_json(dir.path(), &["project", "list"]);
    assert_eq!(projects[0]["title"], "Learn Rust macros");
}

#[test]
fn test_achievements_list() {
    let dir = TempDir::new().unwrap();
    let catalogue = run_json(dir.path(), &["achievements", "list"]);
    assert_eq!(catalogue.as_array().unwrap().len(), 3);

    let unlocked = run_json(dir.path(), &["achievements", "check"]);
    assert!(unlocked.as_array().unwrap().is_empty());
}

#[test]
fn test_objective_set_and_show() {
    let dir = TempDir::new().unwrap();
    let objective = run_json(dir.path(), &["objective", "set", "--sessions", "3"]);
    assert_eq!(objective["session_count"], 3);
    assert_eq!(objective["session_duration"], 25);

    let shown = run_json(dir.path(), &["objective", "show"]);
    assert_eq!(shown["met"], false);
}

#[test]
fn test_stats() {
    let dir = TempDir::new().unwrap();
    let stats = run_json(dir.path(), &["stats"]);
    assert_eq!(stats["sessions"]["total_sessions"], 0);
    assert_eq!(stats["weekly_xp"], 0);
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "objective.session_count"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "4");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "objective.session_count", "6"]);
    assert_eq!(code, 0);

    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "objective.session_count"]);
    assert_eq!(stdout.trim(), "6");

    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_invalid_id_fails() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["project", "show", "not-a-uuid"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error: invalid id"));
}
