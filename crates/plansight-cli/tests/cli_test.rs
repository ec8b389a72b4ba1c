//! Integration tests for the `plansight` binary.
//!
//! Each test runs the built binary with `XDG_CONFIG_HOME` pointed at its own
//! temporary directory and the `PLANSIGHT_*` variables cleared, so neither
//! the developer's config nor other tests leak in.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use plansight_test_utils::{DOMAIN_FILE, ELEVATOR, LOGISTICS, ROBOT_FF, ROBOT_TEMPORAL, write_plan};
use tempfile::TempDir;

// -----------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------

fn plansight(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_plansight"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("PLANSIGHT_DIALECT")
        .env_remove("PLANSIGHT_DOMAIN")
        .env_remove("PLANSIGHT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn run(config_home: &TempDir, args: &[&str]) -> Output {
    plansight(config_home)
        .args(args)
        .output()
        .expect("failed to run plansight")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_config(config_home: &TempDir, contents: &str) {
    let dir = config_home.path().join("plansight");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), contents).unwrap();
}

// -----------------------------------------------------------------------
// parse
// -----------------------------------------------------------------------

#[test]
fn parse_prints_json_by_default() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(ROBOT_FF);

    let output = run(&home, &["parse", plan.path().to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["domain"], "robot");
    assert_eq!(value["pddlType"], "classical");
    assert_eq!(value["actions"].as_array().unwrap().len(), 4);
    assert_eq!(value["metrics"]["planLength"], 4);
}

#[test]
fn parse_compact_is_one_line() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(ELEVATOR);

    let output = run(&home, &["parse", "--compact", plan.path().to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).lines().count(), 1);
}

#[test]
fn parse_summary_format() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(ROBOT_TEMPORAL);

    let output = run(
        &home,
        &[
            "parse",
            "--dialect",
            "temporal",
            "--format",
            "summary",
            plan.path().to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Domain:   robot"), "{text}");
    assert!(text.contains("Dialect:  temporal"), "{text}");
    assert!(text.contains("Max parallelism:  2"), "{text}");
}

#[test]
fn parse_reads_stdin() {
    let home = TempDir::new().unwrap();
    let mut child = plansight(&home)
        .args(["parse", "--compact", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn plansight");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(LOGISTICS.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["domain"], "logistics");
}

#[test]
fn parse_fixed_domain_skips_detection() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(ROBOT_FF);

    let output = run(
        &home,
        &["parse", "--domain", "elevator", plan.path().to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["domain"], "elevator");
}

#[test]
fn parse_writes_output_file() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(ELEVATOR);
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("result.json");

    let output = run(
        &home,
        &[
            "parse",
            plan.path().to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Wrote 5 actions"));

    let written = std::fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["domain"], "elevator");
}

#[test]
fn parse_definition_file_fails_with_error_field() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(DOMAIN_FILE);

    let output = run(&home, &["parse", plan.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("definition"), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(value["error"].is_string());
    assert!(value["actions"].as_array().unwrap().is_empty());
}

#[test]
fn parse_missing_file_fails() {
    let home = TempDir::new().unwrap();
    let output = run(&home, &["parse", "/nonexistent/plan.txt"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read plan file"));
}

#[test]
fn invalid_dialect_flag_is_rejected() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(ROBOT_FF);
    let output = run(
        &home,
        &["parse", "--dialect", "quantum", plan.path().to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("quantum"), "stderr: {}", stderr(&output));
}

// -----------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------

#[test]
fn config_file_sets_dialect_and_format() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[parse]\ndialect = \"numerical\"\n[output]\nformat = \"summary\"\n");
    let plan = write_plan(LOGISTICS);

    let output = run(&home, &["parse", plan.path().to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Dialect:  numerical"), "{text}");
    assert!(text.contains("Total cost:       6.00"), "{text}");
}

#[test]
fn env_overrides_config_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[output]\nformat = \"summary\"\n");
    let plan = write_plan(ELEVATOR);

    let output = plansight(&home)
        .env("PLANSIGHT_FORMAT", "json")
        .args(["parse", plan.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(serde_json::from_str::<serde_json::Value>(&stdout(&output)).is_ok());
}

#[test]
fn init_writes_config_once() {
    let home = TempDir::new().unwrap();

    let first = run(&home, &["init"]);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    let path = home.path().join("plansight").join("config.toml");
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("dialect = \"classical\""), "{written}");

    let second = run(&home, &["init"]);
    assert!(!second.status.success());
    assert!(stderr(&second).contains("already exists"));

    let forced = run(&home, &["init", "--force"]);
    assert!(forced.status.success(), "stderr: {}", stderr(&forced));
}

// -----------------------------------------------------------------------
// analyze / convert / domain
// -----------------------------------------------------------------------

#[test]
fn analyze_reports_parallelism() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(ROBOT_TEMPORAL);

    let output = run(
        &home,
        &["analyze", "--dialect", "temporal", plan.path().to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Total duration:   6.002"), "{text}");
    assert!(text.contains("Max parallelism:  2"), "{text}");
    assert!(text.contains("#0 #1"), "{text}");
}

#[test]
fn convert_drops_timing_for_classical() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(ROBOT_TEMPORAL);

    let output = run(
        &home,
        &[
            "convert",
            "--from",
            "temporal",
            "--to",
            "classical",
            plan.path().to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let actions = value.as_array().unwrap();
    assert_eq!(actions.len(), 5);
    assert!(actions.iter().all(|a| a.get("duration").is_none()));
}

#[test]
fn domain_prints_detected_domain() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(ELEVATOR);

    let output = run(&home, &["domain", plan.path().to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "elevator\n");
}

#[test]
fn domain_of_definition_file_fails() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(DOMAIN_FILE);

    let output = run(&home, &["domain", plan.path().to_str().unwrap()]);
    assert!(!output.status.success());
}
