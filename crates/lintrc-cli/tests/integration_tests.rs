//! Integration tests for the lintrc CLI
//!
//! These tests verify the CLI behavior end-to-end

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper function to create a test CLI command
#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("lintrc").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Helper function to create a project with two config fragments
fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("base.json"),
        r#"{
  "ignorePatterns": ["node_modules", "dist"],
  "globals": { "window": "readonly" },
  "presets": ["js-recommended"]
}"#,
    )
    .unwrap();

    fs::write(
        temp_dir.path().join("prettier.yaml"),
        "presets:\n  - prettier-compat\n",
    )
    .unwrap();

    temp_dir
}

#[test]
fn test_help_command() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lintrc loads lint configuration fragments"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_version_command() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(VERSION));
}

#[test]
fn test_version_detailed() {
    cli()
        .args(["version", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Build information:"));
}

#[test]
fn test_resolve_json_output() {
    let project = create_test_project();

    let output = cli()
        .current_dir(project.path())
        .args(["resolve", "--format", "json", "base.json", "prettier.yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "ignorePatterns": ["node_modules", "dist"],
            "globals": { "window": "readonly" },
            "presets": ["js-recommended", "prettier-compat"]
        })
    );
}

#[test]
fn test_resolve_human_output() {
    let project = create_test_project();

    cli()
        .current_dir(project.path())
        .args(["resolve", "base.json", "builtin:prettier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sources: base.json -> builtin:prettier"))
        .stdout(predicate::str::contains("window: readonly"))
        .stdout(predicate::str::contains("2. prettier-compat"));
}

#[test]
fn test_resolve_yaml_output() {
    let project = create_test_project();

    cli()
        .current_dir(project.path())
        .args(["resolve", "-f", "yaml", "base.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ignorePatterns:"))
        .stdout(predicate::str::contains("- js-recommended"));
}

#[test]
fn test_resolve_env_only() {
    let project = create_test_project();

    let output = cli()
        .current_dir(project.path())
        .args(["resolve", "--env-only", "-f", "json", "base.json", "prettier.yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "window": "readonly" }));

    cli()
        .current_dir(project.path())
        .args(["resolve", "--env-only", "builtin:recommended"])
        .assert()
        .success()
        .stdout(predicate::str::contains("document: readonly"))
        .stdout(predicate::str::contains("Presets").not())
        .stdout(predicate::str::contains("node_modules").not());
}

#[test]
fn test_resolve_discovers_config_file() {
    let project = create_test_project();
    fs::write(
        project.path().join(".lintrc.json"),
        r#"{ "presets": ["discovered"] }"#,
    )
    .unwrap();
    let nested = project.path().join("src/components");
    fs::create_dir_all(&nested).unwrap();

    cli()
        .current_dir(&nested)
        .args(["resolve", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("discovered"));
}

#[test]
fn test_resolve_missing_file_fails() {
    let project = create_test_project();

    cli()
        .current_dir(project.path())
        .args(["resolve", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load 'missing.json'"));
}

#[test]
fn test_validate_invalid_global_mode() {
    let project = create_test_project();
    fs::write(
        project.path().join("invalid.json"),
        r#"{ "globals": { "x": "maybe" } }"#,
    )
    .unwrap();

    cli()
        .current_dir(project.path())
        .args(["validate", "base.json", "invalid.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is valid").not())
        .stderr(predicate::str::contains("unrecognized mode 'maybe'"));
}

#[test]
fn test_validate_success() {
    let project = create_test_project();

    cli()
        .current_dir(project.path())
        .args(["validate", "base.json", "prettier.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Presets: 2"));
}

#[test]
fn test_check_ignore() {
    let project = create_test_project();

    cli()
        .current_dir(project.path())
        .args([
            "check-ignore",
            "--config",
            "base.json",
            "dist/bundle.js",
            "src/index.js",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("dist/bundle.js: ignored by 'dist'"))
        .stdout(predicate::str::contains("src/index.js: not ignored"));
}

#[test]
fn test_check_ignore_anchors_to_config_directory() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join(".lintrc.json"),
        r#"{ "ignorePatterns": ["/dist"] }"#,
    )
    .unwrap();
    let package = project.path().join("packages/a");
    fs::create_dir_all(&package).unwrap();

    cli()
        .current_dir(&package)
        .args(["check-ignore", "dist/x.js", "../../dist/x.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dist/x.js: not ignored"))
        .stdout(predicate::str::contains("../../dist/x.js: ignored by '/dist'"));

    cli()
        .current_dir(project.path())
        .args(["check-ignore", "dist/x.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dist/x.js: ignored by '/dist'"));
}

#[test]
fn test_envs_list_and_detail() {
    cli()
        .arg("envs")
        .assert()
        .success()
        .stdout(predicate::str::contains("browser"))
        .stdout(predicate::str::contains("node"));

    cli()
        .args(["envs", "browser"])
        .assert()
        .success()
        .stdout(predicate::str::contains("window: readonly"));

    cli().args(["envs", "mars"]).assert().failure();
}

#[test]
fn test_schema_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("schema/lintrc.schema.json");

    cli()
        .args(["schema", "--output"])
        .arg(&schema_path)
        .assert()
        .success();

    let content = fs::read_to_string(&schema_path).unwrap();
    let schema: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(schema["properties"]["presets"].is_object());
}

#[test]
fn test_init_creates_config_and_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .current_dir(temp_dir.path())
        .args(["init", "--prettier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file: .lintrc.json"));

    let content = fs::read_to_string(temp_dir.path().join(".lintrc.json")).unwrap();
    assert!(content.contains("prettier-compat"));
    assert!(content.contains("\"browser\""));

    cli()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // The written file resolves cleanly
    cli()
        .current_dir(temp_dir.path())
        .args(["validate"])
        .assert()
        .success();
}

#[test]
fn test_init_toml_round_trips() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .current_dir(temp_dir.path())
        .args(["init", "--format", "toml"])
        .assert()
        .success();

    cli()
        .current_dir(temp_dir.path())
        .args(["resolve", "--format", "json", ".lintrc.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("js/recommended"))
        .stdout(predicate::str::contains("webpack.prod.js"));
}
