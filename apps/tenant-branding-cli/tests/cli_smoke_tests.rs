#![allow(clippy::unwrap_used, clippy::expect_used, clippy::non_ascii_literal)]

//! CLI smoke tests for the tenant-branding binary
//!
//! These tests verify help output, configuration validation and the JSON
//! printed by each subcommand.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

const DIRECTORY_YAML: &str = r##"
directory:
  tenants:
    - slug: "bils"
      name: "Bils Locadora"
      primaryColor: "#112233"
      secondaryColor: "#ffffff"
    - slug: "acme"
      name: "Acme Rentals"
      settings:
        customDomain: "acme.com.br"
    - slug: "dormant"
      name: "Dormant"
      isActive: false
"##;

/// Helper to run the tenant-branding binary with given arguments
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tenant-branding"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute tenant-branding")
}

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("branding.yaml");
    std::fs::write(&path, DIRECTORY_YAML).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_cli_help_command() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    for subcommand in ["resolve", "recovery", "persist", "check"] {
        assert!(stdout.contains(subcommand), "Should list '{subcommand}'");
    }
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_cli(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tenant-branding"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_cli_missing_config_file() {
    let output = run_cli(&["--config", "/nonexistent/branding.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should report missing config file, got: {stderr}"
    );
}

#[test]
fn test_cli_check_command() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = run_cli(&["--config", path_arg(&config), "check"]);

    assert!(output.status.success(), "Check should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("locadoras.com"));
}

#[test]
fn test_cli_check_rejects_invalid_branding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "branding:\n  root_domain: \".locadoras.com\"\n").unwrap();

    let output = run_cli(&["--config", path_arg(&path), "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("root_domain"), "got: {stderr}");
}

#[test]
fn test_cli_resolve_subdomain_tenant() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = run_cli(&[
        "--config",
        path_arg(&config),
        "resolve",
        "--url",
        "https://bils.locadoras.com/equipamentos",
    ]);
    let json = stdout_json(&output);

    assert_eq!(json["context"]["resolved_slug"], "bils");
    assert_eq!(json["slug_source"], "subdomain");
    assert_eq!(json["recovery"], serde_json::Value::Null);
    assert_eq!(
        json["document"]["css_variables"]["--tenant-primary-rgb"],
        "17, 34, 51"
    );
}

#[test]
fn test_cli_resolve_unknown_slug_shows_recovery() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = run_cli(&[
        "--config",
        path_arg(&config),
        "resolve",
        "--host",
        "www.locadoras.com",
        "--path",
        "/unknown-slug",
    ]);
    let json = stdout_json(&output);

    let entries = json["recovery"]["entries"].as_array().unwrap();
    let urls: Vec<_> = entries.iter().map(|e| e["url"].as_str().unwrap()).collect();
    assert_eq!(urls, ["https://bils.locadoras.com", "https://acme.com.br"]);
}

#[test]
fn test_cli_persist_then_resolve_uses_snapshot() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let store = dir.path().join("state").join("branding.json");

    let output = run_cli(&[
        "--config",
        path_arg(&config),
        "--store",
        path_arg(&store),
        "persist",
        "--css",
        "body { color: red; }",
        "--slug",
        "acme",
    ]);
    let json = stdout_json(&output);
    assert_eq!(json["tenant_slug"], "acme");
    assert!(store.is_file());

    let output = run_cli(&[
        "--config",
        path_arg(&config),
        "--store",
        path_arg(&store),
        "resolve",
        "--host",
        "bils.locadoras.com",
    ]);
    let json = stdout_json(&output);
    let styles = json["document"]["style_elements"].as_array().unwrap();
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0]["css"], "body { color: red; }");
}

#[test]
fn test_cli_persist_requires_store() {
    let output = run_cli(&["persist", "--css", "body {}"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("store"), "got: {stderr}");
}
