//! Integration tests for the bundlecfg command-line interface
//!
//! These tests run the binary against config files written into a
//! temporary project directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PROJECT_CONFIG: &str = r#"{
  "resolve": {
    "alias": [{ "find": "@", "replacement": "src/" }]
  },
  "plugins": [
    { "name": "vue" },
    { "name": "windicss", "enabled": false },
    { "name": "components", "resolvers": [{ "name": "element-plus", "importStyle": "sass" }] },
    { "name": "auto-import", "resolvers": [{ "name": "element-plus", "importStyle": "sass" }] }
  ]
}"#;

/// Helper to create a project directory containing `bundle.config.json`
fn project_with_config(body: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bundle.config.json"), body).unwrap();
    temp_dir
}

fn cmd_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bundlecfg").unwrap();
    cmd.current_dir(dir.path()).env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("bundlecfg").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("alias"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn test_check_valid_config() {
    let project = project_with_config(PROJECT_CONFIG);

    cmd_in(&project)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("vue → components → auto-import"));
}

#[test]
fn test_check_finds_config_in_parent_directory() {
    let project = project_with_config(PROJECT_CONFIG);
    let nested = project.path().join("src").join("components");
    fs::create_dir_all(&nested).unwrap();

    let mut cmd = Command::cargo_bin("bundlecfg").unwrap();
    cmd.current_dir(&nested)
        .env("RUST_LOG", "off")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aliases: 1"));
}

#[test]
fn test_check_duplicate_alias_fails() {
    let project = project_with_config(
        r#"{ "resolve": { "alias": [
            { "find": "@", "replacement": "/proj/src" },
            { "find": "@", "replacement": "/proj/lib" }
        ] } }"#,
    );

    cmd_in(&project)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate alias '@'"));
}

#[test]
fn test_check_unknown_resolver_fails() {
    let project = project_with_config(
        r#"{ "plugins": [{ "name": "components", "resolvers": [{ "name": "mystery-ui" }] }] }"#,
    );

    cmd_in(&project)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown resolver 'mystery-ui'"));
}

#[test]
fn test_check_with_extra_catalog() {
    let project = project_with_config(
        r#"{ "plugins": [{ "name": "components", "resolvers": [{ "name": "mystery-ui" }] }] }"#,
    );
    fs::write(
        project.path().join("catalog.toml"),
        "resolvers = [\"mystery-ui\"]\n",
    )
    .unwrap();

    cmd_in(&project)
        .args(["check", "--catalog", "catalog.toml"])
        .assert()
        .success();
}

#[test]
fn test_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    cmd_in(&temp_dir)
        .args(["check", "--config", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_show_human_output() {
    let project = project_with_config(PROJECT_CONFIG);

    cmd_in(&project)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("0. vue"))
        .stdout(predicate::str::contains("1. components  [element-plus: sass]"))
        .stdout(predicate::str::contains("2. auto-import  [element-plus: sass]"))
        .stdout(predicate::str::contains("windicss").not());
}

#[test]
fn test_show_json_output() {
    let project = project_with_config(PROJECT_CONFIG);

    let output = cmd_in(&project).args(["show", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let plugins = value["plugins"].as_array().unwrap();
    assert_eq!(plugins.len(), 3);
    assert_eq!(plugins[1]["resolvers"][0]["importStyle"], "sass");

    let src = project.path().canonicalize().unwrap().join("src");
    assert_eq!(
        value["resolve"]["alias"][0]["replacement"],
        serde_json::json!(src.to_string_lossy())
    );
}

#[test]
fn test_alias_resolves_against_config_dir() {
    let project = project_with_config(PROJECT_CONFIG);
    let expected = project
        .path()
        .canonicalize()
        .unwrap()
        .join("src")
        .join("components")
        .join("Foo.vue");

    cmd_in(&project)
        .args(["alias", "@/components/Foo.vue"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().into_owned()));
}

#[test]
fn test_alias_unresolved_fails() {
    let project = project_with_config(PROJECT_CONFIG);

    cmd_in(&project)
        .args(["alias", "~/assets/logo.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unresolved alias"));
}

#[test]
fn test_alias_probe_missing_root_fails() {
    let project = project_with_config(PROJECT_CONFIG);

    cmd_in(&project)
        .args(["alias", "--probe", "@/App.vue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_alias_probe_existing_root() {
    let project = project_with_config(PROJECT_CONFIG);
    fs::create_dir(project.path().join("src")).unwrap();

    cmd_in(&project)
        .args(["alias", "--probe", "@/App.vue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("App.vue"));
}

#[test]
fn test_alias_requires_specifier() {
    let mut cmd = Command::cargo_bin("bundlecfg").unwrap();

    cmd.arg("alias")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("bundle.config.toml"),
        r#"
[resolve.alias]
"@" = "src"

[[plugins]]
name = "vue"
"#,
    )
    .unwrap();

    cmd_in(&temp_dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plugins: 1 (vue)"));
}

#[test]
fn test_watch_rejects_zero_interval() {
    let project = project_with_config(PROJECT_CONFIG);

    cmd_in(&project)
        .args(["watch", "--interval-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}
