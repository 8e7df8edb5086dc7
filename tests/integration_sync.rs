// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for project sync.
//!
//! Builds a project tree on disk, loads it through the config layer and
//! checks the generated web modules manifest.

use std::path::Path;

use gproj::config::Config;
use gproj::project::{NPM_MANIFEST, Project};
use gproj::sync::{SyncOptions, sync_project};
use tempfile::TempDir;

const PROJECT_TOML: &str = r#"
[[modules]]
name = "server"
repository = "git@github.com:Graylog2/graylog2-server.git"
server = true

[[modules.submodules]]
name = "web-interface"
path = "graylog2-web-interface"

[[modules]]
name = "collector"
repository = "github://Graylog2/graylog-plugin-collector.git"

[[modules]]
name = "backend"
repository = "https://github.com/Graylog2/graylog-plugin-backend.git"
"#;

fn npm_dir(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(NPM_MANIFEST), "{}").unwrap();
}

fn load(root: &Path, overrides: &[String]) -> Config {
    Config::builder()
        .add_toml_str(PROJECT_TOML)
        .set_overrides(&[format!("project.root={}", root.display())])
        .unwrap()
        .set_overrides(overrides)
        .unwrap()
        .build()
        .unwrap()
}

fn project_tree() -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    npm_dir(&root.join("graylog2-server").join("graylog2-web-interface"));
    npm_dir(&root.join("graylog-plugin-collector"));
    std::fs::create_dir_all(root.join("graylog-plugin-backend")).unwrap();
    temp
}

fn read_manifest(path: &Path) -> serde_json::Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[test]
fn sync_writes_manifest_into_server_module() {
    let temp = project_tree();
    let root = temp.path();
    let config = load(root, &[]);
    let project = Project::from_config(&config).unwrap();

    let report = sync_project(&project, &SyncOptions::from_config(&config)).unwrap();

    let expected_path = root.join("graylog2-server").join("web-modules.json");
    assert!(report.written);
    assert_eq!(report.web_modules_path, expected_path);

    let manifest = read_manifest(&expected_path);
    let names: Vec<&str> = manifest["modules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["web-interface", "collector"]);
    assert_eq!(
        manifest["modules"][1]["path"].as_str().unwrap(),
        root.join("graylog-plugin-collector").display().to_string()
    );
}

#[test]
fn sync_honors_configured_file_name_and_dry_run() {
    let temp = project_tree();
    let root = temp.path();
    let config = load(
        root,
        &[
            "project.web_modules_file=modules.json".to_string(),
            "global.dry=true".to_string(),
        ],
    );
    let project = Project::from_config(&config).unwrap();

    let report = sync_project(&project, &SyncOptions::from_config(&config)).unwrap();

    assert!(!report.written);
    assert_eq!(
        report.web_modules_path,
        root.join("graylog2-server").join("modules.json")
    );
    assert_eq!(report.web_modules.modules.len(), 2);
    assert!(!report.web_modules_path.exists());
}

#[test]
fn sync_replaces_existing_manifest() {
    let temp = project_tree();
    let root = temp.path();
    let manifest_path = root.join("graylog2-server").join("web-modules.json");
    std::fs::write(&manifest_path, "stale").unwrap();

    let config = load(root, &[]);
    let project = Project::from_config(&config).unwrap();
    sync_project(&project, &SyncOptions::from_config(&config)).unwrap();

    let manifest = read_manifest(&manifest_path);
    assert_eq!(manifest["modules"].as_array().unwrap().len(), 2);
}

#[test]
fn sync_without_server_module_fails() {
    let config = Config::parse(
        r#"
[[modules]]
name = "collector"
repository = "github://Graylog2/graylog-plugin-collector.git"
"#,
    )
    .unwrap();
    let project = Project::from_config(&config).unwrap();

    let err = sync_project(&project, &SyncOptions::from_config(&config)).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"couldn't find any server module in project");
}
