// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{SyncOptions, WebModule, WebModules, collect_web_modules, sync_project};
use crate::config::Config;
use crate::error::ProjectError;
use crate::project::{NPM_MANIFEST, Project};
use std::path::Path;
use tempfile::TempDir;

const PROJECT_TOML: &str = r#"
[[modules]]
name = "server"
repository = "github://Graylog2/graylog2-server.git"
server = true

[[modules.submodules]]
name = "web-interface"
path = "graylog2-web-interface"

[[modules.submodules]]
name = "storage"
path = "graylog-storage"

[[modules]]
name = "collector"
repository = "github://Graylog2/graylog-plugin-collector.git"

[[modules]]
name = "backend-only"
repository = "github://Graylog2/graylog-plugin-backend.git"
"#;

fn touch_npm(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(NPM_MANIFEST), "{}").unwrap();
}

fn fixture() -> (TempDir, Project) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let root = temp.path();

    touch_npm(&root.join("graylog2-server").join("graylog2-web-interface"));
    std::fs::create_dir_all(root.join("graylog2-server").join("graylog-storage")).unwrap();
    touch_npm(&root.join("graylog-plugin-collector"));
    std::fs::create_dir_all(root.join("graylog-plugin-backend")).unwrap();

    let mut config = Config::parse(PROJECT_TOML).unwrap();
    config.project.root = root.to_path_buf();
    let project = Project::from_config(&config).unwrap();
    (temp, project)
}

fn options(dry: bool) -> SyncOptions {
    SyncOptions {
        web_modules_file: "web-modules.json".to_string(),
        dry,
    }
}

#[test]
fn test_collect_web_modules() {
    let (temp, project) = fixture();
    let root = temp.path();
    let modules = collect_web_modules(&project);
    assert_eq!(
        modules.modules,
        [
            WebModule {
                name: "web-interface".to_string(),
                path: root
                    .join("graylog2-server")
                    .join("graylog2-web-interface")
                    .display()
                    .to_string(),
            },
            WebModule {
                name: "collector".to_string(),
                path: root.join("graylog-plugin-collector").display().to_string(),
            },
        ]
    );
}

#[test]
fn test_sync_writes_manifest_into_server_module() {
    let (temp, project) = fixture();
    let report = sync_project(&project, &options(false)).unwrap();

    let expected_path = temp.path().join("graylog2-server").join("web-modules.json");
    assert_eq!(report.web_modules_path, expected_path);
    assert!(report.written);

    let content = std::fs::read_to_string(&expected_path).unwrap();
    assert!(!content.contains('\n'), "manifest should be compact JSON");
    let parsed: WebModules = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, report.web_modules);
    assert_eq!(parsed.modules.len(), 2);
}

#[test]
fn test_sync_overwrites_existing_manifest() {
    let (temp, project) = fixture();
    let path = temp.path().join("graylog2-server").join("web-modules.json");
    std::fs::write(&path, "stale").unwrap();

    sync_project(&project, &options(false)).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("{\"modules\":["), "{content}");
}

#[test]
fn test_sync_dry_run_writes_nothing() {
    let (temp, project) = fixture();
    let report = sync_project(&project, &options(true)).unwrap();

    assert!(!report.written);
    assert_eq!(report.web_modules.modules.len(), 2);
    assert!(
        !temp
            .path()
            .join("graylog2-server")
            .join("web-modules.json")
            .exists()
    );
}

#[test]
fn test_sync_without_server_module_fails() {
    let config =
        Config::parse("[[modules]]\nname = \"a\"\nrepository = \"github://a/b.git\"\n").unwrap();
    let project = Project::from_config(&config).unwrap();
    let err = sync_project(&project, &options(false)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProjectError>(),
        Some(ProjectError::NoServerModule)
    ));
}

#[test]
fn test_sync_missing_server_directory_reports_path() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let mut config = Config::parse(
        "[[modules]]\nname = \"server\"\nrepository = \"github://a/server.git\"\nserver = true\n",
    )
    .unwrap();
    config.project.root = temp.path().to_path_buf();
    let project = Project::from_config(&config).unwrap();

    let err = sync_project(&project, &options(false)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("web-modules.json"), "{message}");
}

#[test]
fn test_empty_manifest_serialization() {
    let json = serde_json::to_string(&WebModules::default()).unwrap();
    insta::assert_snapshot!(json, @r#"{"modules":[]}"#);
}

#[test]
fn test_options_from_config() {
    let mut config = Config::default();
    config.global.dry = true;
    config.project.web_modules_file = "modules.json".to_string();
    let options = SyncOptions::from_config(&config);
    assert!(options.dry);
    assert_eq!(options.web_modules_file, "modules.json");
}
