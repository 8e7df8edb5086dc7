// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use super::loader::{ConfigLoader, ConfigSource};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::path::PathBuf;

const PROJECT_TOML: &str = r#"
[project]
root = "/src/graylog-project-repos"
force_https_repos = true

[[modules]]
name = "graylog2-server"
repository = "github://Graylog2/graylog2-server.git"
server = true

[[modules.submodules]]
name = "graylog2-web-interface"
path = "graylog2-web-interface"

[[modules]]
name = "graylog-plugin-collector"
repository = "git@github.com:Graylog2/graylog-plugin-collector.git"
revision = "4.0"
path = "plugins/collector"
"#;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.project.root, PathBuf::from("."));
    assert!(!config.project.force_https_repos);
    assert_eq!(config.project.web_modules_file, "web-modules.json");
    assert!(config.modules.is_empty());
}

#[test]
fn test_parse_empty() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.project.web_modules_file, "web-modules.json");
    assert!(config.modules.is_empty());
}

#[test]
fn test_parse_modules() {
    let config = Config::parse(PROJECT_TOML).unwrap();

    assert_eq!(config.project.root, PathBuf::from("/src/graylog-project-repos"));
    assert!(config.project.force_https_repos);
    assert_eq!(config.modules.len(), 2);

    let server = &config.modules[0];
    assert_eq!(server.name, "graylog2-server");
    assert_eq!(server.revision, "master");
    assert!(server.server);
    assert!(server.path.is_none());
    assert_eq!(server.submodules.len(), 1);
    assert_eq!(
        server.submodules[0].path,
        PathBuf::from("graylog2-web-interface")
    );

    let plugin = &config.modules[1];
    assert_eq!(plugin.revision, "4.0");
    assert!(!plugin.server);
    assert_eq!(plugin.path, Some(PathBuf::from("plugins/collector")));
}

#[test]
fn test_parse_global_section() {
    let toml = r#"
[global]
dry = true
output_log_level = 4
log_file = "logs/gproj.log"
log_json = true
"#;
    let config = Config::parse(toml).unwrap();
    assert!(config.global.log_json);
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/gproj.log")));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(Config::parse("[project]\nunknown = 1\n").is_err());
    assert!(Config::parse("[[modules]]\nname = \"a\"\nrepository = \"b\"\nfoo = 1\n").is_err());
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 7\n").is_err());
}

#[test]
fn test_parse_rejects_module_without_repository() {
    assert!(Config::parse("[[modules]]\nname = \"a\"\n").is_err());
}

#[test]
fn test_validate_web_modules_file() {
    let err = Config::parse("[project]\nweb_modules_file = \"nested/web.json\"\n").unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>();
    assert!(
        matches!(config_err, Some(ConfigError::InvalidValue { key, .. }) if key == "web_modules_file"),
        "{err:#}"
    );
    assert!(Config::parse("[project]\nweb_modules_file = \"\"\n").is_err());
}

#[test]
fn test_validate_empty_module_name() {
    let toml = "[[modules]]\nname = \"\"\nrepository = \"github://a/b.git\"\n";
    let err = Config::parse(toml).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'name' in section '[modules]': module #1 has an empty name"
    );
}

#[test]
fn test_later_sources_override_earlier() {
    let config = ConfigLoader::new()
        .add_toml_str("[project]\nroot = \"/first\"\nforce_https_repos = true\n")
        .add_toml_str("[project]\nroot = \"/second\"\n")
        .build()
        .unwrap();
    assert_eq!(config.project.root, PathBuf::from("/second"));
    assert!(config.project.force_https_repos);
}

#[test]
fn test_set_overrides() {
    let config = ConfigLoader::new()
        .add_toml_str(PROJECT_TOML)
        .set_overrides(&["global.dry=true", "project.root = /override"])
        .unwrap()
        .build()
        .unwrap();
    assert!(config.global.dry);
    assert_eq!(config.project.root, PathBuf::from("/override"));
}

#[test]
fn test_set_overrides_rejects_malformed_entries() {
    for entry in ["dry", "dry=true", ".dry=true"] {
        let err = ConfigLoader::new().set_overrides(&[entry]).err();
        assert!(
            matches!(
                err.as_ref().and_then(|e| e.downcast_ref::<ConfigError>()),
                Some(ConfigError::InvalidOverride(_))
            ),
            "{entry}"
        );
    }
}

#[test]
fn test_set_rejects_unparsable_key() {
    let err = ConfigLoader::new().set("project[", "x").err();
    assert!(
        matches!(
            err.as_ref().and_then(|e| e.downcast_ref::<ConfigError>()),
            Some(ConfigError::InvalidOverride(key)) if key == "project["
        ),
        "{err:?}"
    );
}

#[test]
fn test_sources_keep_insertion_order() {
    let loader = ConfigLoader::new()
        .add_toml_file("project.toml")
        .add_toml_str("");
    assert_eq!(
        loader.sources(),
        [
            ConfigSource::File(PathBuf::from("project.toml")),
            ConfigSource::Inline
        ]
    );
}

#[test]
fn test_missing_required_file_fails() {
    let result = Config::from_file("/nonexistent/gproj.toml");
    assert!(result.is_err());
}

#[test]
fn test_optional_file_not_listed_when_absent() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/gproj.toml");
    assert!(loader.sources().is_empty());
}

#[test]
fn test_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file("project.toml");
    insta::assert_snapshot!(
        loader.format_loaded_files().join("\n"),
        @r"
    1. [string] <string>
    2. [file] project.toml
    "
    );
}

#[test]
fn test_format_options() {
    let config = Config::parse(PROJECT_TOML).unwrap();
    let options = config.format_options();
    insta::assert_snapshot!(options.join("\n"), @r"
    global.dry                                                = false
    global.file_log_level                                     = 5
    global.log_json                                           = false
    global.output_log_level                                   = 3
    modules.graylog-plugin-collector.path                     = plugins/collector
    modules.graylog-plugin-collector.repository               = git@github.com:Graylog2/graylog-plugin-collector.git
    modules.graylog-plugin-collector.revision                 = 4.0
    modules.graylog2-server.repository                        = github://Graylog2/graylog2-server.git
    modules.graylog2-server.revision                          = master
    modules.graylog2-server.server                            = true
    modules.graylog2-server.submodules.graylog2-web-interface = graylog2-web-interface
    project.force_https_repos                                 = true
    project.root                                              = /src/graylog-project-repos
    project.web_modules_file                                  = web-modules.json
    ");
}
