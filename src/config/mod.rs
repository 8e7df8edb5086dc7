// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gproj.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --ini files (in order)
//! 3. local gproj.toml (cwd)
//! 4. GPROJ_* env vars
//! 5. --set overrides and CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GPROJ_GLOBAL__DRY=true                → global.dry = true
//! GPROJ_PROJECT__ROOT=/src/project      → project.root = "/src/project"
//! GPROJ_PROJECT__FORCE_HTTPS_REPOS=true → project.force_https_repos = true
//! ```
//!
//! # Modules
//!
//! ```toml
//! [[modules]]
//! name = "graylog2-server"
//! repository = "github://Graylog2/graylog2-server.git"
//! server = true
//!
//! [[modules.submodules]]
//! name = "graylog2-web-interface"
//! path = "graylog2-web-interface"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, ModuleConfig, ProjectConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Project-wide settings.
    pub project: ProjectConfig,
    /// Modules in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<ModuleConfig>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gproj::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("project.toml")
    ///     .add_toml_file_optional("gproj.toml")
    ///     .with_env_prefix("GPROJ")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `project.web_modules_file` is
    /// not a plain file name, or a module has an empty name.
    pub fn validate(&self) -> Result<()> {
        let file = Path::new(&self.project.web_modules_file);
        if self.project.web_modules_file.is_empty() || file.file_name() != Some(file.as_os_str())
        {
            return Err(ConfigError::InvalidValue {
                section: "project".to_string(),
                key: "web_modules_file".to_string(),
                message: format!(
                    "expected a file name, got '{}'",
                    self.project.web_modules_file
                ),
            }
            .into());
        }

        if let Some(index) = self.modules.iter().position(|m| m.name.is_empty()) {
            return Err(ConfigError::InvalidValue {
                section: "modules".to_string(),
                key: "name".to_string(),
                message: format!("module #{} has an empty name", index + 1),
            }
            .into());
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`; modules are
    /// keyed by name.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_project_options(&mut options);
        self.format_module_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_json".into(), self.global.log_json.to_string());
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "project.root".into(),
            self.project.root.display().to_string(),
        );
        options.insert(
            "project.force_https_repos".into(),
            self.project.force_https_repos.to_string(),
        );
        options.insert(
            "project.web_modules_file".into(),
            self.project.web_modules_file.clone(),
        );
    }

    fn format_module_options(&self, options: &mut BTreeMap<String, String>) {
        for module in &self.modules {
            let key = |field: &str| format!("modules.{}.{field}", module.name);
            options.insert(key("repository"), module.repository.clone());
            options.insert(key("revision"), module.revision.clone());
            if let Some(path) = &module.path {
                options.insert(key("path"), path.display().to_string());
            }
            if module.server {
                options.insert(key("server"), "true".to_string());
            }
            for submodule in &module.submodules {
                options.insert(
                    format!("modules.{}.submodules.{}", module.name, submodule.name),
                    submodule.path.display().to_string(),
                );
            }
        }
    }
}
