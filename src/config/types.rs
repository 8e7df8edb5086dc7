// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for gproj.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ProjectConfig, [ModuleConfig]
//! ModuleConfig: name, repository, revision, path?, server, [SubmoduleConfig]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Compute generated files without writing them.
    pub dry: bool,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub log_json: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_json: false,
        }
    }
}

/// Project-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory that module paths are relative to.
    pub root: PathBuf,
    /// Clone every module over HTTPS regardless of how its URL is written.
    pub force_https_repos: bool,
    /// File name of the web modules manifest inside the server module.
    pub web_modules_file: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            force_https_repos: false,
            web_modules_file: "web-modules.json".to_string(),
        }
    }
}

/// One top-level module of the project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    /// Module name, unique within the project.
    pub name: String,
    /// GitHub repository URL (`github://`, SSH or HTTPS form).
    pub repository: String,
    /// Branch or tag to check out.
    #[serde(default = "default_revision")]
    pub revision: String,
    /// Checkout path relative to the project root.
    /// Defaults to the repository's directory name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Whether this is the server module that receives generated files.
    #[serde(default)]
    pub server: bool,
    /// Nested modules living inside this module's checkout.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodules: Vec<SubmoduleConfig>,
}

/// A module nested inside a top-level module's checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmoduleConfig {
    /// Submodule name.
    pub name: String,
    /// Path relative to the parent module.
    pub path: PathBuf,
}

fn default_revision() -> String {
    "master".to_string()
}
