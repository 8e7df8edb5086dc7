// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronization of generated project files.
//!
//! ```text
//! Project --> server_module()  ----------------------+
//!        \--> for_each_module_or_submodules          |
//!               filter is_npm_module                 v
//!                   --> WebModules --> <server>/web-modules.json
//!                                      (temp file + persist)
//! ```
//!
//! The manifest is compact JSON:
//!
//! ```json
//! {"modules":[{"name":"web-interface","path":"/repos/server/web-interface"}]}
//! ```

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{FsError, ProjectError, Result};
use crate::project::Project;

/// Contents of the web modules manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebModules {
    pub modules: Vec<WebModule>,
}

/// One npm module entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebModule {
    pub name: String,
    pub path: String,
}

/// Options controlling a sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// File name written inside the server module.
    pub web_modules_file: String,
    /// Compute everything, write nothing.
    pub dry: bool,
}

impl SyncOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            web_modules_file: config.project.web_modules_file.clone(),
            dry: config.global.dry,
        }
    }
}

/// Outcome of [`sync_project`].
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Where the manifest was (or would have been) written.
    pub web_modules_path: PathBuf,
    pub web_modules: WebModules,
    /// False on dry runs.
    pub written: bool,
}

/// Collects the npm modules of `project`, in declaration order.
#[must_use]
pub fn collect_web_modules(project: &Project) -> WebModules {
    let mut modules = Vec::new();
    project.for_each_module_or_submodules(|module| {
        if module.is_npm_module() {
            modules.push(WebModule {
                name: module.name().to_string(),
                path: module.path().display().to_string(),
            });
        }
    });
    WebModules { modules }
}

/// Regenerates the project's generated files.
///
/// # Errors
///
/// Returns `ProjectError::NoServerModule` if no module is flagged `server`,
/// or an error if the manifest cannot be serialized or written.
pub fn sync_project(project: &Project, options: &SyncOptions) -> Result<SyncReport> {
    let server = project
        .server_module()
        .ok_or(ProjectError::NoServerModule)?;

    let web_modules = collect_web_modules(project);
    let web_modules_path = server.path().join(&options.web_modules_file);
    debug!(
        server = server.name(),
        count = web_modules.modules.len(),
        "collected web modules"
    );

    if options.dry {
        info!(path = %web_modules_path.display(), "[DRY-RUN] would generate web modules file");
        return Ok(SyncReport {
            web_modules_path,
            web_modules,
            written: false,
        });
    }

    write_web_modules_file(&web_modules_path, &web_modules)?;

    Ok(SyncReport {
        web_modules_path,
        web_modules,
        written: true,
    })
}

/// Serializes `modules` and atomically replaces `path`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_web_modules_file(path: &Path, modules: &WebModules) -> Result<()> {
    let buf = serde_json::to_vec(modules).context("couldn't serialize the web modules")?;

    info!(path = %path.display(), "generating web modules file");

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let io_error = |source| FsError::IoError {
        path: path.display().to_string(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(&buf).map_err(io_error)?;

    // Temp files are created 0600; the manifest is read by the web build.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt as _;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(io_error)?;
    }

    file.persist(path).map_err(|e| io_error(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests;
