// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project model built from the `[[modules]]` configuration.
//!
//! ```text
//! Config.modules --> Project::from_config --> [Module]
//!                    - parse repository URL     |
//!                    - resolve path vs root     +--> for_each_module
//!                    - reject duplicates        +--> for_each_module_or_submodules
//!                                               +--> server_module / find_by_repository
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::config::Config;
use crate::config::types::{ModuleConfig, SubmoduleConfig};
use crate::error::{ProjectError, Result};
use crate::github::RepositoryUrl;

/// Marker file identifying an npm (web) module.
pub const NPM_MANIFEST: &str = "package.json";

/// A checked-out module or one of its submodules.
///
/// Submodules have no repository of their own.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    path: PathBuf,
    repository: Option<RepositoryUrl>,
    revision: String,
    server: bool,
    submodules: Vec<Module>,
}

impl Module {
    fn from_config(root: &Path, config: &ModuleConfig) -> Result<Self> {
        let repository = RepositoryUrl::parse(&config.repository).map_err(|source| {
            ProjectError::InvalidRepository {
                module: config.name.clone(),
                source,
            }
        })?;

        let path = config
            .path
            .as_ref()
            .map_or_else(|| root.join(repository.directory()), |p| root.join(p));

        let submodules = config
            .submodules
            .iter()
            .map(|sub| Self::submodule(&config.name, &path, sub))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: config.name.clone(),
            path,
            repository: Some(repository),
            revision: config.revision.clone(),
            server: config.server,
            submodules,
        })
    }

    fn submodule(parent: &str, parent_path: &Path, config: &SubmoduleConfig) -> Result<Self> {
        if config.path.as_os_str().is_empty() {
            return Err(ProjectError::MissingPath {
                module: parent.to_string(),
                name: config.name.clone(),
            }
            .into());
        }

        Ok(Self {
            name: config.name.clone(),
            path: parent_path.join(&config.path),
            repository: None,
            revision: String::new(),
            server: false,
            submodules: Vec::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checkout path, already joined with the project root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Repository URL; `None` for submodules.
    #[must_use]
    pub const fn repository(&self) -> Option<&RepositoryUrl> {
        self.repository.as_ref()
    }

    /// Revision to check out; empty for submodules.
    #[must_use]
    pub fn revision(&self) -> &str {
        &self.revision
    }

    #[must_use]
    pub const fn is_server(&self) -> bool {
        self.server
    }

    #[must_use]
    pub fn submodules(&self) -> &[Self] {
        &self.submodules
    }

    #[must_use]
    pub const fn has_submodules(&self) -> bool {
        !self.submodules.is_empty()
    }

    /// Whether the module contains a `package.json`.
    #[must_use]
    pub fn is_npm_module(&self) -> bool {
        self.path.join(NPM_MANIFEST).is_file()
    }

    /// URL to clone the module from.
    ///
    /// HTTPS when `force_https` is set or the URL was written as HTTPS,
    /// SSH otherwise (custom `github://` URLs clone over SSH).
    #[must_use]
    pub fn clone_url(&self, force_https: bool) -> Option<String> {
        self.repository.as_ref().map(|url| {
            if force_https || url.is_https() {
                url.https()
            } else {
                url.ssh()
            }
        })
    }
}

/// All modules of a project, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Project {
    root: PathBuf,
    modules: Vec<Module>,
}

impl Project {
    /// Builds the project model from configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ProjectError`] if a module repository is not a valid GitHub
    /// URL, a submodule has no path, or two modules share a name.
    pub fn from_config(config: &Config) -> Result<Self> {
        let root = config.project.root.clone();
        let mut seen = BTreeSet::new();
        let mut modules = Vec::with_capacity(config.modules.len());

        for module_config in &config.modules {
            if !seen.insert(module_config.name.as_str()) {
                return Err(ProjectError::DuplicateModule {
                    name: module_config.name.clone(),
                }
                .into());
            }

            let module = Module::from_config(&root, module_config)?;
            trace!(
                module = module.name(),
                path = %module.path().display(),
                "loaded module"
            );
            modules.push(module);
        }

        debug!(root = %root.display(), modules = modules.len(), "project loaded");
        Ok(Self { root, modules })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Calls `f` for every top-level module.
    pub fn for_each_module<F: FnMut(&Module)>(&self, f: F) {
        self.modules.iter().for_each(f);
    }

    /// Calls `f` for every module without submodules and for every
    /// submodule; a module that has submodules is replaced by them.
    pub fn for_each_module_or_submodules<F: FnMut(&Module)>(&self, mut f: F) {
        for module in &self.modules {
            if module.has_submodules() {
                module.submodules.iter().for_each(&mut f);
            } else {
                f(module);
            }
        }
    }

    /// Top-level module flagged as the server; the last one wins.
    #[must_use]
    pub fn server_module(&self) -> Option<&Module> {
        self.modules.iter().rfind(|m| m.is_server())
    }

    /// Module whose repository matches `owner/name`, ignoring case.
    #[must_use]
    pub fn find_by_repository(&self, repository: &str) -> Option<&Module> {
        self.modules
            .iter()
            .find(|m| m.repository().is_some_and(|url| url.matches(repository)))
    }
}
