// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Modules command: lists the project modules.

use crate::config::Config;
use crate::error::Result;
use crate::project::{Module, Project};

/// Main handler for the modules command.
///
/// # Errors
///
/// Returns an error if the project cannot be built from the configuration.
pub fn run_modules_command(config: &Config) -> Result<()> {
    let project = Project::from_config(config)?;
    let lines = format_modules(&project, config.project.force_https_repos);

    if lines.is_empty() {
        println!("No modules configured");
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// One line per module, submodules indented below their parent.
#[must_use]
pub fn format_modules(project: &Project, force_https: bool) -> Vec<String> {
    let mut lines = Vec::new();
    project.for_each_module(|module| {
        lines.push(format_module(module, force_https));
        for submodule in module.submodules() {
            lines.push(format!("  {}", format_module(submodule, force_https)));
        }
    });
    lines
}

fn format_module(module: &Module, force_https: bool) -> String {
    let mut flags = Vec::new();
    if module.is_server() {
        flags.push("server");
    }
    if module.is_npm_module() {
        flags.push("npm");
    }

    let mut line = format!("{:<30} {}", module.name(), module.path().display());
    if let Some(url) = module.clone_url(force_https) {
        line.push_str(&format!(" {url} ({})", module.revision()));
    }
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}
