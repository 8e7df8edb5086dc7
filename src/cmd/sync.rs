// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync command implementation.

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::project::Project;
use crate::sync::{SyncOptions, sync_project};

/// Main handler for the sync command.
///
/// # Errors
///
/// Returns an error if the project cannot be built or a generated file
/// cannot be written.
pub fn run_sync_command(config: &Config) -> Result<()> {
    let project = Project::from_config(config)?;
    let options = SyncOptions::from_config(config);

    let report = sync_project(&project, &options).context("failed to sync project")?;

    if report.written {
        info!(
            path = %report.web_modules_path.display(),
            modules = report.web_modules.modules.len(),
            "project synced"
        );
    } else {
        println!(
            "[DRY-RUN] Would write {} web module(s) to {}",
            report.web_modules.modules.len(),
            report.web_modules_path.display()
        );
        for module in &report.web_modules.modules {
            println!("  {:<30} {}", module.name, module.path);
        }
    }

    Ok(())
}
