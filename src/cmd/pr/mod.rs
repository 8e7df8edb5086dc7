// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! PR command: resolve a pull request reference to a local module.
//!
//! ```text
//! "Owner/name#123" --> PullRequestRef --> Project::find_by_repository --> PrMatch
//! ```
//!
//! Nothing is fetched; the command prints the `git fetch` line to run.

use anyhow::Context;
use tracing::{debug, warn};

use crate::cli::pr::PrArgs;
use crate::config::Config;
use crate::error::Result;
use crate::github::PullRequestRef;
use crate::project::{Module, Project};

/// A pull request together with the module that tracks its repository.
#[derive(Debug)]
pub struct PrMatch<'a> {
    pr: PullRequestRef,
    module: Option<&'a Module>,
}

impl<'a> PrMatch<'a> {
    /// Looks up the module whose repository the pull request targets.
    #[must_use]
    pub fn resolve(pr: PullRequestRef, project: &'a Project) -> Self {
        let module = project.find_by_repository(pr.repository());
        Self { pr, module }
    }

    #[must_use]
    pub const fn pr(&self) -> &PullRequestRef {
        &self.pr
    }

    #[must_use]
    pub const fn module(&self) -> Option<&'a Module> {
        self.module
    }

    /// `git` invocation that fetches the pull request head into the module.
    #[must_use]
    pub fn fetch_command(&self, force_https: bool) -> Option<String> {
        let module = self.module?;
        let url = module.clone_url(force_https)?;
        Some(format!(
            "git -C {} fetch {url} {}",
            module.path().display(),
            self.pr.refspec()
        ))
    }
}

/// Report lines for a resolved pull request.
#[must_use]
pub fn format_pr_match(pr_match: &PrMatch<'_>, force_https: bool) -> Vec<String> {
    let pr = pr_match.pr();
    let mut lines = vec![
        format!("{:<11} {}", "repository", pr.repository()),
        format!("{:<11} {}", "number", pr.number()),
        format!("{:<11} {}", "refspec", pr.refspec()),
    ];

    match pr_match.module() {
        Some(module) => {
            lines.push(format!(
                "{:<11} {} ({})",
                "module",
                module.name(),
                module.path().display()
            ));
            if let Some(command) = pr_match.fetch_command(force_https) {
                lines.push(format!("{:<11} {command}", "fetch"));
            }
        }
        None => lines.push(format!("{:<11} (not part of this project)", "module")),
    }

    lines
}

/// Main handler for the PR command.
///
/// # Errors
///
/// Returns an error if the PR reference is invalid or the project cannot be
/// built from the configuration.
pub fn run_pr_command(args: &PrArgs, config: &Config) -> Result<()> {
    let pr = PullRequestRef::parse(&args.pr)
        .with_context(|| format!("failed to parse PR argument: {}", args.pr))?;
    debug!(repository = pr.repository(), number = pr.number(), "parsed PR reference");

    let project = Project::from_config(config)?;
    let pr_match = PrMatch::resolve(pr, &project);

    if pr_match.module().is_none() {
        warn!(
            repository = pr_match.pr().repository(),
            "no module tracks this repository"
        );
    }

    for line in format_pr_match(&pr_match, config.project.force_https_repos) {
        println!("{line}");
    }

    Ok(())
}
