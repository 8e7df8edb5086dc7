// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! URL command: inspect and rewrite GitHub repository URLs.

use anyhow::Context;

use crate::cli::url::{UrlArgs, UrlOperation};
use crate::error::Result;
use crate::github::{RepositoryUrl, replace_github_url};

/// Main handler for the url command.
///
/// Returns `false` when `url matches` finds no match.
///
/// # Errors
///
/// Returns an error if a URL or replacement cannot be parsed.
pub fn run_url_command(args: &UrlArgs) -> Result<bool> {
    match &args.operation {
        UrlOperation::Show { url } => {
            let parsed = RepositoryUrl::parse(url)?;
            for line in format_url_details(&parsed) {
                println!("{line}");
            }
            Ok(true)
        }
        UrlOperation::Replace { url, repository } => {
            let replaced = replace_github_url(url, repository)
                .with_context(|| format!("failed to point {url} at {repository}"))?;
            println!("{replaced}");
            Ok(true)
        }
        UrlOperation::Matches { url, repository } => {
            let matched = RepositoryUrl::parse(url)?.matches(repository);
            println!("{matched}");
            Ok(matched)
        }
    }
}

/// Every rendering of `url`, one `label value` pair per line.
#[must_use]
pub fn format_url_details(url: &RepositoryUrl) -> Vec<String> {
    [
        ("scheme", url.scheme().to_string()),
        ("owner", url.owner().to_string()),
        ("name", url.name().to_string()),
        ("ssh", url.ssh()),
        ("https", url.https()),
        ("directory", url.directory().to_string()),
    ]
    .into_iter()
    .map(|(label, value)| format!("{label:<10} {value}"))
    .collect()
}
