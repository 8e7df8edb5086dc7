// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `url` command.
//!
//! ```text
//! gproj url show    <URL>
//! gproj url replace <URL> <OWNER/NAME>
//! gproj url matches <URL> <OWNER/NAME>
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `url` command.
#[derive(Debug, Clone, Args)]
pub struct UrlArgs {
    #[command(subcommand)]
    pub operation: UrlOperation,
}

/// URL operations.
#[derive(Debug, Clone, Subcommand)]
pub enum UrlOperation {
    /// Shows every rendering of a repository URL.
    Show {
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Points a URL at another repository, keeping its scheme.
    Replace {
        #[arg(value_name = "URL")]
        url: String,

        /// New repository, `owner/name` with optional `.git`.
        #[arg(value_name = "OWNER/NAME")]
        repository: String,
    },

    /// Checks whether a URL refers to `owner/name`, ignoring case.
    Matches {
        #[arg(value_name = "URL")]
        url: String,

        #[arg(value_name = "OWNER/NAME")]
        repository: String,
    },
}
