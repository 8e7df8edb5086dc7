// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gproj using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gproj [global options] <command>
//! version | options | inis
//! modules
//! sync
//! url {show|replace|matches}
//! pr <REF>
//! ```

pub mod global;
pub mod pr;
pub mod url;


use crate::cli::global::GlobalOptions;
use crate::cli::pr::PrArgs;
use crate::cli::url::UrlArgs;
use clap::{Parser, Subcommand};

/// Multi-module project tool.
///
/// Keeps generated project files in sync and works with the GitHub
/// repositories the modules live in.
#[derive(Debug, Parser)]
#[command(
    name = "gproj",
    author,
    version,
    about = "Multi-module project tool",
    after_help = "CONFIG FILES:\n\n\
                  gproj reads `gproj.toml` from the current directory unless\n\
                  --no-default-inis is given. Additional files can be passed\n\
                  with --ini and are loaded first, in order. GPROJ_* environment\n\
                  variables and --set options override file values."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used by gproj.
    Inis,

    /// Lists the project modules.
    Modules,

    /// Regenerates generated project files.
    Sync,

    /// Parses and rewrites GitHub repository URLs.
    Url(UrlArgs),

    /// Resolves a pull request reference to a module.
    Pr(PrArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
