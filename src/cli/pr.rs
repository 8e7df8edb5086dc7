// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `pr` command.
//!
//! ```text
//! gproj pr Graylog2/graylog2-server#123
//! gproj pr https://github.com/Graylog2/graylog2-server/pull/123
//! ```

use clap::Args;

/// Arguments for the `pr` command.
#[derive(Debug, Clone, Args)]
pub struct PrArgs {
    /// Pull request, `owner/name#number` or its GitHub URL.
    #[arg(value_name = "PR")]
    pub pr: String,
}
