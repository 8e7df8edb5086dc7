// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub repository URL and pull request reference parsing.
//!
//! ```text
//!   github://Owner/name.git           --+
//!   git@github.com:Owner/name.git     --+--> RepositoryUrl { scheme, owner, name }
//!   https://github.com/Owner/name.git --+        |
//!                                               +--> ssh() / https() / directory()
//!                                               +--> matches("owner/name")
//!                                               +--> replace_github_url()
//!
//!   Owner/name#123                             --+
//!   https://github.com/Owner/name/pull/123     --+--> PullRequestRef { repository, number }
//! ```
//!
//! Parsing is purely syntactic. Nothing here touches the network or logs.

pub mod pr;
pub mod url;

pub use pr::{PullRequestRef, parse_pull_request_ref};
pub use url::{RepositoryUrl, UrlScheme, replace_github_url};

/// Host accepted in every URL form.
pub const GITHUB_HOST: &str = "github.com";

/// Suffix every repository name carries in URL form.
pub const GIT_SUFFIX: &str = ".git";

/// Splits `owner/name` into its two components.
///
/// Anything with fewer or more path segments is rejected, as is a component
/// that is not a valid GitHub name.
pub(crate) fn split_owner_name(value: &str) -> Option<(&str, &str)> {
    let (owner, name) = value.split_once('/')?;
    (is_valid_component(owner) && is_valid_component(name)).then_some((owner, name))
}

/// Non-empty, ASCII alphanumerics plus `.`, `-` and `_`, and no `..`.
fn is_valid_component(component: &str) -> bool {
    !component.is_empty()
        && component != "."
        && !component.contains("..")
        && component
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
}
