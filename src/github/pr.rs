// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pull request reference parsing.
//!
//! ```text
//! Owner/name#123                          --> ("Owner/name", 123)
//! https://github.com/Owner/name/pull/123  --> ("Owner/name", 123)
//! ```

use std::fmt;
use std::str::FromStr;

use super::{GIT_SUFFIX, GITHUB_HOST, split_owner_name};
use crate::error::GithubError;

const EXPECTED: &str = "pull request reference";

/// A pull request identified by repository and number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PullRequestRef {
    repository: String,
    number: u64,
}

impl PullRequestRef {
    /// Parses the shorthand or the URL form.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Format`] if the input matches neither form, the
    /// host is not GitHub, or the number is missing, non-numeric or zero.
    pub fn parse(input: &str) -> Result<Self, GithubError> {
        let invalid = || GithubError::format(input, EXPECTED);

        let (repository, digits) = if let Some(rest) = input.strip_prefix("https://") {
            let path = rest
                .strip_prefix(GITHUB_HOST)
                .and_then(|p| p.strip_prefix('/'))
                .ok_or_else(invalid)?;
            path.rsplit_once("/pull/").ok_or_else(invalid)?
        } else {
            input.split_once('#').ok_or_else(invalid)?
        };

        let (owner, name) = split_owner_name(repository)
            .filter(|(_, name)| !name.ends_with(GIT_SUFFIX))
            .ok_or_else(invalid)?;
        let number = parse_number(digits).ok_or_else(invalid)?;

        Ok(Self {
            repository: format!("{owner}/{name}"),
            number,
        })
    }

    /// `owner/name` of the target repository.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Ref under which GitHub publishes the pull request head.
    #[must_use]
    pub fn refspec(&self) -> String {
        format!("refs/pull/{}/head", self.number)
    }
}

/// Strictly ASCII digits, no sign, greater than zero.
fn parse_number(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok().filter(|n| *n > 0)
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repository, self.number)
    }
}

impl FromStr for PullRequestRef {
    type Err = GithubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses a pull request reference into `(repository, number)`.
///
/// # Errors
///
/// See [`PullRequestRef::parse`].
pub fn parse_pull_request_ref(input: &str) -> Result<(String, u64), GithubError> {
    let pr = PullRequestRef::parse(input)?;
    Ok((pr.repository, pr.number))
}
