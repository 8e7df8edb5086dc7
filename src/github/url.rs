// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository URL parsing and rendering.
//!
//! | Scheme   | Form                                  |
//! |----------|---------------------------------------|
//! | `Custom` | `github://<owner>/<name>.git`         |
//! | `Ssh`    | `git@github.com:<owner>/<name>.git`   |
//! | `Https`  | `https://github.com/<owner>/<name>.git` |

use std::fmt;
use std::str::FromStr;

use super::{GIT_SUFFIX, split_owner_name};
use crate::error::GithubError;

const EXPECTED: &str = "GitHub repository URL";

/// Textual convention a repository URL was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlScheme {
    /// `github://owner/name.git`
    Custom,
    /// `git@github.com:owner/name.git`
    Ssh,
    /// `https://github.com/owner/name.git`
    Https,
}

impl UrlScheme {
    /// Schemes in the order the parser tries them.
    pub const ALL: [Self; 3] = [Self::Custom, Self::Ssh, Self::Https];

    /// Fixed prefix preceding `owner/name.git`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Custom => "github://",
            Self::Ssh => "git@github.com:",
            Self::Https => "https://github.com/",
        }
    }
}

impl fmt::Display for UrlScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom => write!(f, "custom"),
            Self::Ssh => write!(f, "ssh"),
            Self::Https => write!(f, "https"),
        }
    }
}

/// A parsed GitHub repository location.
///
/// Owner and name keep their original casing; the name keeps its `.git`
/// suffix. Comparisons are case-insensitive, see [`RepositoryUrl::matches`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryUrl {
    scheme: UrlScheme,
    owner: String,
    name: String,
}

impl RepositoryUrl {
    /// Parses one of the three recognized URL forms.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Format`] if no scheme matches or the path is not
    /// `owner/name`, and [`GithubError::Suffix`] if the name lacks `.git`.
    pub fn parse(input: &str) -> Result<Self, GithubError> {
        let (scheme, path) = UrlScheme::ALL
            .into_iter()
            .find_map(|scheme| Some((scheme, input.strip_prefix(scheme.prefix())?)))
            .ok_or_else(|| GithubError::format(input, EXPECTED))?;

        let (owner, name) =
            split_owner_name(path).ok_or_else(|| GithubError::format(input, EXPECTED))?;

        match name.strip_suffix(GIT_SUFFIX) {
            None => Err(GithubError::suffix(input)),
            Some(bare) if bare.is_empty() || bare.ends_with(GIT_SUFFIX) => {
                Err(GithubError::format(input, EXPECTED))
            }
            Some(_) => Ok(Self {
                scheme,
                owner: owner.to_string(),
                name: name.to_string(),
            }),
        }
    }

    /// Scheme the URL was written in.
    #[must_use]
    pub const fn scheme(&self) -> UrlScheme {
        self.scheme
    }

    /// Repository owner (user or organization).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name without the `.git` suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        self.directory()
    }

    /// `owner/name` without the `.git` suffix.
    #[must_use]
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.name())
    }

    /// Renders `git@github.com:<owner>/<name>.git`.
    #[must_use]
    pub fn ssh(&self) -> String {
        self.render(UrlScheme::Ssh)
    }

    /// Renders `https://github.com/<owner>/<name>.git`.
    #[must_use]
    pub fn https(&self) -> String {
        self.render(UrlScheme::Https)
    }

    /// Default local clone directory: the name without `.git`.
    #[must_use]
    pub fn directory(&self) -> &str {
        self.name.strip_suffix(GIT_SUFFIX).unwrap_or(&self.name)
    }

    #[must_use]
    pub fn is_ssh(&self) -> bool {
        self.scheme == UrlScheme::Ssh
    }

    #[must_use]
    pub fn is_https(&self) -> bool {
        self.scheme == UrlScheme::Https
    }

    /// Checks a bare `owner/name` candidate, ignoring case.
    ///
    /// Candidates carrying a scheme or a `.git` suffix never match.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.ends_with(GIT_SUFFIX) {
            return false;
        }
        split_owner_name(candidate).is_some_and(|(owner, name)| {
            owner.to_lowercase() == self.owner.to_lowercase()
                && name.to_lowercase() == self.name().to_lowercase()
        })
    }

    /// Returns a copy pointing at `owner/name`, keeping the scheme.
    fn with_repository(&self, owner: &str, name: &str) -> Self {
        Self {
            scheme: self.scheme,
            owner: owner.to_string(),
            name: format!("{name}{GIT_SUFFIX}"),
        }
    }

    fn render(&self, scheme: UrlScheme) -> String {
        format!("{}{}/{}", scheme.prefix(), self.owner, self.name)
    }
}

impl fmt::Display for RepositoryUrl {
    /// Renders the URL in the scheme it was parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.scheme))
    }
}

impl FromStr for RepositoryUrl {
    type Err = GithubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Points `input` at another repository while keeping its scheme.
///
/// `replacement` is `owner/name`, optionally followed by `.git`.
///
/// # Errors
///
/// Returns a [`GithubError`] if `input` does not parse or `replacement` is not
/// of the form `owner/name`.
pub fn replace_github_url(input: &str, replacement: &str) -> Result<String, GithubError> {
    let url = RepositoryUrl::parse(input)?;

    let bare = replacement
        .strip_suffix(GIT_SUFFIX)
        .unwrap_or(replacement);
    let (owner, name) = split_owner_name(bare)
        .ok_or_else(|| GithubError::format(replacement, "owner/name repository"))?;

    Ok(url.with_repository(owner, name).to_string())
}
