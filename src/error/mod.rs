// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            AppError (~24 bytes)
//!                   |
//!   +------+------+------+------+------+
//!   |      |      |      |      |      |
//!   v      v      v      v      v      v
//! GitHub Config Project  Fs    Io   Other
//!  Box    Box    Box    Box   Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   GitHub  Format, Suffix
//!   Config  InvalidValue, InvalidOverride
//!   Project NoServerModule, DuplicateModule, InvalidRepository, MissingPath
//!   Fs      IoError
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AppError`].
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum AppError {
    /// GitHub URL or pull request reference could not be parsed.
    #[error("github error: {0}")]
    Github(#[from] Box<GithubError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Project definition error.
    #[error("project error: {0}")]
    Project(#[from] Box<ProjectError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AppError {
                fn from(err: $error) -> Self {
                    AppError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GithubError => Github,
    ConfigError => Config,
    ProjectError => Project,
    FsError => Fs,
    std::io::Error => Io,
}

// --- GitHub Errors ---

/// Errors returned by the GitHub URL and pull request parsers.
///
/// Parsing is purely syntactic, so these are the only two ways it can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GithubError {
    /// Input does not match any recognized scheme or pattern.
    #[error("'{input}' is not a valid {expected}")]
    Format {
        input: String,
        expected: &'static str,
    },

    /// Input matches a known scheme but the repository name lacks `.git`.
    #[error("missing .git suffix in repository URL '{input}'")]
    Suffix { input: String },
}

impl GithubError {
    pub(crate) fn format(input: &str, expected: &'static str) -> Self {
        Self::Format {
            input: input.to_string(),
            expected,
        }
    }

    pub(crate) fn suffix(input: &str) -> Self {
        Self::Suffix {
            input: input.to_string(),
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` option that is not of the form `section.key=value`.
    #[error("invalid option '{0}', expected 'section.key=value'")]
    InvalidOverride(String),
}

// --- Project Errors ---

/// Errors raised while building the project model.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// No module is flagged as the server module.
    #[error("couldn't find any server module in project")]
    NoServerModule,

    /// Two modules share the same name.
    #[error("duplicate module name '{name}'")]
    DuplicateModule { name: String },

    /// A module's repository is not a recognized GitHub URL.
    #[error("invalid repository for module '{module}'")]
    InvalidRepository {
        module: String,
        #[source]
        source: GithubError,
    },

    /// A submodule without a path.
    #[error("submodule '{name}' of '{module}' has no path")]
    MissingPath { module: String, name: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
