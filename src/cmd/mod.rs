// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, inis), modules, pr, sync, url
//! ```

pub mod config;
pub mod modules;
pub mod pr;
pub mod sync;
pub mod url;
