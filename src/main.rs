// gproj: Multi-Module Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Inis | Modules | Sync | Url | Pr
//! ```

use std::process::ExitCode;

use gproj::cli::global::GlobalOptions;
use gproj::cli::{self, Command};
use gproj::cmd::config::{run_inis_command, run_options_command};
use gproj::cmd::modules::run_modules_command;
use gproj::cmd::pr::run_pr_command;
use gproj::cmd::sync::run_sync_command;
use gproj::cmd::url::run_url_command;
use gproj::config::Config;
use gproj::config::loader::ConfigLoader;
use gproj::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Default config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "gproj.toml";

fn main() -> ExitCode {
    let cli = cli::parse();

    // Config drives the log settings, so a broken config is reported
    // before logging exists.
    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard: LogGuard = match init_logging(&LogConfig::from_global(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(true)
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(true)
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(true)
        }
        Some(Command::Modules) => run_modules_command(config).map(|()| true),
        Some(Command::Sync) => run_sync_command(config).map(|()| true),
        Some(Command::Url(args)) => run_url_command(args),
        Some(Command::Pr(args)) => run_pr_command(args, config).map(|()| true),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    loader.with_env_prefix("GPROJ")
}

fn load_config(global: &GlobalOptions) -> gproj::error::Result<Config> {
    build_config_loader(global)
        .set_overrides(&global.to_config_overrides())?
        .build()
}
