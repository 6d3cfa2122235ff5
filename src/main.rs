// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Extract | Apply | Vcs | Options | Configs | Version
//! ```

use std::process::ExitCode;

use lokit::cli::global::GlobalOptions;
use lokit::cli::{self, Command};
use lokit::cmd::config::{run_configs_command, run_options_command};
use lokit::cmd::store::{run_apply_command, run_extract_command};
use lokit::cmd::vcs::run_vcs_command;
use lokit::config::Config;
use lokit::config::loader::ConfigLoader;
use lokit::logging::init_logging;
use lokit::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Extract(args)) => {
            load_config(&cli.global).and_then(|config| run_extract_command(args, &config))
        }
        Some(Command::Apply(args)) => load_config(&cli.global)
            .and_then(|config| run_apply_command(args, &config, cli.global.dry)),
        Some(Command::Vcs(args)) => match load_config(&cli.global) {
            Ok(config) => run_vcs_command(args, &config, cli.global.dry).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
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
    let mut loader = ConfigLoader::new().add_toml_file_optional("lokit.toml");
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix("LOKIT")
}

fn load_config(global: &GlobalOptions) -> lokit::error::Result<Config> {
    let loader = build_config_loader(global);
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
