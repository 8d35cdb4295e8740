// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Update | Create | Delete | Batch | Commit | Compare | Options | Version
//! ```

use std::process::ExitCode;

use anyhow::Context;

use hubwrite::cli::global::GlobalOptions;
use hubwrite::cli::{self, Command};
use hubwrite::cmd::commit::run_commit;
use hubwrite::cmd::compare::run_compare;
use hubwrite::cmd::content::{run_batch, run_create, run_delete, run_update};
use hubwrite::config::Config;
use hubwrite::config::loader::ConfigLoader;
use hubwrite::logging::init_logging;
use hubwrite::logging::{LogConfig, LogLevel};

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
        Some(Command::Options) => load_config(&cli.global).map(|config| {
            for line in config.format_options() {
                println!("{line}");
            }
        }),
        Some(Command::Update(args)) => match load_config_and_token(&cli.global) {
            Ok((config, token)) => run_update(args, &config, &token).await,
            Err(e) => Err(e),
        },
        Some(Command::Create(args)) => match load_config_and_token(&cli.global) {
            Ok((config, token)) => run_create(args, &config, &token).await,
            Err(e) => Err(e),
        },
        Some(Command::Delete(args)) => match load_config_and_token(&cli.global) {
            Ok((config, token)) => run_delete(args, &config, &token).await,
            Err(e) => Err(e),
        },
        Some(Command::Batch(args)) => match load_config_and_token(&cli.global) {
            Ok((config, token)) => run_batch(args, &config, &token).await,
            Err(e) => Err(e),
        },
        Some(Command::Commit(args)) => match load_config_and_token(&cli.global) {
            Ok((config, token)) => run_commit(args, &config, &token).await,
            Err(e) => Err(e),
        },
        Some(Command::Compare(args)) => match load_config_and_token(&cli.global) {
            Ok((config, token)) => run_compare(args, &config, &token).await,
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
    let mut loader = ConfigLoader::new().add_toml_file_optional("hubwrite.toml");
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix("HUBWRITE")
}

fn load_config(global: &GlobalOptions) -> hubwrite::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(&key, value)?;
    }
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}

/// Mutating commands need both the config and the access token.
fn load_config_and_token(global: &GlobalOptions) -> hubwrite::error::Result<(Config, String)> {
    let config = load_config(global)?;
    let token = global
        .token
        .clone()
        .context("GitHub token required (use --token or GITHUB_TOKEN env)")?;
    Ok((config, token))
}
