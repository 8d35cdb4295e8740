// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-file and sequential content commands.
//!
//! ```text
//! update [PATH]   one commit, client library or REST (--via)
//! create [PATH]   one commit, path must not exist yet
//! delete [PATH]   one commit
//! batch           N files -> N commits, aborts on first failure
//! ```

use anyhow::Context;
use tracing::info;

use crate::cli::ops::{Backend, BatchArgs, ContentArgs, DeleteArgs};
use crate::cli::prompt;
use crate::config::Config;
use crate::error::Result;
use crate::github::CommitInfo;

use super::{
    octo_client, parse_file_spec, read_local, read_local_bytes, resolve_path, resolve_target,
    rest_client,
};

/// Handler for `update`.
///
/// # Errors
///
/// Returns an error if argument resolution, local file reading, or the
/// remote call fails.
pub async fn run_update(args: &ContentArgs, config: &Config, token: &str) -> Result<()> {
    let target = resolve_target(&args.target, config)?;
    let path = resolve_path(args.path.as_deref())?;

    if args.binary {
        // clap enforces `--binary requires --file`
        let file = args
            .file
            .as_deref()
            .context("--binary requires --file")?;
        let content = read_local_bytes(file)?;

        if config.global.dry {
            println!(
                "[DRY-RUN] Would update binary {path} ({} bytes) on {target} via {}",
                content.len(),
                args.via
            );
            return Ok(());
        }

        let commit = match args.via {
            Backend::Client => {
                octo_client(config, token)?
                    .update_binary_file(&target.owner, &target.repo, &path, &target.branch, &content)
                    .await?
            }
            Backend::Rest => {
                rest_client(config, token)
                    .update_binary_file(&target.owner, &target.repo, &path, &target.branch, &content)
                    .await?
            }
        };
        println!("Committed: {commit}");
        return Ok(());
    }

    let content = resolve_content(args)?;

    if config.global.dry {
        println!("[DRY-RUN] Would update {path} on {target} via {}", args.via);
        return Ok(());
    }

    let commit = match args.via {
        Backend::Client => {
            octo_client(config, token)?
                .update_file(&target.owner, &target.repo, &path, &target.branch, &content)
                .await?
        }
        Backend::Rest => {
            rest_client(config, token)
                .update_file(&target.owner, &target.repo, &path, &target.branch, &content)
                .await?
        }
    };
    println!("Committed: {commit}");
    Ok(())
}

/// Handler for `create`.
///
/// # Errors
///
/// Returns an error if argument resolution, local file reading, or the
/// remote call fails, including when the path already exists.
pub async fn run_create(args: &ContentArgs, config: &Config, token: &str) -> Result<()> {
    let target = resolve_target(&args.target, config)?;
    let path = resolve_path(args.path.as_deref())?;
    let content = resolve_content(args)?;

    if config.global.dry {
        println!("[DRY-RUN] Would create {path} on {target} via {}", args.via);
        return Ok(());
    }

    let commit = match args.via {
        Backend::Client => {
            octo_client(config, token)?
                .create_file(&target.owner, &target.repo, &path, &target.branch, &content)
                .await?
        }
        Backend::Rest => {
            rest_client(config, token)
                .create_file(&target.owner, &target.repo, &path, &target.branch, &content)
                .await?
        }
    };
    println!("Committed: {commit}");
    Ok(())
}

/// Handler for `delete`.
///
/// # Errors
///
/// Returns an error if argument resolution or the remote call fails.
pub async fn run_delete(args: &DeleteArgs, config: &Config, token: &str) -> Result<()> {
    let target = resolve_target(&args.target, config)?;
    let path = resolve_path(args.path.as_deref())?;

    if config.global.dry {
        println!("[DRY-RUN] Would delete {path} on {target} via {}", args.via);
        return Ok(());
    }

    let commit = match args.via {
        Backend::Client => {
            octo_client(config, token)?
                .delete_file(&target.owner, &target.repo, &path, &target.branch)
                .await?
        }
        Backend::Rest => {
            rest_client(config, token)
                .delete_file(&target.owner, &target.repo, &path, &target.branch)
                .await?
        }
    };
    println!("Committed: {commit}");
    Ok(())
}

/// Handler for `batch`: one commit per file, in the given order.
///
/// # Errors
///
/// Returns an error if a spec is malformed, a local file cannot be read,
/// or any remote call fails. Commits already made stay in place.
pub async fn run_batch(args: &BatchArgs, config: &Config, token: &str) -> Result<()> {
    let target = resolve_target(&args.target, config)?;

    // read everything up front so a bad spec fails before the first commit
    let mut files = Vec::with_capacity(args.files.len());
    for spec in &args.files {
        let (repo_path, local_file) = parse_file_spec(spec)?;
        let content = read_local(local_file.as_ref())?;
        files.push((repo_path, content));
    }

    if config.global.dry {
        println!(
            "[DRY-RUN] Would update {} file(s) on {target} via {}, one commit each:",
            files.len(),
            args.via
        );
        for (path, _) in &files {
            println!("  {path}");
        }
        return Ok(());
    }

    info!(count = files.len(), "running batch update");

    let commits: Vec<CommitInfo> = match args.via {
        Backend::Client => {
            octo_client(config, token)?
                .update_many_files(&target.owner, &target.repo, &target.branch, &files)
                .await?
        }
        Backend::Rest => {
            rest_client(config, token)
                .update_many_files(&target.owner, &target.repo, &target.branch, &files)
                .await?
        }
    };

    for ((path, _), commit) in files.iter().zip(&commits) {
        println!("Committed {path}: {commit}");
    }
    Ok(())
}

/// New content: inline flag, local file, or an interactive prompt.
fn resolve_content(args: &ContentArgs) -> Result<String> {
    if let Some(content) = &args.content {
        Ok(content.clone())
    } else if let Some(file) = &args.file {
        read_local(file)
    } else {
        prompt::prompt("New content")
    }
}
