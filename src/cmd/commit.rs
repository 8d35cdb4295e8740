// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Atomic multi-file commit via the GraphQL mutation.
//!
//! ```text
//! --add PATH=LOCAL_FILE ... --rm PATH ... -m "headline"
//!       |
//!       v
//! createCommitOnBranch: all changes in ONE commit, or none
//! ```

use tracing::info;

use crate::cli::ops::CommitArgs;
use crate::cli::prompt;
use crate::config::Config;
use crate::error::Result;
use crate::github::FileChange;

use super::{graphql_client, parse_file_spec, read_local_bytes, resolve_target};

/// Handler for `commit`.
///
/// # Errors
///
/// Returns an error if no changes are given, a spec is malformed, a local
/// file cannot be read, or the mutation fails. A rejected mutation applies
/// none of the changes.
pub async fn run_commit(args: &CommitArgs, config: &Config, token: &str) -> Result<()> {
    let target = resolve_target(&args.target, config)?;

    let mut changes = Vec::with_capacity(args.additions.len() + args.deletions.len());
    for spec in &args.additions {
        let (repo_path, local_file) = parse_file_spec(spec)?;
        let content = read_local_bytes(local_file.as_ref())?;
        changes.push(FileChange::write(repo_path, content));
    }
    for path in &args.deletions {
        changes.push(FileChange::delete(path.clone()));
    }

    anyhow::ensure!(
        !changes.is_empty(),
        "nothing to commit (use --add and/or --rm)"
    );

    let message = match &args.message {
        Some(message) => message.clone(),
        None => prompt::prompt("Commit message")?,
    };

    if config.global.dry {
        println!(
            "[DRY-RUN] Would commit {} change(s) atomically on {target}:",
            changes.len()
        );
        for change in &changes {
            if change.is_delete() {
                println!("  delete {}", change.path());
            } else {
                println!("  write  {}", change.path());
            }
        }
        return Ok(());
    }

    info!(count = changes.len(), "committing atomically via GraphQL");

    let commit = graphql_client(config, token)
        .create_commit_on_branch(&target.owner, &target.repo, &target.branch, &message, &changes)
        .await?;

    println!("Committed: {commit}");
    Ok(())
}
