// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   content: update, create, delete, batch
//!   commit:  atomic multi-file commit (GraphQL)
//!   compare: all three paths, timed, with the evaluation summary
//! ```
//!
//! Shared here: target resolution (flags -> config -> prompt), the
//! `PATH=LOCAL_FILE` argument format, and client construction against the
//! configured endpoints.

pub mod commit;
pub mod compare;
pub mod content;


use anyhow::Context;
use std::path::Path;

use crate::cli::ops::TargetArgs;
use crate::cli::prompt;
use crate::config::Config;
use crate::config::types::DEFAULT_API_BASE;
use crate::error::Result;
use crate::github::graphql::GraphQlClient;
use crate::github::octo::OctoClient;
use crate::github::rest::RestClient;

/// Fully resolved remote target. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo, self.branch)
    }
}

/// Resolve owner, repo and branch: CLI flag, then config, then an
/// interactive prompt.
///
/// # Errors
///
/// Returns an error if a prompt fails.
pub fn resolve_target(args: &TargetArgs, config: &Config) -> Result<Target> {
    let owner = match &args.owner {
        Some(owner) => owner.clone(),
        None if !config.github.owner.is_empty() => config.github.owner.clone(),
        None => prompt::prompt("Repository owner")?,
    };
    let repo = match &args.repo {
        Some(repo) => repo.clone(),
        None if !config.github.repo.is_empty() => config.github.repo.clone(),
        None => prompt::prompt("Repository name")?,
    };
    let branch = match &args.branch {
        Some(branch) => branch.clone(),
        None if !config.github.branch.is_empty() => config.github.branch.clone(),
        None => prompt::prompt_or("Branch", "main")?,
    };

    Ok(Target {
        owner,
        repo,
        branch,
    })
}

/// Resolve the repository file path, prompting when not given.
///
/// # Errors
///
/// Returns an error if the prompt fails.
pub fn resolve_path(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => Ok(path.to_string()),
        None => prompt::prompt("File path to update (e.g. README.md)"),
    }
}

/// Parse the `REPO_PATH=LOCAL_FILE` argument format.
///
/// # Examples
/// - "docs/a.md=./a.md" -> Ok(("docs/a.md", "./a.md"))
/// - "docs/a.md" -> Err(...)
///
/// # Errors
///
/// Returns an error if the separator is missing or either side is empty.
pub fn parse_file_spec(spec: &str) -> Result<(String, String)> {
    let (repo_path, local_file) = spec
        .split_once('=')
        .with_context(|| format!("expected PATH=LOCAL_FILE, got: {spec}"))?;
    if repo_path.is_empty() || local_file.is_empty() {
        anyhow::bail!("expected PATH=LOCAL_FILE, got: {spec}");
    }
    Ok((repo_path.to_string(), local_file.to_string()))
}

/// Read a local file as UTF-8 text.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_local(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read local file: {}", path.display()))
}

/// Read a local file as raw bytes.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_local_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read local file: {}", path.display()))
}

/// Client-library client against the configured API base.
pub(crate) fn octo_client(config: &Config, token: &str) -> Result<OctoClient> {
    let client = if config.github.api_base == DEFAULT_API_BASE {
        OctoClient::new(token)?
    } else {
        OctoClient::with_base_uri(&config.github.api_base, token)?
    };
    Ok(client)
}

/// REST client against the configured API base.
pub(crate) fn rest_client(config: &Config, token: &str) -> RestClient {
    RestClient::with_api_base(&config.github.api_base, token)
}

/// GraphQL client against the configured endpoint.
pub(crate) fn graphql_client(config: &Config, token: &str) -> GraphQlClient {
    GraphQlClient::with_endpoint(&config.github.graphql_endpoint, token)
}
