// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for hubwrite using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! hubwrite [global options] <command>
//! update [PATH]      single-file update (client library or REST)
//! create [PATH]      create a new file
//! delete [PATH]      delete a file
//! batch              sequential per-file commits
//! commit             atomic multi-file commit (GraphQL)
//! compare            run all three paths and print the evaluation summary
//! options            list resolved configuration
//! version            show the version
//! ```
//!
//! Owner, repository, branch and path fall back to `hubwrite.toml` and
//! then to interactive prompts when not given.

pub mod global;
pub mod ops;
pub mod prompt;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::ops::{BatchArgs, CommitArgs, CompareArgs, ContentArgs, DeleteArgs};
use clap::{Parser, Subcommand};

/// hubwrite - commit files to GitHub without a local checkout
///
/// A comparative spike: the same content operations through a high-level
/// client library, direct REST calls, and an atomic GraphQL mutation.
#[derive(Debug, Parser)]
#[command(
    name = "hubwrite",
    author,
    version,
    about = "Commit files to a GitHub repository without a local checkout",
    long_about = "hubwrite updates, creates and deletes files in a remote\n\
                  GitHub repository without cloning it, through three\n\
                  interchangeable code paths: the octocrab client library,\n\
                  direct REST calls against the contents endpoint, and a\n\
                  single atomic GraphQL mutation for multi-file commits.\n\n\
                  `hubwrite compare` runs all three in sequence and prints\n\
                  a recommendation summary.",
    after_help = "CONFIGURATION:\n\n\
                  hubwrite looks for `hubwrite.toml` in the current directory.\n\
                  Additional files can be layered with --config; later files\n\
                  override earlier ones, HUBWRITE_* environment variables and\n\
                  CLI flags override both. The access token is only ever read\n\
                  from --token or the GITHUB_TOKEN environment variable.\n\
                  Owner, repository, branch and path are prompted for when\n\
                  not given by flags or configuration."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their resolved values.
    Options,

    /// Updates a single file.
    Update(ContentArgs),

    /// Creates a new file.
    Create(ContentArgs),

    /// Deletes a file.
    Delete(DeleteArgs),

    /// Updates several files, one commit per file.
    Batch(BatchArgs),

    /// Applies several file changes as one atomic commit.
    Commit(CommitArgs),

    /// Runs all three API paths and prints the evaluation summary.
    Compare(CompareArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
