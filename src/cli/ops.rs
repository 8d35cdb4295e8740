// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the content operations.
//!
//! ```text
//! hubwrite update README.md --content "# hi" --via rest
//! hubwrite create docs/new.md --file ./local.md
//! hubwrite update logo.png --file ./logo.png --binary
//! hubwrite delete obsolete.txt --via client
//! hubwrite batch --file a.txt=./a.txt --file b.txt=./b.txt
//! hubwrite commit --add a.txt=./a.txt --rm old.txt -m "swap files"
//! hubwrite compare README.md
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Which single-file API path to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// High-level client library (octocrab).
    #[default]
    Client,
    /// Direct REST calls against the contents endpoint.
    Rest,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Rest => write!(f, "rest"),
        }
    }
}

/// Remote target: owner, repository, branch. Any value not given here
/// falls back to config, then to an interactive prompt.
#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    /// Repository owner (user or organization).
    #[arg(long, value_name = "OWNER")]
    pub owner: Option<String>,

    /// Repository name.
    #[arg(long, value_name = "REPO")]
    pub repo: Option<String>,

    /// Branch to commit to.
    #[arg(short = 'b', long, value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Arguments for `update` and `create`.
#[derive(Debug, Clone, Args)]
pub struct ContentArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// File path inside the repository. Prompted for when omitted.
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// New content given inline.
    #[arg(long, value_name = "TEXT", conflicts_with = "file")]
    pub content: Option<String>,

    /// Read the new content from a local file.
    #[arg(long, value_name = "LOCAL_FILE")]
    pub file: Option<PathBuf>,

    /// Treat the content as binary (requires --file; update only).
    #[arg(long, requires = "file")]
    pub binary: bool,

    /// API path to use.
    #[arg(long, value_enum, default_value_t = Backend::Client)]
    pub via: Backend,
}

/// Arguments for `delete`.
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// File path inside the repository. Prompted for when omitted.
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// API path to use.
    #[arg(long, value_enum, default_value_t = Backend::Client)]
    pub via: Backend,
}

/// Arguments for `batch`: several files, one commit per file.
#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// File to update, as REPO_PATH=LOCAL_FILE. Can be repeated.
    #[arg(long = "file", value_name = "PATH=LOCAL_FILE", action = clap::ArgAction::Append, required = true)]
    pub files: Vec<String>,

    /// API path to use.
    #[arg(long, value_enum, default_value_t = Backend::Client)]
    pub via: Backend,
}

/// Arguments for `commit`: one atomic multi-file commit via GraphQL.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// File to add or update, as REPO_PATH=LOCAL_FILE. Can be repeated.
    #[arg(long = "add", value_name = "PATH=LOCAL_FILE", action = clap::ArgAction::Append)]
    pub additions: Vec<String>,

    /// File to delete, as REPO_PATH. Can be repeated.
    #[arg(long = "rm", value_name = "PATH", action = clap::ArgAction::Append)]
    pub deletions: Vec<String>,

    /// Commit message headline.
    #[arg(short = 'm', long, value_name = "MESSAGE")]
    pub message: Option<String>,
}

/// Arguments for `compare`.
#[derive(Debug, Clone, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// File path the single-file paths will update. Prompted for when
    /// omitted.
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}
