// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub API clients: three independent paths to the same commits.
//!
//! ```text
//!            FileChange / CommitInfo
//!                      |
//!     +----------------+----------------+
//!     v                v                v
//!   octo             rest            graphql
//!   octocrab         reqwest         reqwest
//!   contents API     contents API    createCommitOnBranch
//!   1 commit/file    1 commit/file   N files, 1 commit
//!
//! Every value is request-scoped: a blob SHA is fetched immediately
//! before the write that uses it, and never cached.
//! ```

pub mod graphql;
pub mod octo;
pub mod rest;


use reqwest::Client;
use std::sync::OnceLock;

/// A single file change for commit operations.
///
/// A change is either a write (path + new content bytes) or a deletion
/// (path only). Content is held as raw bytes; each wire format decides how
/// to encode it (base64 for REST and GraphQL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    path: String,
    content: Option<Vec<u8>>,
}

impl FileChange {
    /// A change that writes `content` to `path` (create or update).
    pub fn write(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
        }
    }

    /// A change that deletes the file at `path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: None,
        }
    }

    /// The repository path this change applies to.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The new content, if this is a write.
    #[must_use]
    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    /// Whether this change removes the file.
    #[must_use]
    pub const fn is_delete(&self) -> bool {
        self.content.is_none()
    }
}

/// The result of a commit-producing operation: the new commit identifier
/// and, when the API provides one, its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    sha: String,
    url: Option<String>,
}

impl CommitInfo {
    #[must_use]
    pub const fn new(sha: String, url: Option<String>) -> Self {
        Self { sha, url }
    }

    /// The new commit SHA (OID on the GraphQL path).
    #[must_use]
    pub fn sha(&self) -> &str {
        &self.sha
    }

    /// The commit URL, if the response carried one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl std::fmt::Display for CommitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.url {
            Some(url) => write!(f, "{} ({url})", self.sha),
            None => write!(f, "{}", self.sha),
        }
    }
}

/// One rate-limit window, as reported by the REST `/rate_limit` endpoint
/// or the client library.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct RateWindow {
    pub limit: u64,
    pub remaining: u64,
    /// Unix timestamp at which the window resets.
    pub reset: u64,
}

/// User agent sent on every request.
#[must_use]
pub fn user_agent() -> String {
    format!("hubwrite/{}", env!("CARGO_PKG_VERSION"))
}

/// Global HTTP client - initialized once, reused by the REST and GraphQL
/// paths. Falls back to a basic client if custom configuration fails.
pub(crate) fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(user_agent())
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
