// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! High-level client path built on `octocrab`.
//!
//! ```text
//! OctoClient::new(token)
//!   update_file        get_content -> sha, update_file(sha)
//!   create_file        create_file (no sha)
//!   update_binary_file bytes in, octocrab base64s on the wire
//!   update_many_files  sequential, one commit per file
//!   delete_file        get_content -> sha, delete_file(sha)
//!
//! Same read-then-write marker check as the REST path, but the client
//! library owns the request construction.
//! ```

use octocrab::Octocrab;
use tracing::{debug, info};

use super::{CommitInfo, RateWindow};
use crate::error::{ApiError, HubResult};

/// GitHub contents operations through the `octocrab` client library.
pub struct OctoClient {
    octo: Octocrab,
}

impl OctoClient {
    /// Create a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(token: impl Into<String>) -> HubResult<Self> {
        let octo = Octocrab::builder()
            .personal_token(token.into())
            .build()
            .map_err(ApiError::Octocrab)?;
        Ok(Self { octo })
    }

    /// Create a client against a custom API base (tests point this at a
    /// mock server).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URI is invalid or the client cannot be
    /// constructed.
    pub fn with_base_uri(base_uri: &str, token: impl Into<String>) -> HubResult<Self> {
        let octo = Octocrab::builder()
            .base_uri(base_uri)
            .map_err(ApiError::Octocrab)?
            .personal_token(token.into())
            .build()
            .map_err(ApiError::Octocrab)?;
        Ok(Self { octo })
    }

    /// Fetch the current blob SHA (revision marker) for a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the file does not exist on
    /// the branch.
    pub async fn file_sha(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> HubResult<String> {
        debug!(owner, repo, path, branch, "fetching file sha");

        let content = self
            .octo
            .repos(owner, repo)
            .get_content()
            .path(path)
            .r#ref(branch)
            .send()
            .await
            .map_err(ApiError::Octocrab)?;

        let item = content
            .items
            .into_iter()
            .next()
            .ok_or_else(|| missing(&format!("contents of {path}")))?;
        Ok(item.sha)
    }

    /// Update an existing text file, tagged with its freshly fetched
    /// revision marker.
    ///
    /// # Errors
    ///
    /// Returns an error on any client failure, including the rejection of
    /// a stale revision marker.
    pub async fn update_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
        content: &str,
    ) -> HubResult<CommitInfo> {
        info!(owner, repo, path, "updating file via client library");

        let sha = self.file_sha(owner, repo, path, branch).await?;
        debug!(%sha, "current file sha");

        let message = format!("Update {path}");
        let response = self
            .octo
            .repos(owner, repo)
            .update_file(path, &message, content, &sha)
            .branch(branch)
            .send()
            .await
            .map_err(ApiError::Octocrab)?;

        let commit = commit_info(response.commit)?;
        info!(commit = %commit.sha(), "file updated via client library");
        Ok(commit)
    }

    /// Create a new file. No marker: the file must not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error on any client failure.
    pub async fn create_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
        content: &str,
    ) -> HubResult<CommitInfo> {
        info!(owner, repo, path, "creating file via client library");

        let message = format!("Create {path}");
        let response = self
            .octo
            .repos(owner, repo)
            .create_file(path, &message, content)
            .branch(branch)
            .send()
            .await
            .map_err(ApiError::Octocrab)?;

        let commit = commit_info(response.commit)?;
        info!(commit = %commit.sha(), "file created via client library");
        Ok(commit)
    }

    /// Update a binary file. Bytes go in as-is; the client library handles
    /// base64 on the wire.
    ///
    /// # Errors
    ///
    /// Returns an error on any client failure.
    pub async fn update_binary_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
        content: &[u8],
    ) -> HubResult<CommitInfo> {
        info!(owner, repo, path, len = content.len(), "updating binary file via client library");

        let sha = self.file_sha(owner, repo, path, branch).await?;
        let message = format!("Update {path}");
        let response = self
            .octo
            .repos(owner, repo)
            .update_file(path, &message, content, &sha)
            .branch(branch)
            .send()
            .await
            .map_err(ApiError::Octocrab)?;

        commit_info(response.commit)
    }

    /// Update several files sequentially, one commit per file.
    ///
    /// Aborts on the first failure; commits already made are not rolled
    /// back.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed file.
    pub async fn update_many_files(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        files: &[(String, String)],
    ) -> HubResult<Vec<CommitInfo>> {
        info!(owner, repo, count = files.len(), "updating files sequentially via client library");

        let mut commits = Vec::with_capacity(files.len());
        let total = files.len();

        for (i, (path, content)) in files.iter().enumerate() {
            let sha = self.file_sha(owner, repo, path, branch).await?;
            let message = format!("Update {path} (batch {}/{total})", i + 1);
            let response = self
                .octo
                .repos(owner, repo)
                .update_file(path, &message, content, &sha)
                .branch(branch)
                .send()
                .await
                .map_err(ApiError::Octocrab)?;

            let commit = commit_info(response.commit)?;
            info!(path, commit = %commit.sha(), "updated file {}/{total}", i + 1);
            commits.push(commit);
        }

        Ok(commits)
    }

    /// Delete a file, tagged with its freshly fetched revision marker.
    ///
    /// # Errors
    ///
    /// Returns an error on any client failure, including the rejection of
    /// a stale revision marker.
    pub async fn delete_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> HubResult<CommitInfo> {
        info!(owner, repo, path, "deleting file via client library");

        let sha = self.file_sha(owner, repo, path, branch).await?;
        let message = format!("Delete {path}");
        let response = self
            .octo
            .repos(owner, repo)
            .delete_file(path, &message, &sha)
            .branch(branch)
            .send()
            .await
            .map_err(ApiError::Octocrab)?;

        let commit = commit_info(response.commit)?;
        info!(commit = %commit.sha(), "file deleted via client library");
        Ok(commit)
    }

    /// Fetch the core rate-limit window and log it.
    ///
    /// # Errors
    ///
    /// Returns an error on any client failure.
    pub async fn rate_limit(&self) -> HubResult<RateWindow> {
        let limits = self
            .octo
            .ratelimit()
            .get()
            .await
            .map_err(ApiError::Octocrab)?;

        let core = limits.resources.core;
        let window = RateWindow {
            limit: core.limit as u64,
            remaining: core.remaining as u64,
            reset: core.reset as u64,
        };
        info!(remaining = window.remaining, limit = window.limit, "rate limit");
        Ok(window)
    }
}

/// Pull the new commit id and URL out of a contents-API commit object.
fn commit_info(commit: octocrab::models::repos::Commit) -> HubResult<CommitInfo> {
    let sha = commit.sha.ok_or_else(|| missing("commit.sha"))?;
    let url = commit.html_url.map(|u| u.to_string());
    Ok(CommitInfo::new(sha, url))
}

fn missing(field: &str) -> crate::error::HubError {
    ApiError::MissingField {
        field: field.to_string(),
    }
    .into()
}
