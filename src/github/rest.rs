// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Direct REST path against the contents endpoint.
//!
//! ```text
//! update:  GET  /repos/{o}/{r}/contents/{p}?ref={b}   -> sha
//!          PUT  /repos/{o}/{r}/contents/{p}           {message, content, sha, branch}
//! create:  PUT  (no sha)
//! delete:  GET  -> sha
//!          DELETE                                     {message, sha, branch}
//!
//! One commit per file. The GET-then-write pair is the optimistic
//! concurrency check: a stale sha makes the remote reject the write.
//! ```

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::{CommitInfo, RateWindow, global_client};
use crate::error::{ApiError, HubResult, NetworkError};

/// Metadata subset of a contents GET response.
#[derive(Debug, Deserialize)]
struct ContentMeta {
    sha: String,
}

/// Commit object nested in contents PUT/DELETE responses.
#[derive(Debug, Deserialize)]
struct ContentCommit {
    sha: String,
    html_url: Option<String>,
}

/// Contents PUT/DELETE response.
#[derive(Debug, Deserialize)]
struct ContentResponse {
    commit: ContentCommit,
}

#[derive(Debug, Deserialize)]
struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
struct RateLimitResources {
    core: RateWindow,
}

/// GitHub contents API client built on raw `reqwest` calls.
pub struct RestClient {
    client: Client,
    api_base: String,
    token: String,
}

impl RestClient {
    /// Create a client against the default GitHub API base.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(crate::config::types::DEFAULT_API_BASE, token)
    }

    /// Create a client against a custom API base (tests point this at a
    /// mock server).
    #[must_use]
    pub fn with_api_base(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self {
            client: global_client().clone(),
            api_base,
            token: token.into(),
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> String {
        // encode per segment so the '/' separators survive
        let encoded = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/repos/{owner}/{repo}/contents/{encoded}", self.api_base)
    }

    /// Fetch the current blob SHA (revision marker) for a file.
    ///
    /// Called immediately before each single-file mutation; the marker is
    /// used once and never cached.
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
        let url = format!(
            "{}?ref={}",
            self.contents_url(owner, repo, path),
            urlencoding::encode(branch)
        );

        debug!(owner, repo, path, branch, "fetching file sha");

        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;
        let meta: ContentMeta = read_json(response, &url).await?;

        Ok(meta.sha)
    }

    /// Update an existing text file: one GET for the marker, one PUT with it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status,
    /// including the rejection of a stale revision marker.
    pub async fn update_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
        content: &str,
    ) -> HubResult<CommitInfo> {
        info!(owner, repo, path, "updating file via REST");

        let sha = self.file_sha(owner, repo, path, branch).await?;
        debug!(%sha, "current file sha");

        let message = format!("Update {path}");
        self.put_content(owner, repo, path, branch, &message, content.as_bytes(), Some(&sha))
            .await
    }

    /// Create a new file. No marker: the remote rejects the PUT if the
    /// path already exists.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    pub async fn create_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
        content: &str,
    ) -> HubResult<CommitInfo> {
        info!(owner, repo, path, "creating file via REST");

        let message = format!("Create {path}");
        self.put_content(owner, repo, path, branch, &message, content.as_bytes(), None)
            .await
    }

    /// Update a binary file. Same PUT as the text variant; the bytes are
    /// base64-encoded for the wire.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    pub async fn update_binary_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
        content: &[u8],
    ) -> HubResult<CommitInfo> {
        info!(owner, repo, path, len = content.len(), "updating binary file via REST");

        let sha = self.file_sha(owner, repo, path, branch).await?;
        let message = format!("Update {path}");
        self.put_content(owner, repo, path, branch, &message, content, Some(&sha))
            .await
    }

    /// Update several files sequentially, one commit per file.
    ///
    /// Aborts on the first failure; commits already made are not rolled
    /// back. Returns the commit for every file that succeeded.
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
        info!(owner, repo, count = files.len(), "updating files sequentially via REST");

        let mut commits = Vec::with_capacity(files.len());
        let total = files.len();

        for (i, (path, content)) in files.iter().enumerate() {
            let sha = self.file_sha(owner, repo, path, branch).await?;
            let message = format!("Update {path} (batch {}/{total})", i + 1);
            let commit = self
                .put_content(owner, repo, path, branch, &message, content.as_bytes(), Some(&sha))
                .await?;

            info!(path, commit = %commit.sha(), "updated file {}/{total}", i + 1);
            commits.push(commit);
        }

        Ok(commits)
    }

    /// Delete a file: one GET for the marker, one DELETE with it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status,
    /// including the rejection of a stale revision marker.
    pub async fn delete_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> HubResult<CommitInfo> {
        info!(owner, repo, path, "deleting file via REST");

        let sha = self.file_sha(owner, repo, path, branch).await?;
        let url = self.contents_url(owner, repo, path);
        let body = json!({
            "message": format!("Delete {path}"),
            "sha": sha,
            "branch": branch,
        });

        let response = self
            .request(Method::DELETE, &url)
            .json(&body)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;
        let parsed: ContentResponse = read_json(response, &url).await?;

        info!(commit = %parsed.commit.sha, "file deleted via REST");
        Ok(CommitInfo::new(parsed.commit.sha, parsed.commit.html_url))
    }

    /// Fetch the core rate-limit window and log it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    pub async fn rate_limit(&self) -> HubResult<RateWindow> {
        let url = format!("{}/rate_limit", self.api_base);

        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;
        let parsed: RateLimitResponse = read_json(response, &url).await?;

        let core = parsed.resources.core;
        info!(
            remaining = core.remaining,
            limit = core.limit,
            reset = core.reset,
            "rate limit"
        );
        Ok(core)
    }

    #[allow(clippy::too_many_arguments)]
    async fn put_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
        message: &str,
        content: &[u8],
        sha: Option<&str>,
    ) -> HubResult<CommitInfo> {
        let url = self.contents_url(owner, repo, path);
        let mut body = json!({
            "message": message,
            "content": BASE64.encode(content),
            "branch": branch,
        });
        if let Some(sha) = sha {
            body["sha"] = json!(sha);
        }

        let response = self
            .request(Method::PUT, &url)
            .json(&body)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;
        let parsed: ContentResponse = read_json(response, &url).await?;

        info!(commit = %parsed.commit.sha, "file written via REST");
        Ok(CommitInfo::new(parsed.commit.sha, parsed.commit.html_url))
    }
}

/// Check the status and deserialize the body, surfacing non-success
/// responses with their status code and body text.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    url: &str,
) -> HubResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(NetworkError::HttpError {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        }
        .into());
    }

    let body = response.text().await.map_err(NetworkError::Reqwest)?;
    serde_json::from_str(&body).map_err(|e| {
        ApiError::MissingField {
            field: format!("{e} (in response from {url})"),
        }
        .into()
    })
}
