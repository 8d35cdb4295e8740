// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! GraphQL path: atomic multi-file commits.
//!
//! ```text
//! branch_head:   query  repository{id ref(refs/heads/b){target{oid}}}
//! atomic commit: mutation createCommitOnBranch(input: {
//!                  branch{repositoryNameWithOwner branchName}
//!                  message{headline}
//!                  fileChanges{additions[] deletions[]}
//!                  expectedHeadOid          <- from the preceding query
//!                })
//!
//! All files land in ONE commit. A moved branch head rejects the whole
//! mutation; none of the listed changes apply.
//! ```

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::{CommitInfo, FileChange, global_client};
use crate::error::{ApiError, HubResult, NetworkError};

const HEAD_QUERY: &str = "\
query($owner: String!, $repo: String!, $branch: String!) {
  repository(owner: $owner, name: $repo) {
    id
    ref(qualifiedName: $branch) {
      target {
        ... on Commit {
          oid
        }
      }
    }
  }
}";

const COMMIT_MUTATION: &str = "\
mutation($input: CreateCommitOnBranchInput!) {
  createCommitOnBranch(input: $input) {
    commit {
      oid
      url
    }
  }
}";

/// Repository id and branch head OID, read by one query and consumed by
/// the mutation that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchHead {
    pub repository_id: String,
    pub head_oid: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct HeadData {
    repository: Option<HeadRepository>,
}

#[derive(Debug, Deserialize)]
struct HeadRepository {
    id: String,
    #[serde(rename = "ref")]
    branch_ref: Option<HeadRef>,
}

#[derive(Debug, Deserialize)]
struct HeadRef {
    target: Option<HeadTarget>,
}

#[derive(Debug, Deserialize)]
struct HeadTarget {
    // absent when the ref points at a non-commit object
    oid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommitData {
    #[serde(rename = "createCommitOnBranch")]
    create_commit_on_branch: Option<CreateCommitPayload>,
}

#[derive(Debug, Deserialize)]
struct CreateCommitPayload {
    commit: Option<MutationCommit>,
}

#[derive(Debug, Deserialize)]
struct MutationCommit {
    oid: String,
    url: Option<String>,
}

/// GitHub GraphQL client for atomic multi-file commits.
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl GraphQlClient {
    /// Create a client against the default GitHub GraphQL endpoint.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoint(crate::config::types::DEFAULT_GRAPHQL_ENDPOINT, token)
    }

    /// Create a client against a custom endpoint (tests point this at a
    /// mock server).
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: global_client().clone(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Fetch the repository id and current branch head OID.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a GraphQL error list, or when
    /// the repository or branch does not exist.
    pub async fn branch_head(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> HubResult<BranchHead> {
        debug!(owner, repo, branch, "querying branch head");

        let variables = json!({
            "owner": owner,
            "repo": repo,
            "branch": format!("refs/heads/{branch}"),
        });
        let data: HeadData = self.post(HEAD_QUERY, &variables).await?;

        let repository = data.repository.ok_or_else(|| missing("repository"))?;
        let head_oid = repository
            .branch_ref
            .and_then(|r| r.target)
            .and_then(|t| t.oid)
            .ok_or_else(|| missing(&format!("ref refs/heads/{branch}")))?;

        debug!(repository_id = %repository.id, %head_oid, "branch head resolved");

        Ok(BranchHead {
            repository_id: repository.id,
            head_oid,
        })
    }

    /// Apply a set of file changes as one atomic commit.
    ///
    /// The branch head is read immediately before the mutation and passed
    /// as `expectedHeadOid`; if the head moves in between, the remote
    /// rejects the whole mutation and none of the changes apply.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// GraphQL error list (surfaced verbatim).
    pub async fn create_commit_on_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        message: &str,
        changes: &[FileChange],
    ) -> HubResult<CommitInfo> {
        info!(owner, repo, branch, count = changes.len(), "creating atomic commit");

        let head = self.branch_head(owner, repo, branch).await?;

        let input = json!({
            "branch": {
                "repositoryNameWithOwner": format!("{owner}/{repo}"),
                "branchName": branch,
            },
            "message": { "headline": message },
            "fileChanges": build_file_changes(changes),
            "expectedHeadOid": head.head_oid,
        });
        let variables = json!({ "input": input });

        let data: CommitData = self.post(COMMIT_MUTATION, &variables).await?;
        let commit = data
            .create_commit_on_branch
            .and_then(|p| p.commit)
            .ok_or_else(|| missing("createCommitOnBranch.commit"))?;

        info!(oid = %commit.oid, "atomic commit created");
        Ok(CommitInfo::new(commit.oid, commit.url))
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: &Value,
    ) -> HubResult<T> {
        let body = json!({ "query": query, "variables": variables });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&body)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: self.endpoint.clone(),
                body,
            }
            .into());
        }

        let parsed: GraphQlResponse<T> = response.json().await.map_err(NetworkError::Reqwest)?;

        if let Some(errors) = parsed.errors
            && !errors.is_empty()
        {
            return Err(ApiError::GraphQl {
                messages: errors.into_iter().map(|e| e.message).collect(),
            }
            .into());
        }

        parsed.data.ok_or_else(|| missing("data").into())
    }
}

/// Build the `fileChanges` input object. Writes become additions with
/// base64 contents, deletions carry the path only. Empty lists are
/// omitted from the payload.
pub(crate) fn build_file_changes(changes: &[FileChange]) -> Value {
    let mut additions = Vec::new();
    let mut deletions = Vec::new();

    for change in changes {
        match change.content() {
            Some(content) => additions.push(json!({
                "path": change.path(),
                "contents": BASE64.encode(content),
            })),
            None => deletions.push(json!({ "path": change.path() })),
        }
    }

    let mut file_changes = serde_json::Map::new();
    if !additions.is_empty() {
        file_changes.insert("additions".to_string(), Value::Array(additions));
    }
    if !deletions.is_empty() {
        file_changes.insert("deletions".to_string(), Value::Array(deletions));
    }
    Value::Object(file_changes)
}

fn missing(field: &str) -> ApiError {
    ApiError::MissingField {
        field: field.to_string(),
    }
}
