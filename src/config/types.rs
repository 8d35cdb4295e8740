// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for hubwrite.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, GitHubConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Default REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default GraphQL endpoint.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Print what would be committed without issuing mutating calls.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. Empty disables file logging.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// Remote repository settings shared by all three API paths.
///
/// `owner` and `repo` left empty mean "prompt for them"; the token is never
/// read from config files, only from `--token` / `GITHUB_TOKEN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitHubConfig {
    /// Repository owner (user or organization).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub owner: String,
    /// Repository name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub repo: String,
    /// Branch to commit to.
    pub branch: String,
    /// REST API base URL.
    pub api_base: String,
    /// GraphQL endpoint URL.
    pub graphql_endpoint: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            branch: "main".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
        }
    }
}
