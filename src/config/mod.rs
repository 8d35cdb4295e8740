// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for hubwrite.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. hubwrite.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. HUBWRITE_* env vars
//! 5. CLI overrides (--dry, --log-level, --file-log-level, --log-file)
//!
//! --owner/--repo/--branch are not config overrides; each command
//! resolves them against the loaded config and the prompts.
//! ```
//!
//! # Environment Variable Mapping
//!
//! Section and key are separated by a double underscore, so multi-word
//! keys stay intact:
//!
//! ```text
//! HUBWRITE_GITHUB__OWNER=me          → github.owner = "me"
//! HUBWRITE_GITHUB__API_BASE=http://… → github.api_base
//! HUBWRITE_GLOBAL__DRY=true          → global.dry = true
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GitHubConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Remote repository settings.
    pub github: GitHubConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hubwrite::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("hubwrite.toml")
    ///     .with_env_prefix("HUBWRITE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_github_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_github_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("github.owner".into(), self.github.owner.clone());
        options.insert("github.repo".into(), self.github.repo.clone());
        options.insert("github.branch".into(), self.github.branch.clone());
        options.insert("github.api_base".into(), self.github.api_base.clone());
        options.insert(
            "github.graphql_endpoint".into(),
            self.github.graphql_endpoint.clone(),
        );
    }
}
