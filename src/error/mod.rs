// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              HubError (~24 bytes)
//!                     |
//!        +------+-----+------+------+
//!        |      |     |      |      |
//!        v      v     v      v      v
//!       Net    Api   Cfg    Io   Other
//!       Box    Box   Box    Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Network  Reqwest, HttpError
//!   Api      Octocrab, GraphQl, MissingField
//!   Config   MissingKey, InvalidValue
//!
//! All variants boxed => HubError stays small on the stack.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`HubError`].
pub type HubResult<T> = std::result::Result<T, HubError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum HubError {
    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// GitHub API reported a failure.
    #[error("api error: {0}")]
    Api(#[from] Box<ApiError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for HubError {
                fn from(err: $error) -> Self {
                    HubError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ApiError => Api,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response. Carries the raw response body so API failures
    /// surface verbatim.
    #[error("http error {status} from {url}: {body}")]
    HttpError {
        status: u16,
        url: String,
        body: String,
    },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

// --- API Errors ---

/// GitHub API errors that are not plain transport failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error from the octocrab client library.
    #[error("octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// The GraphQL endpoint returned an error list.
    /// Messages are surfaced verbatim, joined with "; ".
    #[error("graphql errors: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    /// A response was missing a field the operation needs.
    #[error("response missing expected field: {field}")]
    MissingField { field: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
