//! Error types: configuration (startup) and transport (per request).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning CLI/env input into a usable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unsupported scheme {scheme:?} in base url (expected http or https)")]
    UnsupportedScheme { scheme: String },

    #[error("request timeout must be at least one second")]
    ZeroTimeout,

    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A failed chat call. The `Display` text is what the user sees after "Error: ".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),

    #[error("timed out waiting for a reply")]
    Timeout,

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("malformed response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status { status: status.as_u16() }
        } else {
            TransportError::Network(err.to_string())
        }
    }
}
