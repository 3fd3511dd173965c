//! Validated runtime configuration, built once from the CLI and passed down.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::ui::ThemeMode;

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub base_url: Url,
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    pub theme: ThemeMode,
    pub log_file: Option<PathBuf>,
}

impl ChatConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(&cli.base_url)?;
        let timeout = match cli.timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };
        let theme = if cli.light { ThemeMode::Light } else { ThemeMode::Dark };
        Ok(Self {
            base_url,
            timeout,
            theme,
            log_file: cli.log_file.clone(),
        })
    }

    /// `<base-url>/chat`, tolerant of trailing slashes on the base.
    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Host (and port when explicit) for the header.
    pub fn host_label(&self) -> String {
        let host = self.base_url.host_str().unwrap_or("?");
        match self.base_url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}
