//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

use crate::domain::DEFAULT_PAGE_SIZE;

/// Backend address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:9192";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "lakeside-client", version, about = "Lakeside room administration client")]
pub struct Args {
    /// Base URL of the hotel API
    #[arg(long, env = "LAKESIDE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token attached to every request
    #[arg(long, env = "LAKESIDE_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Rooms shown per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Page size must be at least 1")]
    PageSizeZero,

    #[error("Timeout must be at least 1 second")]
    TimeoutZero,
}

/// Validated client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    pub token: Option<String>,
    pub page_size: usize,
    pub timeout: Duration,
}

impl TryFrom<Args> for ClientConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let url = Url::parse(&args.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: args.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: args.base_url,
                reason: "scheme must be http or https".to_string(),
            });
        }
        if args.page_size == 0 {
            return Err(ConfigError::PageSizeZero);
        }
        if args.timeout_secs == 0 {
            return Err(ConfigError::TimeoutZero);
        }

        let token = args.token.filter(|t| !t.trim().is_empty());
        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
            token,
            page_size: args.page_size,
            timeout: Duration::from_secs(args.timeout_secs),
        })
    }
}
