//! Configuration management.
//!
//! # Configuration File Format
//!
//! ```toml
//! base_url = "http://export.arxiv.org/api/"
//! default_max_results = 100
//! user_agent = "my-tool/1.0"
//! timeout_secs = 30
//! connect_timeout_secs = 10
//! ```
//!
//! Every key can also be set through an `ARXIV_`-prefixed environment
//! variable, e.g. `ARXIV_DEFAULT_MAX_RESULTS=1000`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ArxivError;

/// Default base URL of the arXiv export API
pub const DEFAULT_BASE_URL: &str = "http://export.arxiv.org/api/";

/// Page size used when a request leaves `max_results` unset or non-positive
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL that API routes are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Substituted for non-positive `max_results`
    #[serde(default = "default_max_results")]
    pub default_max_results: u32,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Overall request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_max_results: default_max_results(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl ClientConfig {
    /// Configuration from `ARXIV_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, ArxivError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("ARXIV"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Point the client at a different API root
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the page size substituted for non-positive `max_results`
    pub fn default_max_results(mut self, max: u32) -> Self {
        self.default_max_results = max;
        self
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

/// Load configuration from a file, with `ARXIV_*` environment overrides
pub fn load_config(path: &Path) -> Result<ClientConfig, ArxivError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("ARXIV"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
