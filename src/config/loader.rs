//! Configuration structures and loading logic.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::fields::Exclude;
use crate::api::{TimelineOptions, API_HOST, DEFAULT_MAX_RESULTS};
use crate::error::{Error, Result};
use crate::media::DEFAULT_LIKES_THRESHOLD;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub harvest: HarvestConfig,

    #[serde(default)]
    pub downloader: DownloaderConfig,
}

/// X API access configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// App bearer token.
    #[serde(default)]
    pub bearer_token: String,

    /// API host.
    #[serde(default = "default_api_host")]
    pub host: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bearer_token: String::new(),
            host: default_api_host(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Timeline traversal and filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Minimum likes for a post's media to be harvested.
    #[serde(default = "default_likes_threshold")]
    pub likes_threshold: u64,

    /// Follow continuation tokens past the first page.
    #[serde(default = "default_true")]
    pub dig: bool,

    /// Page size (5-100).
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Timeline entries excluded server-side.
    #[serde(default = "default_exclude")]
    pub exclude: HashSet<Exclude>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            likes_threshold: default_likes_threshold(),
            dig: true,
            max_results: default_max_results(),
            exclude: default_exclude(),
        }
    }
}

/// Download agent (aria2 JSON-RPC) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloaderConfig {
    /// WebSocket JSON-RPC endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// RPC secret, sent as `token:<secret>`.
    #[serde(default)]
    pub secret: String,

    /// Absolute base directory on the download agent's host.
    #[serde(default = "default_base_directory")]
    pub base_directory: PathBuf,

    /// Whether the agent may overwrite existing files.
    #[serde(default = "default_true")]
    pub allow_overwrite: bool,

    /// Suffix appended to every resolved URL to request original quality.
    #[serde(default = "default_url_suffix")]
    pub url_suffix: String,

    /// Fixed JSON-RPC request id. A fresh UUID is used per request when unset.
    #[serde(default)]
    pub request_id: Option<String>,

    /// Maximum enqueue requests in flight.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Per-request timeout covering connect, send and reply.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            secret: String::new(),
            base_directory: default_base_directory(),
            allow_overwrite: true,
            url_suffix: default_url_suffix(),
            request_id: None,
            concurrency: default_concurrency(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_api_host() -> String {
    API_HOST.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_likes_threshold() -> u64 {
    DEFAULT_LIKES_THRESHOLD
}

fn default_true() -> bool {
    true
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_exclude() -> HashSet<Exclude> {
    [Exclude::Retweets, Exclude::Replies].into_iter().collect()
}

fn default_endpoint() -> String {
    "ws://localhost:6800/jsonrpc".to_string()
}

fn default_base_directory() -> PathBuf {
    PathBuf::from("/downloads")
}

fn default_url_suffix() -> String {
    ":orig".to_string()
}

fn default_concurrency() -> usize {
    1
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Timeline request options derived from the harvest section.
    pub fn timeline_options(&self) -> TimelineOptions {
        // Keep a stable order so requests are reproducible.
        let mut excludes: Vec<Exclude> = self.harvest.exclude.iter().copied().collect();
        excludes.sort_by_key(|e| e.as_str());

        TimelineOptions {
            max_results: self.harvest.max_results,
            excludes,
            ..Default::default()
        }
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }
}

/// Locate the configuration file when none was given explicitly.
///
/// Prefers `config.toml` in the working directory, then the platform
/// configuration directory.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }

    ProjectDirs::from("", "", "x-harvester")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
        .unwrap_or(local)
}
