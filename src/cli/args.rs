//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Harvest popular media from an X timeline into aria2.
#[derive(Parser, Debug)]
#[command(
    name = "x-harvester",
    version,
    about = "Queue an X account's popular media for download in aria2",
    long_about = "Walks an account's timeline, keeps media from posts with enough likes, \
                  picks the best video rendition and enqueues every item with aria2 \
                  over its WebSocket JSON-RPC interface."
)]
pub struct Args {
    /// Account handle (a comma-separated list is accepted; the first match is used).
    pub handle: String,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// API bearer token.
    #[arg(short, long, env = "X_BEARER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// aria2 RPC secret.
    #[arg(short, long, env = "ARIA2_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// aria2 WebSocket JSON-RPC endpoint.
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Base download directory on the aria2 host.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Minimum likes for a post's media to be queued.
    #[arg(short, long)]
    pub likes: Option<u64>,

    /// Only read the first timeline page.
    #[arg(long)]
    pub no_dig: bool,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(token) = &self.token {
            config.api.bearer_token = token.clone();
        }

        if let Some(secret) = &self.secret {
            config.downloader.secret = secret.clone();
        }

        if let Some(endpoint) = &self.endpoint {
            config.downloader.endpoint = endpoint.clone();
        }

        if let Some(dir) = &self.download_directory {
            config.downloader.base_directory = dir.clone();
        }

        if let Some(likes) = self.likes {
            config.harvest.likes_threshold = likes;
        }

        // Boolean flags only override when set.
        if self.no_dig {
            config.harvest.dig = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_handle() {
        let args = Args::try_parse_from(["x-harvester", "alice"]).unwrap();
        assert_eq!(args.handle, "alice");
        assert!(!args.no_dig);
    }

    #[test]
    fn test_handle_required() {
        assert!(Args::try_parse_from(["x-harvester"]).is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let args = Args::try_parse_from([
            "x-harvester",
            "alice",
            "--likes",
            "500",
            "--no-dig",
            "-e",
            "ws://10.0.0.2:6800/jsonrpc",
            "-d",
            "/data",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.harvest.likes_threshold, 500);
        assert!(!config.harvest.dig);
        assert_eq!(config.downloader.endpoint, "ws://10.0.0.2:6800/jsonrpc");
        assert_eq!(config.downloader.base_directory, PathBuf::from("/data"));
    }

    #[test]
    fn test_merge_keeps_file_values() {
        let args = Args::try_parse_from(["x-harvester", "alice"]).unwrap();
        let mut config = Config::default();
        config.harvest.likes_threshold = 42;
        config.downloader.secret = "from-file".into();

        // Env vars may be set on the host running the tests.
        if args.secret.is_none() {
            args.merge_into_config(&mut config);
            assert_eq!(config.downloader.secret, "from-file");
        }
        assert_eq!(config.harvest.likes_threshold, 42);
        assert!(config.harvest.dig);
    }
}
