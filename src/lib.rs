//! x-harvester - queue an X account's popular media for download in aria2.
//!
//! The pipeline walks an account's timeline page by page, keeps the media of
//! posts whose like count reaches a threshold, picks the best rendition of
//! each video and enqueues every item with an aria2 instance over its
//! WebSocket JSON-RPC interface.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use x_harvester::{build_jobs, harvest, Config, DownloadDispatcher, EngagementFilter, HarvestState, XApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = XApi::new(&config.api.bearer_token, &config.api.host, config.api_timeout())?;
//!     let account = api.lookup_account("alice").await?;
//!
//!     let mut state = HarvestState::new("alice".into(), account.id.clone());
//!     let filter = EngagementFilter::new(config.harvest.likes_threshold);
//!     let outcome = harvest(&api, &account, &config.timeline_options(), &filter, true, &mut state).await;
//!
//!     let (jobs, _skipped) = build_jobs(&outcome.media, "alice", &config.downloader.url_suffix);
//!     let dispatcher = DownloadDispatcher::new(&config.downloader);
//!     for outcome in dispatcher.dispatch_all(&jobs, |_| {}).await {
//!         if let Err(e) = outcome.result {
//!             eprintln!("{}", e);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{Account, Page, Post, TimelineOptions, TimelineSource, XApi};
pub use config::Config;
pub use download::{
    build_jobs, harvest, DownloadDispatcher, DownloadJob, HarvestOutcome, HarvestState,
};
pub use error::{Error, Result};
pub use media::{EngagementFilter, MediaKind, MediaRecord, Variant};
