//! Download module: harvesting and dispatch.
//!
//! This module provides:
//! - Run state tracking
//! - Timeline pagination
//! - Download job construction
//! - aria2 JSON-RPC messages and the WebSocket dispatcher

pub mod dispatch;
pub mod job;
pub mod rpc;
pub mod state;
pub mod timeline;

pub use dispatch::{DownloadDispatcher, JobOutcome};
pub use job::{build_jobs, DownloadJob};
pub use state::HarvestState;
pub use timeline::{harvest, HarvestOutcome};
