//! Run state tracking.

use crate::error::Result;

/// Per-run counters for one account.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HarvestState {
    // Account info
    pub handle: Option<String>,
    pub account_id: Option<String>,

    // Timeline
    pub pages_fetched: u64,
    pub posts_seen: u64,
    pub posts_qualified: u64,
    pub media_resolved: u64,
    pub missing_media_keys: u64,

    // Dispatch
    pub jobs_skipped: u64,
    pub jobs_queued: u64,
    pub jobs_failed: u64,
}

impl HarvestState {
    /// Create a new state for an account.
    pub fn new(handle: String, account_id: String) -> Self {
        Self {
            handle: Some(handle),
            account_id: Some(account_id),
            ..Default::default()
        }
    }

    pub fn increment_pages(&mut self) {
        self.pages_fetched += 1;
    }

    pub fn increment_posts_seen(&mut self) {
        self.posts_seen += 1;
    }

    pub fn increment_posts_qualified(&mut self) {
        self.posts_qualified += 1;
    }

    pub fn increment_media_resolved(&mut self) {
        self.media_resolved += 1;
    }

    pub fn increment_missing_keys(&mut self) {
        self.missing_media_keys += 1;
    }

    pub fn increment_queued(&mut self) {
        self.jobs_queued += 1;
    }

    pub fn increment_failed(&mut self) {
        self.jobs_failed += 1;
    }

    /// Count one dispatch result. Failures are already logged by the
    /// dispatcher.
    pub fn record_dispatch(&mut self, result: &Result<String>) {
        match result {
            Ok(_) => self.increment_queued(),
            Err(_) => self.increment_failed(),
        }
    }

    /// Jobs that reached the dispatcher.
    pub fn jobs_attempted(&self) -> u64 {
        self.jobs_queued + self.jobs_failed
    }
}
