//! Engagement threshold for harvested posts.

use crate::api::model::Post;

/// Likes a post needs before its media is harvested.
pub const DEFAULT_LIKES_THRESHOLD: u64 = 100;

/// Like-count predicate, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementFilter {
    threshold: u64,
}

impl EngagementFilter {
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// A post qualifies when its like count is known and at least the threshold.
    pub fn qualifies(&self, post: &Post) -> bool {
        post.like_count.is_some_and(|likes| likes >= self.threshold)
    }
}

impl Default for EngagementFilter {
    fn default() -> Self {
        Self::new(DEFAULT_LIKES_THRESHOLD)
    }
}
