//! API response type definitions.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Problem object returned in the `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiProblem {
    pub title: Option<String>,
    pub detail: Option<String>,
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    pub value: Option<String>,
}

impl ApiProblem {
    /// Human readable summary of the problem.
    pub fn summary(&self) -> String {
        match (&self.title, &self.detail) {
            (Some(title), Some(detail)) => format!("{}: {}", title, detail),
            (Some(title), None) => title.clone(),
            (None, Some(detail)) => detail.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

/// Response of `GET /2/users/by`.
#[derive(Debug, Deserialize)]
pub struct UserLookupResponse {
    #[serde(default)]
    pub data: Vec<UserObj>,
    #[serde(default)]
    pub errors: Vec<ApiProblem>,
}

/// User object.
#[derive(Debug, Clone, Deserialize)]
pub struct UserObj {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub protected: Option<bool>,
    pub verified: Option<bool>,
    pub pinned_tweet_id: Option<String>,
    pub public_metrics: Option<UserMetrics>,
}

/// Public counters of a user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMetrics {
    pub followers_count: Option<u64>,
    pub following_count: Option<u64>,
    pub tweet_count: Option<u64>,
    pub listed_count: Option<u64>,
}

/// Response of `GET /2/users/:id/tweets`.
#[derive(Debug, Deserialize)]
pub struct TimelineResponse {
    #[serde(default)]
    pub data: Vec<TweetObj>,
    #[serde(default)]
    pub includes: Option<Includes>,
    #[serde(default)]
    pub meta: Option<TimelineMeta>,
    #[serde(default)]
    pub errors: Vec<ApiProblem>,
}

/// A post from the timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetObj {
    pub id: String,
    pub text: Option<String>,
    pub author_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub public_metrics: Option<TweetMetrics>,
    pub attachments: Option<Attachments>,
}

/// Public counters of a post.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetMetrics {
    pub like_count: Option<u64>,
    pub retweet_count: Option<u64>,
    pub reply_count: Option<u64>,
    pub quote_count: Option<u64>,
}

/// Post attachments.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachments {
    #[serde(default)]
    pub media_keys: Vec<String>,
}

/// Expanded objects referenced by the page's posts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub media: Vec<MediaObj>,
}

/// Media object.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaObj {
    pub media_key: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: Option<String>,
    pub preview_image_url: Option<String>,
    pub duration_ms: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt_text: Option<String>,
    #[serde(default)]
    pub variants: Vec<MediaVariant>,
}

/// Encoded rendition of a video.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaVariant {
    pub bit_rate: Option<u64>,
    pub content_type: Option<String>,
    pub url: String,
}

/// Pagination metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineMeta {
    pub result_count: Option<u64>,
    pub newest_id: Option<String>,
    pub oldest_id: Option<String>,
    pub next_token: Option<String>,
}
