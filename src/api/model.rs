//! Domain values built from API responses.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::api::types::{MediaObj, TimelineResponse, TweetObj, UserObj};
use crate::media::{MediaKind, MediaRecord, Variant};

/// Media key → record table for one page.
pub type MediaTable = HashMap<String, MediaRecord>;

/// The account whose timeline is harvested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<UserObj> for Account {
    fn from(user: UserObj) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            description: user.description.unwrap_or_default(),
            created_at: user.created_at,
        }
    }
}

/// One timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,

    /// Like count, absent when the API omitted public metrics.
    pub like_count: Option<u64>,

    /// Attached media keys, in attachment order.
    pub media_keys: Vec<String>,
}

impl From<TweetObj> for Post {
    fn from(tweet: TweetObj) -> Self {
        Self {
            id: tweet.id,
            like_count: tweet.public_metrics.and_then(|m| m.like_count),
            media_keys: tweet.attachments.map(|a| a.media_keys).unwrap_or_default(),
        }
    }
}

impl From<MediaObj> for MediaRecord {
    fn from(media: MediaObj) -> Self {
        let variants = media
            .variants
            .into_iter()
            .map(|v| Variant {
                bit_rate: v.bit_rate.unwrap_or(0),
                content_type: v.content_type,
                url: v.url,
            })
            .collect();

        Self {
            kind: MediaKind::from_api_type(&media.media_type),
            key: media.media_key,
            url: media.url.unwrap_or_default(),
            variants,
            width: media.width,
            height: media.height,
            duration_ms: media.duration_ms,
            alt_text: media.alt_text,
        }
    }
}

/// One fetched timeline page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub posts: Vec<Post>,
    pub media: MediaTable,

    /// Continuation token. `None` means this is the last page.
    pub next_token: Option<String>,
}

impl Page {
    /// Token for the following page, if any.
    pub fn continuation(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl From<TimelineResponse> for Page {
    fn from(response: TimelineResponse) -> Self {
        let media = response
            .includes
            .map(|i| i.media)
            .unwrap_or_default()
            .into_iter()
            .map(|m| (m.media_key.clone(), MediaRecord::from(m)))
            .collect();

        Self {
            posts: response.data.into_iter().map(Post::from).collect(),
            media,
            next_token: response
                .meta
                .and_then(|m| m.next_token)
                .filter(|t| !t.is_empty()),
        }
    }
}
