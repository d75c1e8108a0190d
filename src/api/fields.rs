//! Field and expansion selectors understood by the X API v2.

use serde::{Deserialize, Serialize};

/// Post (tweet) fields requested from the timeline endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweetField {
    Id,
    Text,
    Attachments,
    AuthorId,
    ContextAnnotations,
    ConversationId,
    CreatedAt,
    Entities,
    Geo,
    InReplyToUserId,
    Lang,
    PublicMetrics,
    PossiblySensitive,
    ReferencedTweets,
    Source,
    Withheld,
}

impl TweetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TweetField::Id => "id",
            TweetField::Text => "text",
            TweetField::Attachments => "attachments",
            TweetField::AuthorId => "author_id",
            TweetField::ContextAnnotations => "context_annotations",
            TweetField::ConversationId => "conversation_id",
            TweetField::CreatedAt => "created_at",
            TweetField::Entities => "entities",
            TweetField::Geo => "geo",
            TweetField::InReplyToUserId => "in_reply_to_user_id",
            TweetField::Lang => "lang",
            TweetField::PublicMetrics => "public_metrics",
            TweetField::PossiblySensitive => "possibly_sensitive",
            TweetField::ReferencedTweets => "referenced_tweets",
            TweetField::Source => "source",
            TweetField::Withheld => "withheld",
        }
    }
}

/// User fields requested from lookup and timeline endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    CreatedAt,
    Description,
    Entities,
    Id,
    Location,
    Name,
    PinnedTweetId,
    ProfileImageUrl,
    Protected,
    PublicMetrics,
    Url,
    Username,
    Verified,
    Withheld,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::CreatedAt => "created_at",
            UserField::Description => "description",
            UserField::Entities => "entities",
            UserField::Id => "id",
            UserField::Location => "location",
            UserField::Name => "name",
            UserField::PinnedTweetId => "pinned_tweet_id",
            UserField::ProfileImageUrl => "profile_image_url",
            UserField::Protected => "protected",
            UserField::PublicMetrics => "public_metrics",
            UserField::Url => "url",
            UserField::Username => "username",
            UserField::Verified => "verified",
            UserField::Withheld => "withheld",
        }
    }
}

/// Media fields requested alongside attachment expansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaField {
    DurationMs,
    Height,
    MediaKey,
    PreviewImageUrl,
    Type,
    Url,
    Width,
    PublicMetrics,
    AltText,
    Variants,
}

impl MediaField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaField::DurationMs => "duration_ms",
            MediaField::Height => "height",
            MediaField::MediaKey => "media_key",
            MediaField::PreviewImageUrl => "preview_image_url",
            MediaField::Type => "type",
            MediaField::Url => "url",
            MediaField::Width => "width",
            MediaField::PublicMetrics => "public_metrics",
            MediaField::AltText => "alt_text",
            MediaField::Variants => "variants",
        }
    }
}

/// Expansions that inline referenced objects into `includes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    AttachmentsMediaKeys,
    PinnedTweetId,
}

impl Expansion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expansion::AttachmentsMediaKeys => "attachments.media_keys",
            Expansion::PinnedTweetId => "pinned_tweet_id",
        }
    }
}

/// Timeline entries excluded server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exclude {
    Retweets,
    Replies,
}

impl Exclude {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclude::Retweets => "retweets",
            Exclude::Replies => "replies",
        }
    }
}

/// Join selectors into the comma-separated form the API expects.
pub fn join<T, F>(items: &[T], name: F) -> String
where
    F: Fn(&T) -> &'static str,
{
    items.iter().map(name).collect::<Vec<_>>().join(",")
}
