//! Request option values for the lookup and timeline endpoints.

use crate::api::fields::{join, Exclude, Expansion, MediaField, TweetField, UserField};

/// Default page size for timeline requests.
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Options for the user timeline endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineOptions {
    pub tweet_fields: Vec<TweetField>,
    pub user_fields: Vec<UserField>,
    pub expansions: Vec<Expansion>,
    pub media_fields: Vec<MediaField>,
    pub max_results: u32,
    pub excludes: Vec<Exclude>,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            tweet_fields: vec![
                TweetField::Id,
                TweetField::Text,
                TweetField::Attachments,
                TweetField::AuthorId,
                TweetField::ContextAnnotations,
                TweetField::ConversationId,
                TweetField::CreatedAt,
                TweetField::Entities,
                TweetField::Geo,
                TweetField::InReplyToUserId,
                TweetField::Lang,
                TweetField::PublicMetrics,
                TweetField::PossiblySensitive,
                TweetField::ReferencedTweets,
                TweetField::Source,
                TweetField::Withheld,
            ],
            user_fields: vec![UserField::Username],
            expansions: vec![Expansion::AttachmentsMediaKeys],
            media_fields: vec![
                MediaField::DurationMs,
                MediaField::Height,
                MediaField::MediaKey,
                MediaField::PreviewImageUrl,
                MediaField::Type,
                MediaField::Url,
                MediaField::Width,
                MediaField::PublicMetrics,
                MediaField::AltText,
                MediaField::Variants,
            ],
            max_results: DEFAULT_MAX_RESULTS,
            excludes: vec![Exclude::Retweets, Exclude::Replies],
        }
    }
}

impl TimelineOptions {
    /// Build the query string pairs for one page request.
    pub fn query_pairs(&self, pagination_token: Option<&str>) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(7);

        push_non_empty(&mut pairs, "tweet.fields", join(&self.tweet_fields, TweetField::as_str));
        push_non_empty(&mut pairs, "user.fields", join(&self.user_fields, UserField::as_str));
        push_non_empty(&mut pairs, "expansions", join(&self.expansions, Expansion::as_str));
        push_non_empty(&mut pairs, "media.fields", join(&self.media_fields, MediaField::as_str));
        pairs.push(("max_results", self.max_results.to_string()));
        push_non_empty(&mut pairs, "exclude", join(&self.excludes, Exclude::as_str));

        if let Some(token) = pagination_token.filter(|t| !t.is_empty()) {
            pairs.push(("pagination_token", token.to_string()));
        }

        pairs
    }
}

/// Options for the user lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLookupOptions {
    pub user_fields: Vec<UserField>,
    pub expansions: Vec<Expansion>,
}

impl Default for UserLookupOptions {
    fn default() -> Self {
        Self {
            user_fields: vec![
                UserField::CreatedAt,
                UserField::Description,
                UserField::Entities,
                UserField::Id,
                UserField::Location,
                UserField::Name,
                UserField::PinnedTweetId,
                UserField::ProfileImageUrl,
                UserField::Protected,
                UserField::PublicMetrics,
                UserField::Url,
                UserField::Username,
                UserField::Verified,
                UserField::Withheld,
            ],
            expansions: vec![Expansion::PinnedTweetId],
        }
    }
}

impl UserLookupOptions {
    pub fn query_pairs(&self, usernames: &[&str]) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("usernames", usernames.join(","))];
        push_non_empty(&mut pairs, "user.fields", join(&self.user_fields, UserField::as_str));
        push_non_empty(&mut pairs, "expansions", join(&self.expansions, Expansion::as_str));
        pairs
    }
}

fn push_non_empty(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: String) {
    if !value.is_empty() {
        pairs.push((key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_first_page_has_no_token() {
        let pairs = TimelineOptions::default().query_pairs(None);
        assert!(value(&pairs, "pagination_token").is_none());
        assert_eq!(value(&pairs, "max_results"), Some("100"));
        assert_eq!(value(&pairs, "exclude"), Some("retweets,replies"));
        assert_eq!(value(&pairs, "expansions"), Some("attachments.media_keys"));
        assert!(value(&pairs, "media.fields").unwrap().contains("variants"));
        assert!(value(&pairs, "tweet.fields").unwrap().contains("public_metrics"));
    }

    #[test]
    fn test_continuation_token_is_forwarded() {
        let pairs = TimelineOptions::default().query_pairs(Some("7140dibdnow9c7btw3w"));
        assert_eq!(value(&pairs, "pagination_token"), Some("7140dibdnow9c7btw3w"));

        let pairs = TimelineOptions::default().query_pairs(Some(""));
        assert!(value(&pairs, "pagination_token").is_none());
    }

    #[test]
    fn test_empty_excludes_are_omitted() {
        let opts = TimelineOptions {
            excludes: Vec::new(),
            ..Default::default()
        };
        assert!(value(&opts.query_pairs(None), "exclude").is_none());
    }

    #[test]
    fn test_user_lookup_pairs() {
        let pairs = UserLookupOptions::default().query_pairs(&["alice", "bob"]);
        assert_eq!(value(&pairs, "usernames"), Some("alice,bob"));
        assert_eq!(value(&pairs, "expansions"), Some("pinned_tweet_id"));
    }
}
