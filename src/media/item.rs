//! Media record representation.

use std::fmt;

/// Type of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    /// Map the API `type` string onto a media kind.
    ///
    /// Animated GIFs carry variants too, but only `video` goes through
    /// variant selection.
    pub fn from_api_type(value: &str) -> Self {
        match value {
            "photo" => MediaKind::Image,
            "video" => MediaKind::Video,
            _ => MediaKind::Other,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::Other => write!(f, "other"),
        }
    }
}

/// One encoded rendition of a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Bit-rate in bits per second. Streams without one report 0.
    pub bit_rate: u64,

    /// MIME type, when the API reports it.
    pub content_type: Option<String>,

    pub url: String,
}

impl Variant {
    pub fn new(bit_rate: u64, url: impl Into<String>) -> Self {
        Self {
            bit_rate,
            content_type: None,
            url: url.into(),
        }
    }
}

/// A resolvable media object attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    /// Unique media key.
    pub key: String,

    pub kind: MediaKind,

    /// Canonical URL. Videos usually have none and rely on variants.
    pub url: String,

    /// Renditions, in API order.
    pub variants: Vec<Variant>,

    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration_ms: Option<u64>,
    pub alt_text: Option<String>,
}

impl MediaRecord {
    /// Create a record with no variants or dimensions.
    pub fn new(key: impl Into<String>, kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            url: url.into(),
            variants: Vec::new(),
            width: None,
            height: None,
            duration_ms: None,
            alt_text: None,
        }
    }

    /// Attach variants, replacing any present.
    pub fn with_variants(mut self, variants: Vec<Variant>) -> Self {
        self.variants = variants;
        self
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// Short human-readable summary for logs, e.g. `video 1280x720 12.5s`.
    pub fn describe(&self) -> String {
        let mut parts = vec![self.kind.to_string()];

        if let (Some(width), Some(height)) = (self.width, self.height) {
            parts.push(format!("{}x{}", width, height));
        }
        if let Some(ms) = self.duration_ms {
            parts.push(format!("{:.1}s", ms as f64 / 1000.0));
        }
        if !self.variants.is_empty() {
            parts.push(format!("{} variant(s)", self.variants.len()));
        }
        if let Some(alt) = self.alt_text.as_deref().filter(|a| !a.is_empty()) {
            parts.push(format!("alt={:?}", alt));
        }

        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_api_type() {
        assert_eq!(MediaKind::from_api_type("photo"), MediaKind::Image);
        assert_eq!(MediaKind::from_api_type("video"), MediaKind::Video);
        assert_eq!(MediaKind::from_api_type("animated_gif"), MediaKind::Other);
    }

    #[test]
    fn test_describe() {
        let mut video = MediaRecord::new("7_1", MediaKind::Video, "")
            .with_variants(vec![Variant::new(832000, "a"), Variant::new(0, "b")]);
        video.width = Some(1280);
        video.height = Some(720);
        video.duration_ms = Some(12_500);
        assert_eq!(video.describe(), "video 1280x720 12.5s 2 variant(s)");

        let mut photo = MediaRecord::new("3_1", MediaKind::Image, "https://pbs.twimg.com/a.jpg");
        photo.alt_text = Some("a cat".into());
        assert_eq!(photo.describe(), "image alt=\"a cat\"");

        photo.alt_text = Some(String::new());
        photo.width = Some(640);
        assert_eq!(photo.describe(), "image");
    }
}
