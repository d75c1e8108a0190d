//! Download URL selection for media records.

use crate::media::item::{MediaRecord, Variant};

/// Select the URL to download for a media record.
///
/// Non-video records and videos without variants use the canonical URL.
/// Videos use the variant with the strictly highest bit-rate; the first
/// variant wins ties, including the all-zero case.
pub fn select_best_url(record: &MediaRecord) -> &str {
    if !record.is_video() {
        return &record.url;
    }

    match best_variant(&record.variants) {
        Some(variant) => {
            tracing::debug!(
                "Media {}: {} at {} bps",
                record.key,
                variant.content_type.as_deref().unwrap_or("unknown type"),
                variant.bit_rate
            );
            &variant.url
        }
        None => &record.url,
    }
}

/// Highest bit-rate variant, first-seen on ties.
fn best_variant(variants: &[Variant]) -> Option<&Variant> {
    let mut iter = variants.iter();
    let mut best = iter.next()?;

    for variant in iter {
        if variant.bit_rate > best.bit_rate {
            best = variant;
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn video(variants: Vec<Variant>) -> MediaRecord {
        MediaRecord::new("7_1", MediaKind::Video, "https://pbs.twimg.com/thumb.jpg")
            .with_variants(variants)
    }

    #[test]
    fn test_highest_bit_rate_wins() {
        let record = video(vec![
            Variant::new(500, "A"),
            Variant::new(1200, "B"),
            Variant::new(800, "C"),
        ]);
        assert_eq!(select_best_url(&record), "B");
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let record = video(vec![
            Variant::new(800, "A"),
            Variant::new(2176000, "B"),
            Variant::new(2176000, "C"),
        ]);
        assert_eq!(select_best_url(&record), "B");
        // Deterministic across calls.
        assert_eq!(select_best_url(&record), select_best_url(&record));
    }

    #[test]
    fn test_all_zero_bit_rates_pick_first() {
        let record = video(vec![Variant::new(0, "playlist.m3u8"), Variant::new(0, "B")]);
        assert_eq!(select_best_url(&record), "playlist.m3u8");
    }

    #[test]
    fn test_empty_variants_fall_back_to_canonical() {
        let record = video(Vec::new());
        assert_eq!(select_best_url(&record), "https://pbs.twimg.com/thumb.jpg");
    }

    #[test]
    fn test_non_video_ignores_variants() {
        let record = MediaRecord::new("16_1", MediaKind::Other, "https://pbs.twimg.com/gif.jpg")
            .with_variants(vec![Variant::new(0, "https://video.twimg.com/gif.mp4")]);
        assert_eq!(select_best_url(&record), "https://pbs.twimg.com/gif.jpg");

        let image = MediaRecord::new("3_1", MediaKind::Image, "https://pbs.twimg.com/a.jpg");
        assert_eq!(select_best_url(&image), "https://pbs.twimg.com/a.jpg");
    }
}
