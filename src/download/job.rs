//! Download jobs handed to the download agent.

use crate::error::Result;
use crate::fs::output_filename;
use crate::media::{select_best_url, MediaRecord};

/// One enqueue request's worth of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    /// Folder under the agent's base directory.
    pub folder: String,

    /// Source media key.
    pub media_key: String,

    /// URL to fetch, with the quality suffix applied.
    pub url: String,

    /// Output filename: media key plus inferred extension.
    pub file_name: String,
}

impl DownloadJob {
    /// Build a job for a media record.
    ///
    /// Returns `Ok(None)` when the record has no usable URL.
    pub fn from_record(
        record: &MediaRecord,
        folder: &str,
        url_suffix: &str,
    ) -> Result<Option<Self>> {
        let selected = select_best_url(record);
        if selected.is_empty() {
            return Ok(None);
        }

        let url = format!("{}{}", selected, url_suffix);
        let file_name = output_filename(&record.key, &url)?;

        Ok(Some(Self {
            folder: folder.to_string(),
            media_key: record.key.clone(),
            url,
            file_name,
        }))
    }
}

/// Build jobs for harvested media, in order.
///
/// Records without a usable URL are logged and skipped; the second value is
/// the number skipped.
pub fn build_jobs(
    media: &[MediaRecord],
    folder: &str,
    url_suffix: &str,
) -> (Vec<DownloadJob>, u64) {
    let mut jobs = Vec::with_capacity(media.len());
    let mut skipped = 0;

    for record in media {
        match DownloadJob::from_record(record, folder, url_suffix) {
            Ok(Some(job)) => jobs.push(job),
            Ok(None) => {
                skipped += 1;
                tracing::warn!("Media {} ({}) has no download URL", record.key, record.kind);
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!("Skipping media {}: {}", record.key, e);
            }
        }
    }

    (jobs, skipped)
}
