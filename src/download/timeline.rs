//! Timeline pagination and media harvesting.

use tracing::Instrument;

use crate::api::{Account, Page, TimelineOptions, TimelineSource};
use crate::download::state::HarvestState;
use crate::error::Error;
use crate::media::{resolve, EngagementFilter, MediaRecord};

/// Result of walking a timeline.
///
/// A fetch failure ends the walk but keeps what was collected before it.
#[derive(Debug, Default)]
pub struct HarvestOutcome {
    pub media: Vec<MediaRecord>,
    pub error: Option<Error>,
}

/// Walk an account's timeline and collect media from qualifying posts.
///
/// Media is returned in page order, then post order, then attachment order.
/// Paging stops after the first page when `continue_paging` is false, or at
/// the first page without a continuation token.
pub async fn harvest<S>(
    source: &S,
    account: &Account,
    options: &TimelineOptions,
    filter: &EngagementFilter,
    continue_paging: bool,
    state: &mut HarvestState,
) -> HarvestOutcome
where
    S: TimelineSource + ?Sized,
{
    let span = tracing::info_span!("harvest", account = %account.id);
    walk_pages(source, account, options, filter, continue_paging, state)
        .instrument(span)
        .await
}

async fn walk_pages<S>(
    source: &S,
    account: &Account,
    options: &TimelineOptions,
    filter: &EngagementFilter,
    continue_paging: bool,
    state: &mut HarvestState,
) -> HarvestOutcome
where
    S: TimelineSource + ?Sized,
{
    let mut outcome = HarvestOutcome::default();
    let mut token: Option<String> = None;

    tracing::info!(
        "Harvesting timeline of {} (likes >= {})",
        account.username,
        filter.threshold()
    );

    loop {
        tracing::debug!("Fetching timeline page {}", state.pages_fetched + 1);

        let page = match source.fetch_page(&account.id, options, token.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    "Timeline fetch failed after {} page(s): {}",
                    state.pages_fetched,
                    e
                );
                outcome.error = Some(e.into_fetch());
                break;
            }
        };

        state.increment_pages();
        collect_page(&page, filter, state, &mut outcome.media);

        match page.continuation() {
            Some(next) if continue_paging => token = Some(next.to_string()),
            _ => break,
        }
    }

    tracing::info!(
        "Harvest finished: {} media from {} page(s)",
        outcome.media.len(),
        state.pages_fetched
    );

    outcome
}

/// Append the media of every qualifying post on a page.
fn collect_page(
    page: &Page,
    filter: &EngagementFilter,
    state: &mut HarvestState,
    out: &mut Vec<MediaRecord>,
) {
    for post in &page.posts {
        state.increment_posts_seen();

        if !filter.qualifies(post) {
            continue;
        }
        state.increment_posts_qualified();

        for key in &post.media_keys {
            match resolve(key, &page.media) {
                Some(record) => {
                    state.increment_media_resolved();
                    tracing::debug!("Post {}: media {} ({})", post.id, key, record.describe());
                    out.push(record.clone());
                }
                None => {
                    state.increment_missing_keys();
                    tracing::debug!("Media {} of post {} not in page includes", key, post.id);
                }
            }
        }
    }
}
