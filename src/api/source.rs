//! Abstraction over the paged timeline endpoint.

use async_trait::async_trait;

use crate::api::model::Page;
use crate::api::options::TimelineOptions;
use crate::error::Result;

/// A source of timeline pages for an account.
#[async_trait]
pub trait TimelineSource: Send + Sync {
    /// Fetch one page. `pagination_token` is `None` for the first page.
    async fn fetch_page(
        &self,
        account_id: &str,
        options: &TimelineOptions,
        pagination_token: Option<&str>,
    ) -> Result<Page>;
}
