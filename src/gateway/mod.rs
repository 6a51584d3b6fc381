/// Launch data gateway: typed reads plus client-side filtering and paging
use crate::domain::{LaunchDetail, LaunchSummary, Page, Statistics};
use crate::errors::GatewayResult;
use crate::utils::{paginate, sort_oldest_first, sort_recent_first, status_matches};
use async_trait::async_trait;
use tracing::debug;

/// Raw backing data: an unfiltered, unpaginated launch collection
#[async_trait]
pub trait LaunchSource: Send + Sync {
    async fn fetch_all(&self) -> GatewayResult<Vec<LaunchSummary>>;
    async fn fetch_by_id(&self, id: &str) -> GatewayResult<LaunchDetail>;
    async fn fetch_statistics(&self) -> GatewayResult<Statistics>;
}

/// Paged launch reads consumed by the dashboard controller.
///
/// `LaunchDataGateway` implements this by filtering and slicing in memory;
/// a server-side paged query can implement it directly instead.
#[async_trait]
pub trait LaunchGateway: Send + Sync {
    async fn fetch_page(
        &self,
        page_index: usize,
        page_size: usize,
        status_filter: Option<&str>,
    ) -> GatewayResult<Page<LaunchSummary>>;
    async fn fetch_by_id(&self, id: &str) -> GatewayResult<LaunchDetail>;
    async fn fetch_statistics(&self) -> GatewayResult<Statistics>;
}

pub struct LaunchDataGateway<S> {
    source: S,
}

impl<S: LaunchSource> LaunchDataGateway<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Full collection in source order
    pub async fn fetch_all(&self) -> GatewayResult<Vec<LaunchSummary>> {
        self.source.fetch_all().await
    }

    /// Most recent `limit` launches, newest first
    pub async fn fetch_recent(&self, limit: usize) -> GatewayResult<Vec<LaunchSummary>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut launches = self.source.fetch_all().await?;
        sort_recent_first(&mut launches);
        launches.truncate(limit);
        Ok(launches)
    }

    /// Upcoming launches, soonest first
    pub async fn fetch_upcoming(&self) -> GatewayResult<Vec<LaunchSummary>> {
        let mut launches = self.fetch_by_status("upcoming").await?;
        sort_oldest_first(&mut launches);
        Ok(launches)
    }

    pub async fn fetch_by_status(&self, status: &str) -> GatewayResult<Vec<LaunchSummary>> {
        let launches = self.source.fetch_all().await?;
        Ok(launches
            .into_iter()
            .filter(|l| status_matches(&l.status, status))
            .collect())
    }

    pub async fn fetch_by_rocket(&self, rocket_id: &str) -> GatewayResult<Vec<LaunchSummary>> {
        let launches = self.source.fetch_all().await?;
        Ok(launches
            .into_iter()
            .filter(|l| l.rocket_id == rocket_id)
            .collect())
    }
}

#[async_trait]
impl<S: LaunchSource> LaunchGateway for LaunchDataGateway<S> {
    async fn fetch_page(
        &self,
        page_index: usize,
        page_size: usize,
        status_filter: Option<&str>,
    ) -> GatewayResult<Page<LaunchSummary>> {
        debug!(page_index, page_size, ?status_filter, "fetching launch page");
        let launches = self.source.fetch_all().await?;
        let page = paginate(launches, page_index, page_size, status_filter);
        debug!(
            returned = page.content.len(),
            total = page.total_elements,
            "launch page assembled"
        );
        Ok(page)
    }

    async fn fetch_by_id(&self, id: &str) -> GatewayResult<LaunchDetail> {
        self.source.fetch_by_id(id).await
    }

    async fn fetch_statistics(&self) -> GatewayResult<Statistics> {
        self.source.fetch_statistics().await
    }
}
