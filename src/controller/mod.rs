//! Dashboard state controller
//!
//! Statistics and launches are fetched by separate spawned tasks that report
//! back over a channel. Every result goes through `apply`, which only touches
//! the fields owned by that slice.
mod modal;

pub use modal::{LaunchDetailModal, DETAIL_ERROR};

use crate::domain::{LaunchDetail, LaunchSummary, Page, StatRow, Statistics};
use crate::errors::GatewayError;
use crate::gateway::LaunchGateway;
use crate::utils::{display_count, display_rate, total_pages, visible_pages};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const STATISTICS_ERROR: &str = "Failed to load launch statistics";
pub const LAUNCHES_ERROR: &str = "Failed to load launches";

/// Completion of one fetch
#[derive(Debug)]
pub enum DashboardEvent {
    StatisticsLoaded(Statistics),
    StatisticsFailed(GatewayError),
    LaunchesLoaded(Page<LaunchSummary>),
    LaunchesFailed(GatewayError),
    DetailLoaded {
        launch_id: String,
        detail: LaunchDetail,
    },
    DetailFailed {
        launch_id: String,
        error: GatewayError,
    },
}

/// Everything the view layer renders
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewState {
    pub stats: Vec<StatRow>,
    pub launches: Vec<LaunchSummary>,
    pub current_page: usize,
    pub page_size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub selected_status: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected_launch_id: Option<String>,
    pub is_modal_open: bool,
}

impl Default for DashboardViewState {
    fn default() -> Self {
        Self {
            stats: placeholder_stats(),
            launches: Vec::new(),
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_elements: 0,
            total_pages: 0,
            selected_status: None,
            is_loading: false,
            error: None,
            selected_launch_id: None,
            is_modal_open: false,
        }
    }
}

const TOTAL_TOOLTIP: &str = "Total number of SpaceX launches ever conducted";
const RATE_TOOLTIP: &str = "Percentage of successful launches";
const SUCCESS_TOOLTIP: &str = "Number of successful SpaceX launches";
const FAILED_TOOLTIP: &str = "Number of failed SpaceX launches";
const UPCOMING_TOOLTIP: &str = "Number of upcoming SpaceX launches scheduled";

fn stat_row(
    title: &'static str,
    value: String,
    is_positive: bool,
    tooltip: &'static str,
) -> StatRow {
    StatRow {
        title,
        value,
        is_positive,
        tooltip,
    }
}

/// Rows shown before the first statistics response arrives
pub fn placeholder_stats() -> Vec<StatRow> {
    let pending = || "...".to_string();
    vec![
        stat_row("Total Launches", pending(), true, TOTAL_TOOLTIP),
        stat_row("Success Rate", pending(), true, RATE_TOOLTIP),
        stat_row("Successful Launches", pending(), true, SUCCESS_TOOLTIP),
        stat_row("Failed Launches", pending(), false, FAILED_TOOLTIP),
        stat_row("Upcoming Launches", pending(), true, UPCOMING_TOOLTIP),
    ]
}

/// Project statistics into the five display rows
pub fn stat_rows(stats: &Statistics) -> Vec<StatRow> {
    vec![
        stat_row(
            "Total Launches",
            display_count(stats.total_launches),
            true,
            TOTAL_TOOLTIP,
        ),
        stat_row(
            "Success Rate",
            display_rate(stats.success_rate),
            stats.success_rate.unwrap_or(0.0) > 90.0,
            RATE_TOOLTIP,
        ),
        stat_row(
            "Successful Launches",
            display_count(stats.successful_launches),
            true,
            SUCCESS_TOOLTIP,
        ),
        stat_row(
            "Failed Launches",
            display_count(stats.failed_launches),
            false,
            FAILED_TOOLTIP,
        ),
        stat_row(
            "Upcoming Launches",
            display_count(stats.upcoming_launches),
            true,
            UPCOMING_TOOLTIP,
        ),
    ]
}

pub struct DashboardController<G> {
    gateway: Arc<G>,
    state: DashboardViewState,
    modal: LaunchDetailModal,
    events_tx: UnboundedSender<DashboardEvent>,
    events_rx: UnboundedReceiver<DashboardEvent>,
    stats_in_flight: usize,
    launches_in_flight: usize,
    detail_in_flight: usize,
}

impl<G: LaunchGateway + 'static> DashboardController<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            gateway,
            state: DashboardViewState::default(),
            modal: LaunchDetailModal::default(),
            events_tx,
            events_rx,
            stats_in_flight: 0,
            launches_in_flight: 0,
            detail_in_flight: 0,
        }
    }

    /// Start with a status filter already selected
    pub fn with_status_filter(mut self, status: Option<String>) -> Self {
        self.state.selected_status = status.filter(|s| !s.is_empty());
        self
    }

    pub fn view(&self) -> &DashboardViewState {
        &self.state
    }

    pub fn modal(&self) -> &LaunchDetailModal {
        &self.modal
    }

    /// Fetches issued but not yet applied
    pub fn in_flight(&self) -> usize {
        self.stats_in_flight + self.launches_in_flight + self.detail_in_flight
    }

    /// Issue the statistics and launches fetches back-to-back
    pub fn initialize(&mut self) {
        info!(
            page = self.state.current_page,
            status = ?self.state.selected_status,
            "Loading dashboard data"
        );
        self.state.is_loading = true;
        self.state.error = None;
        self.spawn_statistics_fetch();
        self.spawn_launches_fetch();
    }

    /// Same as `initialize`; pagination and filter are kept
    pub fn refresh_data(&mut self) {
        self.initialize();
    }

    fn spawn_statistics_fetch(&mut self) {
        self.stats_in_flight += 1;
        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = match gateway.fetch_statistics().await {
                Ok(stats) => DashboardEvent::StatisticsLoaded(stats),
                Err(e) => DashboardEvent::StatisticsFailed(e),
            };
            let _ = tx.send(event);
        });
    }

    fn spawn_launches_fetch(&mut self) {
        self.launches_in_flight += 1;
        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        let page = self.state.current_page;
        let size = self.state.page_size;
        let status = self.state.selected_status.clone();
        debug!(page, size, ?status, "Requesting launch page");
        tokio::spawn(async move {
            let event = match gateway.fetch_page(page, size, status.as_deref()).await {
                Ok(page) => DashboardEvent::LaunchesLoaded(page),
                Err(e) => DashboardEvent::LaunchesFailed(e),
            };
            let _ = tx.send(event);
        });
    }

    fn spawn_detail_fetch(&mut self, launch_id: String) {
        self.detail_in_flight += 1;
        self.modal.begin_loading();
        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = match gateway.fetch_by_id(&launch_id).await {
                Ok(detail) => DashboardEvent::DetailLoaded { launch_id, detail },
                Err(error) => DashboardEvent::DetailFailed { launch_id, error },
            };
            let _ = tx.send(event);
        });
    }

    /// Single reducer for fetch completions
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::StatisticsLoaded(stats) => self.on_statistics_loaded(stats),
            DashboardEvent::StatisticsFailed(err) => self.on_statistics_failed(err),
            DashboardEvent::LaunchesLoaded(page) => self.on_launches_loaded(page),
            DashboardEvent::LaunchesFailed(err) => self.on_launches_failed(err),
            DashboardEvent::DetailLoaded { launch_id, detail } => {
                self.detail_in_flight = self.detail_in_flight.saturating_sub(1);
                if !self.modal.on_detail_loaded(&launch_id, detail) {
                    debug!("Dropping stale launch detail for {}", launch_id);
                }
            }
            DashboardEvent::DetailFailed { launch_id, error } => {
                self.detail_in_flight = self.detail_in_flight.saturating_sub(1);
                if !self.modal.on_detail_failed(&launch_id, &error) {
                    debug!("Dropping stale launch detail error for {}", launch_id);
                }
            }
        }
    }

    /// Apply every completion that is already queued, without waiting
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait until every issued fetch has reported and been applied
    pub async fn settle(&mut self) {
        while self.in_flight() > 0 {
            match self.events_rx.recv().await {
                Some(event) => self.apply(event),
                None => break,
            }
        }
    }

    pub fn on_statistics_loaded(&mut self, stats: Statistics) {
        self.stats_in_flight = self.stats_in_flight.saturating_sub(1);
        debug!(?stats, "Statistics received");
        self.state.stats = stat_rows(&stats);
        if self.launches_in_flight == 0 {
            self.state.is_loading = false;
        }
    }

    pub fn on_statistics_failed(&mut self, err: GatewayError) {
        self.stats_in_flight = self.stats_in_flight.saturating_sub(1);
        error!("Error loading statistics: {}", err);
        self.state.error = Some(STATISTICS_ERROR.to_string());
        self.state.is_loading = false;
    }

    pub fn on_launches_loaded(&mut self, page: Page<LaunchSummary>) {
        self.launches_in_flight = self.launches_in_flight.saturating_sub(1);
        debug!(
            number = page.number,
            returned = page.content.len(),
            total = page.total_elements,
            "Launch page received"
        );
        self.state.total_elements = page.total_elements;
        self.state.total_pages = total_pages(page.total_elements, page.size);
        self.state.launches = page.content;
        self.state.is_loading = false;
    }

    pub fn on_launches_failed(&mut self, err: GatewayError) {
        self.launches_in_flight = self.launches_in_flight.saturating_sub(1);
        error!("Error loading paginated launches: {}", err);
        self.state.error = Some(LAUNCHES_ERROR.to_string());
        self.state.is_loading = false;
    }

    /// Navigate to page `n`. Returns false, leaving state untouched, when `n`
    /// is outside `[0, total_pages)`.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n >= self.state.total_pages {
            return false;
        }
        self.state.current_page = n;
        self.state.is_loading = true;
        self.spawn_launches_fetch();
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.state.current_page.checked_sub(1) {
            Some(n) => self.go_to_page(n),
            None => false,
        }
    }

    /// Select a status filter (`None` or empty for all) and reload from page 0
    pub fn on_status_filter(&mut self, status: Option<String>) {
        self.state.selected_status = status.filter(|s| !s.is_empty());
        self.state.current_page = 0;
        self.state.is_loading = true;
        self.spawn_launches_fetch();
    }

    pub fn on_launch_card_click(&mut self, launch_id: impl Into<String>) {
        let launch_id = launch_id.into();
        self.state.selected_launch_id = Some(launch_id.clone());
        self.state.is_modal_open = true;

        self.modal.sync(Some(launch_id.clone()), true);
        if self.modal.needs_fetch() {
            self.spawn_detail_fetch(launch_id);
        }
    }

    pub fn on_modal_close(&mut self) {
        self.state.selected_launch_id = None;
        self.state.is_modal_open = false;
        self.modal.close();
    }

    pub fn visible_pages(&self) -> Vec<usize> {
        visible_pages(self.state.current_page, self.state.total_pages)
    }
}
