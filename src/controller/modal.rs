/// Launch detail modal state
use crate::domain::{LaunchDetail, LaunchStatus};
use crate::errors::GatewayError;
use serde::Serialize;
use tracing::error;

pub const DETAIL_ERROR: &str = "Failed to load launch details";

#[derive(Debug, Clone, Default, Serialize)]
pub struct LaunchDetailModal {
    pub launch_id: Option<String>,
    pub is_open: bool,
    pub launch: Option<LaunchDetail>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl LaunchDetailModal {
    /// Take new inputs from the dashboard. A different id invalidates
    /// whatever was cached for the previous one.
    pub fn sync(&mut self, launch_id: Option<String>, is_open: bool) {
        if self.launch_id != launch_id {
            self.launch = None;
            self.error = None;
            self.is_loading = false;
        }
        self.launch_id = launch_id;
        self.is_open = is_open;
    }

    /// Whether a detail fetch should be issued for the current inputs
    pub fn needs_fetch(&self) -> bool {
        self.is_open && self.launch_id.is_some() && self.launch.is_none() && !self.is_loading
    }

    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn is_showing(&self, launch_id: &str) -> bool {
        self.is_open && self.launch_id.as_deref() == Some(launch_id)
    }

    /// Returns false when the response belongs to a modal that has since
    /// closed or moved on to another launch.
    pub fn on_detail_loaded(&mut self, launch_id: &str, detail: LaunchDetail) -> bool {
        if !self.is_showing(launch_id) {
            return false;
        }
        self.launch = Some(detail);
        self.is_loading = false;
        true
    }

    pub fn on_detail_failed(&mut self, launch_id: &str, err: &GatewayError) -> bool {
        if !self.is_showing(launch_id) {
            return false;
        }
        error!("Error loading launch details for {}: {}", launch_id, err);
        self.error = Some(DETAIL_ERROR.to_string());
        self.is_loading = false;
        true
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn status_class(&self) -> Option<LaunchStatus> {
        self.launch.as_ref().map(|l| l.status_kind())
    }
}
