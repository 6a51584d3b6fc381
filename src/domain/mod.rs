/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Launch record as shown in list views
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSummary {
    pub launch_id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub mission_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub flight_number: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub launch_date_utc: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub rocket_id: String,
}

impl LaunchSummary {
    /// Launch date parsed as UTC, `None` when the source sent something unparseable
    pub fn launch_date(&self) -> Option<DateTime<Utc>> {
        self.launch_date_utc.parse::<DateTime<Utc>>().ok()
    }

    pub fn status_kind(&self) -> LaunchStatus {
        LaunchStatus::classify(&self.status)
    }
}

/// Full launch record for the detail view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDetail {
    pub launch_id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub mission_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub flight_number: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub launch_date_utc: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub rocket_id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_to_default")]
    pub details: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub launchpad_id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub payloads: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub patch_small_link: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub patch_large_link: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub webcast_link: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub article_link: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub wikipedia_link: String,
}

impl LaunchDetail {
    pub fn status_kind(&self) -> LaunchStatus {
        LaunchStatus::classify(&self.status)
    }

    /// Project the detail down to its list-view fields
    pub fn summary(&self) -> LaunchSummary {
        LaunchSummary {
            launch_id: self.launch_id.clone(),
            mission_name: self.mission_name.clone(),
            flight_number: self.flight_number,
            launch_date_utc: self.launch_date_utc.clone(),
            status: self.status.clone(),
            rocket_id: self.rocket_id.clone(),
        }
    }
}

/// Aggregate launch statistics; any field may be missing upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub total_launches: Option<u64>,
    #[serde(default)]
    pub successful_launches: Option<u64>,
    #[serde(default)]
    pub failed_launches: Option<u64>,
    #[serde(default)]
    pub upcoming_launches: Option<u64>,
    #[serde(default)]
    pub success_rate: Option<f64>,
}

/// A bounded slice of a filtered collection plus navigation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index
    pub number: usize,
    /// Requested page size
    pub size: usize,
    /// Count after filtering, before pagination
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn empty(number: usize, size: usize) -> Self {
        Self {
            content: Vec::new(),
            number,
            size,
            total_elements: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            1
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        self.number + 1 >= self.total_pages()
    }
}

/// Display classification of the free-form status field.
///
/// "failure" and "failed" collapse to the same class here, but status
/// filtering compares the raw strings and keeps them distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaunchStatus {
    Success,
    Failure,
    Upcoming,
    Other,
}

impl LaunchStatus {
    pub fn classify(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "success" => LaunchStatus::Success,
            "failure" | "failed" => LaunchStatus::Failure,
            "upcoming" => LaunchStatus::Upcoming,
            _ => LaunchStatus::Other,
        }
    }
}

/// One statistics tile rendered by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub title: &'static str,
    pub value: String,
    pub is_positive: bool,
    pub tooltip: &'static str,
}

fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
