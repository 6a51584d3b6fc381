/// Utility functions
use crate::domain::{LaunchSummary, Page};

/// Number of page-number controls shown at once
pub const PAGE_WINDOW: usize = 5;

/// Case-insensitive exact status match. An empty filter matches everything.
pub fn status_matches(status: &str, filter: &str) -> bool {
    filter.is_empty() || status.to_lowercase() == filter.to_lowercase()
}

/// Filter by status, then slice out one page. The count is taken after
/// filtering and before slicing.
pub fn paginate(
    launches: Vec<LaunchSummary>,
    page_index: usize,
    page_size: usize,
    status_filter: Option<&str>,
) -> Page<LaunchSummary> {
    let filtered: Vec<LaunchSummary> = match status_filter {
        Some(filter) => launches
            .into_iter()
            .filter(|l| status_matches(&l.status, filter))
            .collect(),
        None => launches,
    };

    let total_elements = filtered.len();
    let start = page_index.saturating_mul(page_size);
    let content = if start >= total_elements {
        Vec::new()
    } else {
        filtered
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect()
    };

    Page {
        content,
        number: page_index,
        size: page_size,
        total_elements,
    }
}

/// Most recent first. Stable, so equal dates keep their original order;
/// unparseable dates sink to the end.
pub fn sort_recent_first(launches: &mut [LaunchSummary]) {
    launches.sort_by_key(|l| std::cmp::Reverse(l.launch_date()));
}

/// Oldest first, unparseable dates last.
pub fn sort_oldest_first(launches: &mut [LaunchSummary]) {
    launches.sort_by(|a, b| match (a.launch_date(), b.launch_date()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// ceil(total / size), zero when size is zero
pub fn total_pages(total_elements: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_elements.div_ceil(page_size)
    }
}

/// Page indices to render as page-number controls: everything when there
/// are few pages, otherwise a window of `PAGE_WINDOW` centered on the
/// current page and clamped to the valid range.
pub fn visible_pages(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        return (0..total_pages).collect();
    }

    let half = PAGE_WINDOW / 2;
    let mut start = current_page.saturating_sub(half);
    if start + PAGE_WINDOW > total_pages {
        start = total_pages - PAGE_WINDOW;
    }
    (start..start + PAGE_WINDOW).collect()
}

/// Render an optional count, falling back to "0"
pub fn display_count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "0".to_string())
}

/// Render a success rate with one decimal, falling back to "0%" for
/// missing or zero rates
pub fn display_rate(value: Option<f64>) -> String {
    match value {
        Some(rate) if rate != 0.0 && !rate.is_nan() => format!("{:.1}%", rate),
        _ => "0%".to_string(),
    }
}
