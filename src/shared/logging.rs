//! Structured logging for the home menu
//!
//! Keeps log fields consistent between the controller, the event binder and
//! the browser layer. Uses tracing with an `operation` field per concern.

/// Operations tagged on every log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Mount,
    MenuDispatch,
    PanelSwitch,
    Layout,
    LiveSearch,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Mount => "mount",
            LogOperation::MenuDispatch => "menu_dispatch",
            LogOperation::PanelSwitch => "panel_switch",
            LogOperation::Layout => "layout",
            LogOperation::LiveSearch => "live_search",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Log controller mount
pub fn log_mount(menu_items: usize, registered_urls: usize) {
    tracing::info!(
        operation = LogOperation::Mount.as_str(),
        menu_items = menu_items,
        registered_urls = registered_urls,
        "Home menu mounted"
    );
}

/// Log a menu click
pub fn log_dispatch(item: &str, outcome: &str) {
    tracing::debug!(
        operation = LogOperation::MenuDispatch.as_str(),
        item = item,
        outcome = outcome,
        "Menu item dispatched"
    );
}

/// Log a panel switch
pub fn log_panel_switch(panel: &str, sections: usize, crumblists: usize) {
    tracing::debug!(
        operation = LogOperation::PanelSwitch.as_str(),
        panel = panel,
        sections = sections,
        crumblists = crumblists,
        "Panel shown"
    );
}

/// Log an element lookup that found nothing
pub fn log_missing_element(operation: LogOperation, element_id: &str) {
    tracing::debug!(
        operation = operation.as_str(),
        element_id = element_id,
        "Element not found, skipped"
    );
}

/// Log a layout pass
pub fn log_layout(width: f64, sections: usize) {
    tracing::trace!(
        operation = LogOperation::Layout.as_str(),
        width = width,
        sections = sections,
        "Section widths updated"
    );
}

/// Log a search request
pub fn log_search_issued(query: &str, player: &str, sequence: u64) {
    tracing::info!(
        operation = LogOperation::LiveSearch.as_str(),
        query = query,
        player = player,
        sequence = sequence,
        "Search request issued"
    );
}

/// Log a search completion that lost the race to a newer query
pub fn log_search_stale(sequence: u64, latest: u64) {
    tracing::debug!(
        operation = LogOperation::LiveSearch.as_str(),
        sequence = sequence,
        latest = latest,
        "Stale search response dropped"
    );
}

/// Log a failed search load
pub fn log_search_failed(sequence: u64, error: &str) {
    tracing::warn!(
        operation = LogOperation::LiveSearch.as_str(),
        sequence = sequence,
        error = error,
        "Search load failed"
    );
}

/// Log a navigation away from the page
pub fn log_navigation(item: &str, url: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        item = item,
        url = url,
        "Navigating"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Mount.as_str(), "mount");
        assert_eq!(LogOperation::MenuDispatch.as_str(), "menu_dispatch");
        assert_eq!(LogOperation::PanelSwitch.as_str(), "panel_switch");
        assert_eq!(LogOperation::Layout.as_str(), "layout");
        assert_eq!(LogOperation::LiveSearch.as_str(), "live_search");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
    }
}
