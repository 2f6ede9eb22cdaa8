use std::cell::Cell;

use super::dom::{Browser, Dom, VisibilityMode};
use crate::config::MenuConfig;
use crate::domain::models::{
    DispatchOutcome, MenuAction, Panel, SearchRequest, SearchValidation, UrlTable, crumblist_id,
    section_id,
};
use crate::shared::Result;
use crate::shared::constants::{
    COMING_SOON_MESSAGE, CONTENT_ID, CRUMBLIST_SELECTOR, LIVE_SEARCH_ID, MENU_ITEM_SELECTOR,
    SEARCH_RESULTS_ID, SECTION_SELECTOR,
};
use crate::shared::logging::{self, LogOperation};

/// Drives the home menu: panel visibility, menu dispatch, live search and layout.
///
/// Every operation except URL registration takes `&self` so the controller can be
/// shared with event handlers through an `Rc<RefCell<_>>` without long borrows.
pub struct MenuController<D, B> {
    dom: D,
    browser: B,
    config: MenuConfig,
    urls: UrlTable,
    current_panel: Cell<Option<Panel>>,
    search_sequence: Cell<u64>,
}

impl<D: Dom, B: Browser> MenuController<D, B> {
    /// URLs declared on the configured menu items are registered up front
    pub fn new(dom: D, browser: B, config: MenuConfig) -> Self {
        let urls = config.url_table();
        Self {
            dom,
            browser,
            config,
            urls,
            current_panel: Cell::new(None),
            search_sequence: Cell::new(0),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn urls(&self) -> &UrlTable {
        &self.urls
    }

    pub fn current_panel(&self) -> Option<Panel> {
        self.current_panel.get()
    }

    pub fn register_url(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.urls.insert(key, url);
    }

    pub fn register_urls(&mut self, urls: UrlTable) {
        self.urls.merge(urls);
    }

    /// Ids of the clickable menu entries currently on the page
    pub fn menu_items(&self) -> Vec<String> {
        self.dom.select_all(MENU_ITEM_SELECTOR)
    }

    pub fn dispatch(&self, item: &str) -> DispatchOutcome {
        let outcome = match MenuAction::from_item(item) {
            Some(MenuAction::ShowPanel(panel)) => {
                self.show_panel(panel);
                DispatchOutcome::ShowedPanel(panel)
            }
            Some(MenuAction::ComingSoon) => {
                self.browser.alert(COMING_SOON_MESSAGE);
                DispatchOutcome::ComingSoon
            }
            None => match self.urls.get(item) {
                Some(url) => {
                    logging::log_navigation(item, url);
                    self.browser.navigate(url);
                    DispatchOutcome::Navigated(url.to_string())
                }
                None => DispatchOutcome::Ignored,
            },
        };
        logging::log_dispatch(item, outcome.as_str());
        outcome
    }

    pub fn show_panel(&self, panel: Panel) {
        self.show_panel_by_name(panel.as_str());
    }

    /// Show the section and crumblist named after `panel`, hide every other one.
    /// Names outside [`Panel`] hide all sections and the live-search box.
    pub fn show_panel_by_name(&self, panel: &str) {
        let section = section_id(panel);
        let sections = self.dom.select_all(SECTION_SELECTOR);
        for id in &sections {
            self.set_visible(id, *id == section, VisibilityMode::Visibility);
        }

        let crumblist = crumblist_id(panel);
        let crumblists = self.dom.select_all(CRUMBLIST_SELECTOR);
        for id in &crumblists {
            self.set_visible(id, *id == crumblist, VisibilityMode::Visibility);
        }

        let known = panel.parse::<Panel>().ok();
        let live_search = known.is_some_and(|p| p.shows_live_search());
        self.set_visible(LIVE_SEARCH_ID, live_search, VisibilityMode::Display);

        self.current_panel.set(known);
        logging::log_panel_switch(panel, sections.len(), crumblists.len());
    }

    /// Live-search validator. Short queries fall back to the music panel;
    /// longer ones produce the request to issue. Always reports valid.
    ///
    /// Length is counted in UTF-16 code units of the trimmed value, as the
    /// browser counts it; the request carries the value as typed.
    pub fn validate_search(&self, value: &str) -> SearchValidation {
        let sequence = self.search_sequence.get() + 1;
        self.search_sequence.set(sequence);

        if value.trim().encode_utf16().count() <= self.config.min_query_len {
            self.show_panel(Panel::Music);
            return SearchValidation {
                valid: true,
                request: None,
            };
        }

        let request = SearchRequest {
            endpoint: self.config.search_endpoint.clone(),
            query: value.to_string(),
            player: self.config.player.clone(),
            sequence,
        };
        logging::log_search_issued(&request.query, &request.player, sequence);

        SearchValidation {
            valid: true,
            request: Some(request),
        }
    }

    /// Apply a finished load. Responses to anything but the latest validation are
    /// dropped. A failed load still switches to the search panel, leaving the
    /// previous results in place. Returns whether the response was applied.
    pub fn complete_search(&self, sequence: u64, result: Result<String>) -> bool {
        let latest = self.search_sequence.get();
        if sequence != latest {
            logging::log_search_stale(sequence, latest);
            return false;
        }

        match result {
            Ok(html) => {
                if let Err(e) = self.dom.set_html(SEARCH_RESULTS_ID, &html) {
                    tracing::debug!("Search results not rendered: {}", e);
                }
            }
            Err(e) => logging::log_search_failed(sequence, &e.to_string()),
        }
        self.show_panel(Panel::Search);
        true
    }

    /// Fit every section to the content column, minus the configured margin
    pub fn on_resize(&self) {
        let content_width = match self.dom.width(CONTENT_ID) {
            Ok(width) => width,
            Err(_) => {
                logging::log_missing_element(LogOperation::Layout, CONTENT_ID);
                return;
            }
        };
        let width = (content_width - self.config.section_margin_px).max(0.0);

        let sections = self.dom.select_all(SECTION_SELECTOR);
        for id in &sections {
            if self.dom.set_width(id, width).is_err() {
                logging::log_missing_element(LogOperation::Layout, id);
            }
        }
        logging::log_layout(width, sections.len());
    }

    fn set_visible(&self, id: &str, visible: bool, mode: VisibilityMode) {
        if self.dom.set_visible(id, visible, mode).is_err() {
            logging::log_missing_element(LogOperation::PanelSwitch, id);
        }
    }
}
