//! In-memory page used to drive the menu without a browser.
//!
//! `MemoryDom` clones share the same document, so a test can keep a handle
//! while the controller owns another one.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use super::dom::{
    Browser, ClickHandler, Dom, InputHandler, ResizeHandler, Scheduler, SearchLoader,
    VisibilityMode,
};
use crate::config::MenuConfig;
use crate::domain::models::{Panel, SearchRequest};
use crate::shared::constants::{
    CONTENT_ID, CRUMBLIST_CLASS, LIVE_SEARCH_ID, MENU_ITEM_CLASS, SEARCH_RESULTS_ID,
    SECTION_CLASS,
};
use crate::shared::{MenuError, Result};

#[derive(Debug, Clone)]
pub struct MemoryElement {
    pub tag: String,
    pub id: String,
    pub classes: Vec<String>,
    pub visible: bool,
    pub visibility_mode: VisibilityMode,
    pub width: f64,
    pub html: String,
}

#[derive(Default)]
struct MemoryDocument {
    elements: Vec<MemoryElement>,
    click_handlers: HashMap<String, ClickHandler>,
    input_handlers: HashMap<String, InputHandler>,
    resize_handlers: Vec<ResizeHandler>,
}

impl MemoryDocument {
    fn find(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.iter().find(|el| !el.id.is_empty() && el.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut MemoryElement> {
        self.elements
            .iter_mut()
            .find(|el| !el.id.is_empty() && el.id == id)
            .ok_or_else(|| MenuError::ElementNotFound(id.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct MemoryDom {
    document: Rc<RefCell<MemoryDocument>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same structure the home page component renders
    pub fn home_page(config: &MenuConfig, content_width: f64) -> Self {
        let dom = Self::new();
        dom.add_element("div", CONTENT_ID, &[]);
        dom.resize_element(CONTENT_ID, content_width);
        for panel in Panel::ALL {
            dom.add_element("span", &panel.crumblist_id(), &[CRUMBLIST_CLASS]);
        }
        dom.add_element("input", LIVE_SEARCH_ID, &[]);
        for panel in Panel::ALL {
            dom.add_element("div", &panel.section_id(), &[SECTION_CLASS]);
            for item in config.items_in(panel) {
                dom.add_element("div", &item.id, &[MENU_ITEM_CLASS]);
            }
            if panel == Panel::Search {
                dom.add_element("div", SEARCH_RESULTS_ID, &[]);
            }
        }
        dom
    }

    pub fn add_element(&self, tag: &str, id: &str, classes: &[&str]) -> &Self {
        self.document.borrow_mut().elements.push(MemoryElement {
            tag: tag.to_string(),
            id: id.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            visible: true,
            visibility_mode: VisibilityMode::Visibility,
            width: 0.0,
            html: String::new(),
        });
        self
    }

    pub fn element(&self, id: &str) -> Option<MemoryElement> {
        self.document.borrow().find(id).cloned()
    }

    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.element(id).map(|el| el.visible)
    }

    /// Ids of the currently visible elements matching `selector`
    pub fn visible_ids(&self, selector: &str) -> Vec<String> {
        self.select_all(selector)
            .into_iter()
            .filter(|id| self.is_visible(id) == Some(true))
            .collect()
    }

    pub fn width_of(&self, id: &str) -> Option<f64> {
        self.element(id).map(|el| el.width)
    }

    pub fn html_of(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.html)
    }

    /// Change an element's rendered width without firing resize handlers
    pub fn resize_element(&self, id: &str, width: f64) {
        if let Ok(el) = self.document.borrow_mut().find_mut(id) {
            el.width = width;
        }
    }

    pub fn click(&self, id: &str) {
        let handler = self.document.borrow().click_handlers.get(id).cloned();
        if let Some(handler) = handler {
            handler(id);
        }
    }

    pub fn type_text(&self, id: &str, value: &str) {
        let handler = self.document.borrow().input_handlers.get(id).cloned();
        if let Some(handler) = handler {
            handler(value.to_string());
        }
    }

    pub fn fire_resize(&self) {
        let handlers = self.document.borrow().resize_handlers.clone();
        for handler in handlers {
            handler();
        }
    }

    pub fn has_click_handler(&self, id: &str) -> bool {
        self.document.borrow().click_handlers.contains_key(id)
    }
}

fn matches_selector(el: &MemoryElement, selector: &str) -> bool {
    let (tag, class) = match selector.split_once('.') {
        Some((tag, class)) => (tag, Some(class)),
        None => (selector, None),
    };
    let tag_ok = tag.is_empty() || tag == el.tag;
    let class_ok = class.is_none_or(|class| el.classes.iter().any(|c| c == class));
    tag_ok && class_ok
}

impl Dom for MemoryDom {
    fn select_all(&self, selector: &str) -> Vec<String> {
        self.document
            .borrow()
            .elements
            .iter()
            .filter(|el| !el.id.is_empty() && matches_selector(el, selector))
            .map(|el| el.id.clone())
            .collect()
    }

    fn set_visible(&self, id: &str, visible: bool, mode: VisibilityMode) -> Result<()> {
        let mut document = self.document.borrow_mut();
        let el = document.find_mut(id)?;
        el.visible = visible;
        el.visibility_mode = mode;
        Ok(())
    }

    fn width(&self, id: &str) -> Result<f64> {
        self.document
            .borrow()
            .find(id)
            .map(|el| el.width)
            .ok_or_else(|| MenuError::ElementNotFound(id.to_string()))
    }

    fn set_width(&self, id: &str, width: f64) -> Result<()> {
        self.document.borrow_mut().find_mut(id)?.width = width;
        Ok(())
    }

    fn set_html(&self, id: &str, html: &str) -> Result<()> {
        self.document.borrow_mut().find_mut(id)?.html = html.to_string();
        Ok(())
    }

    fn on_click(&self, id: &str, handler: ClickHandler) -> Result<()> {
        let mut document = self.document.borrow_mut();
        document.find_mut(id)?;
        document.click_handlers.insert(id.to_string(), handler);
        Ok(())
    }

    fn on_input(&self, id: &str, handler: InputHandler) -> Result<()> {
        let mut document = self.document.borrow_mut();
        document.find_mut(id)?;
        document.input_handlers.insert(id.to_string(), handler);
        Ok(())
    }

    fn on_resize(&self, handler: ResizeHandler) -> Result<()> {
        self.document.borrow_mut().resize_handlers.push(handler);
        Ok(())
    }
}

/// Records navigations and alerts instead of performing them
#[derive(Clone, Default)]
pub struct RecordingBrowser {
    navigations: Rc<RefCell<Vec<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Browser for RecordingBrowser {
    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Queues tasks until [`ManualScheduler::run_pending`] is called
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<(u32, Box<dyn FnOnce()>)>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.queue.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run queued tasks in scheduling order, including any they enqueue
    pub fn run_pending(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some((_, task)) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back((delay_ms, task));
    }
}

type Completion = Box<dyn FnOnce(Result<String>)>;

/// Holds issued loads until the caller completes them, in any order
#[derive(Clone, Default)]
pub struct RecordingLoader {
    issued: Rc<RefCell<Vec<SearchRequest>>>,
    pending: Rc<RefCell<HashMap<u64, Completion>>>,
}

impl RecordingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.issued.borrow().clone()
    }

    /// Finish the load with the given sequence number. Returns false if unknown.
    pub fn complete(&self, sequence: u64, result: Result<String>) -> bool {
        let completion = self.pending.borrow_mut().remove(&sequence);
        match completion {
            Some(on_complete) => {
                on_complete(result);
                true
            }
            None => false,
        }
    }
}

impl SearchLoader for RecordingLoader {
    fn load(&self, request: SearchRequest, on_complete: Box<dyn FnOnce(Result<String>)>) {
        self.pending.borrow_mut().insert(request.sequence, on_complete);
        self.issued.borrow_mut().push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_select_all_matches_tag_and_class() {
        let dom = MemoryDom::new();
        dom.add_element("div", "a", &["homeMenuItem"])
            .add_element("span", "b", &["homeMenuItem"])
            .add_element("div", "", &["homeMenuItem"])
            .add_element("div", "c", &["other"]);

        assert_eq!(dom.select_all("div.homeMenuItem"), vec!["a".to_string()]);
        assert_eq!(dom.select_all(".homeMenuItem"), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(dom.select_all("div").len(), 2);
    }

    #[test]
    fn test_missing_element_errors() {
        let dom = MemoryDom::new();
        assert!(matches!(
            dom.set_visible("nope", true, VisibilityMode::Display),
            Err(MenuError::ElementNotFound(id)) if id == "nope"
        ));
        assert!(dom.width("nope").is_err());
    }

    #[test]
    fn test_click_runs_bound_handler() {
        let dom = MemoryDom::new();
        dom.add_element("div", "RADIO", &["homeMenuItem"]);
        let clicked = Rc::new(Cell::new(false));
        let flag = clicked.clone();
        dom.on_click("RADIO", Rc::new(move |id: &str| flag.set(id == "RADIO")))
            .unwrap();

        dom.click("RADIO");

        assert!(clicked.get());
    }

    #[test]
    fn test_home_page_has_every_panel() {
        let dom = MemoryDom::home_page(&MenuConfig::default(), 800.0);
        assert_eq!(dom.select_all("div.homeMenuSection").len(), Panel::ALL.len());
        assert_eq!(dom.select_all("span.overlappingCrumblist").len(), Panel::ALL.len());
        assert!(dom.element(LIVE_SEARCH_ID).is_some());
        assert!(dom.element(SEARCH_RESULTS_ID).is_some());
        assert_eq!(dom.width_of(CONTENT_ID), Some(800.0));
    }

    #[test]
    fn test_manual_scheduler_runs_in_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let log = log.clone();
            scheduler.schedule(10 * n, Box::new(move || log.borrow_mut().push(n)));
        }

        assert_eq!(scheduler.delays(), vec![0, 10, 20]);
        scheduler.run_pending();

        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(scheduler.pending(), 0);
    }
}
