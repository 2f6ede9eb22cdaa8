//! Wires page events to a shared [`MenuController`].
//!
//! Handlers hold weak references, so dropping the last strong handle to the
//! controller turns every bound event into a no-op.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::controller::MenuController;
use super::dom::{Browser, Dom, Scheduler, SearchLoader};
use super::live_search::LiveSearchField;
use crate::domain::models::Panel;
use crate::shared::Result;
use crate::shared::constants::LIVE_SEARCH_ID;
use crate::shared::logging::{self, LogOperation};

pub type SharedController<D, B> = Rc<RefCell<MenuController<D, B>>>;

/// Lay out the page, bind menu clicks, window resizes and the live-search field,
/// then show the main panel.
pub fn attach<D, B, S, L>(controller: &SharedController<D, B>, scheduler: S, loader: L) -> Result<()>
where
    D: Dom + 'static,
    B: Browser + 'static,
    S: Scheduler + 'static,
    L: SearchLoader + 'static,
{
    let ctrl = controller.borrow();
    ctrl.on_resize();

    let weak = Rc::downgrade(controller);
    ctrl.dom().on_resize(Rc::new(move || {
        if let Some(controller) = weak.upgrade() {
            controller.borrow().on_resize();
        }
    }))?;

    let items = ctrl.menu_items();
    for id in &items {
        let weak = Rc::downgrade(controller);
        ctrl.dom().on_click(
            id,
            Rc::new(move |item: &str| {
                if let Some(controller) = weak.upgrade() {
                    controller.borrow().dispatch(item);
                }
            }),
        )?;
    }

    let field = Rc::new(live_search_field(controller, Rc::new(loader)));
    let scheduler = Rc::new(scheduler);
    let bound = ctrl.dom().on_input(
        LIVE_SEARCH_ID,
        Rc::new(move |value: String| field.on_keystroke(value, &*scheduler)),
    );
    if bound.is_err() {
        logging::log_missing_element(LogOperation::LiveSearch, LIVE_SEARCH_ID);
    }

    ctrl.show_panel(Panel::Main);
    logging::log_mount(items.len(), ctrl.urls().len());
    Ok(())
}

fn live_search_field<D, B, L>(controller: &SharedController<D, B>, loader: Rc<L>) -> LiveSearchField
where
    D: Dom + 'static,
    B: Browser + 'static,
    L: SearchLoader + 'static,
{
    let delay = controller.borrow().config().validation_delay_ms;
    let weak = Rc::downgrade(controller);
    LiveSearchField::new(
        delay,
        Rc::new(move |value: &str| run_search(&weak, &*loader, value)),
    )
}

fn run_search<D, B, L>(weak: &Weak<RefCell<MenuController<D, B>>>, loader: &L, value: &str) -> bool
where
    D: Dom + 'static,
    B: Browser + 'static,
    L: SearchLoader,
{
    let Some(controller) = weak.upgrade() else {
        return true;
    };
    let validation = controller.borrow().validate_search(value);

    if let Some(request) = validation.request {
        let sequence = request.sequence;
        let weak = weak.clone();
        loader.load(
            request,
            Box::new(move |result: Result<String>| {
                if let Some(controller) = weak.upgrade() {
                    controller.borrow().complete_search(sequence, result);
                }
            }),
        );
    }
    validation.valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuConfig;
    use crate::menu::memory::{ManualScheduler, MemoryDom, RecordingBrowser, RecordingLoader};
    use crate::shared::constants::{
        CONTENT_ID, CRUMBLIST_SELECTOR, MENU_ITEM_SELECTOR, SEARCH_RESULTS_ID, SECTION_SELECTOR,
    };

    struct Page {
        controller: SharedController<MemoryDom, RecordingBrowser>,
        dom: MemoryDom,
        browser: RecordingBrowser,
        scheduler: ManualScheduler,
        loader: RecordingLoader,
    }

    fn mount_page() -> Page {
        let config = MenuConfig {
            player: "player-1".to_string(),
            ..MenuConfig::default()
        };
        let dom = MemoryDom::home_page(&config, 610.0);
        let browser = RecordingBrowser::new();
        let scheduler = ManualScheduler::new();
        let loader = RecordingLoader::new();
        let controller = Rc::new(RefCell::new(MenuController::new(
            dom.clone(),
            browser.clone(),
            config,
        )));
        attach(&controller, scheduler.clone(), loader.clone()).unwrap();
        Page {
            controller,
            dom,
            browser,
            scheduler,
            loader,
        }
    }

    #[test]
    fn test_attach_shows_main_and_lays_out() {
        let page = mount_page();

        assert_eq!(page.dom.visible_ids(SECTION_SELECTOR), vec!["mainMenu"]);
        assert_eq!(page.dom.visible_ids(CRUMBLIST_SELECTOR), vec!["mainCrumblist"]);
        assert_eq!(page.dom.is_visible(LIVE_SEARCH_ID), Some(false));
        assert_eq!(page.dom.width_of("musicMenu"), Some(600.0));
    }

    #[test]
    fn test_every_menu_item_is_clickable() {
        let page = mount_page();
        let items = page.dom.select_all(MENU_ITEM_SELECTOR);

        assert!(!items.is_empty());
        assert!(items.iter().all(|id| page.dom.has_click_handler(id)));
    }

    #[test]
    fn test_clicks_dispatch() {
        let page = mount_page();

        page.dom.click("MY_MUSIC");
        assert_eq!(page.controller.borrow().current_panel(), Some(Panel::Music));
        assert_eq!(page.dom.is_visible(LIVE_SEARCH_ID), Some(true));

        page.dom.click("BROWSE_BY_ALBUM");
        assert_eq!(
            page.browser.navigations(),
            vec!["browsedb.html?hierarchy=album,track&level=0"]
        );
    }

    #[test]
    fn test_urls_registered_after_attach_are_used() {
        let page = mount_page();
        page.dom.add_element("div", "PODCASTS", &["homeMenuItem"]);
        page.controller
            .borrow_mut()
            .register_url("PODCASTS", "podcasts.html");

        // Bindings are made once, so dispatch directly
        page.controller.borrow().dispatch("PODCASTS");

        assert_eq!(page.browser.navigations(), vec!["podcasts.html"]);
    }

    #[test]
    fn test_window_resize_relayouts() {
        let page = mount_page();
        page.dom.resize_element(CONTENT_ID, 900.0);

        page.dom.fire_resize();

        for id in page.dom.select_all(SECTION_SELECTOR) {
            assert_eq!(page.dom.width_of(&id), Some(890.0));
        }
    }

    #[test]
    fn test_typing_issues_one_debounced_search() {
        let page = mount_page();
        page.dom.click("MY_MUSIC");

        page.dom.type_text(LIVE_SEARCH_ID, "ab");
        page.dom.type_text(LIVE_SEARCH_ID, "abb");
        page.dom.type_text(LIVE_SEARCH_ID, "abba");
        assert!(page.loader.requests().is_empty());
        assert_eq!(page.scheduler.delays(), vec![1000, 1000, 1000]);

        page.scheduler.run_pending();

        let requests = page.loader.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "abba");
        assert_eq!(requests[0].player, "player-1");
        assert_eq!(page.controller.borrow().current_panel(), Some(Panel::Music));

        assert!(page.loader.complete(requests[0].sequence, Ok("<p>ABBA</p>".to_string())));
        assert_eq!(page.controller.borrow().current_panel(), Some(Panel::Search));
        assert_eq!(page.dom.html_of(SEARCH_RESULTS_ID).unwrap(), "<p>ABBA</p>");
    }

    #[test]
    fn test_short_input_returns_to_music_without_request() {
        let page = mount_page();
        page.dom.type_text(LIVE_SEARCH_ID, "queen");
        page.scheduler.run_pending();
        let pending = page.loader.requests()[0].sequence;

        page.dom.type_text(LIVE_SEARCH_ID, "qu");
        page.scheduler.run_pending();

        assert_eq!(page.loader.requests().len(), 1);
        assert_eq!(page.controller.borrow().current_panel(), Some(Panel::Music));

        // The earlier load finishing late must not bring the search panel back
        page.loader.complete(pending, Ok("late".to_string()));
        assert_eq!(page.controller.borrow().current_panel(), Some(Panel::Music));
    }

    #[test]
    fn test_dropped_controller_disables_handlers() {
        let page = mount_page();
        let Page {
            controller,
            dom,
            browser,
            ..
        } = page;
        drop(controller);

        dom.click("SETTINGS");

        assert!(browser.navigations().is_empty());
    }
}
