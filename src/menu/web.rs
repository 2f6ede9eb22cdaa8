//! Browser implementation of the menu seams over web-sys and gloo.
//!
//! WASM-only. The mounted controller lives in a thread-local so the page's
//! inline scripts can reach it through the exported `addUrl` / `showPanel`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlInputElement, Window};

use super::binding::{SharedController, attach};
use super::controller::MenuController;
use super::dom::{
    Browser, ClickHandler, Dom, InputHandler, ResizeHandler, Scheduler, SearchLoader,
    VisibilityMode,
};
use crate::config::MenuConfig;
use crate::domain::models::{SearchRequest, UrlTable};
use crate::shared::constants::CONFIG_SCRIPT_ID;
use crate::shared::{MenuError, Result};

type WebMenu = SharedController<WebDom, WebBrowser>;

thread_local! {
    static MOUNTED: RefCell<Option<WebMenu>> = const { RefCell::new(None) };
    // URLs registered by page scripts before the menu mounted
    static PENDING_URLS: RefCell<UrlTable> = RefCell::new(UrlTable::new());
}

pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Result<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| MenuError::ElementNotFound(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MenuError::JsError(format!("#{} is not an HTML element", id)))
    }
}

impl Dom for WebDom {
    fn select_all(&self, selector: &str) -> Vec<String> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            tracing::warn!("Invalid selector: {}", selector);
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.id())
            .filter(|id| !id.is_empty())
            .collect()
    }

    fn set_visible(&self, id: &str, visible: bool, mode: VisibilityMode) -> Result<()> {
        let style = self.element(id)?.style();
        match mode {
            VisibilityMode::Visibility => {
                style.set_property("visibility", if visible { "visible" } else { "hidden" })?;
            }
            VisibilityMode::Display if visible => {
                style.remove_property("display")?;
            }
            VisibilityMode::Display => {
                style.set_property("display", "none")?;
            }
        }
        Ok(())
    }

    fn width(&self, id: &str) -> Result<f64> {
        Ok(self.element(id)?.offset_width() as f64)
    }

    fn set_width(&self, id: &str, width: f64) -> Result<()> {
        self.element(id)?
            .style()
            .set_property("width", &format!("{}px", width))?;
        Ok(())
    }

    fn set_html(&self, id: &str, html: &str) -> Result<()> {
        self.element(id)?.set_inner_html(html);
        Ok(())
    }

    fn on_click(&self, id: &str, handler: ClickHandler) -> Result<()> {
        let element = self.element(id)?;
        let item = id.to_string();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            handler(item.as_str());
        });
        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        // Listeners live as long as the page
        closure.forget();
        Ok(())
    }

    fn on_input(&self, id: &str, handler: InputHandler) -> Result<()> {
        let input = self
            .element(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| MenuError::JsError(format!("#{} is not an input", id)))?;
        let source = input.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            handler(source.value());
        });
        input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn on_resize(&self, handler: ResizeHandler) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| MenuError::JsError("no window".to_string()))?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            handler();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

pub struct WebBrowser {
    window: Window,
}

impl WebBrowser {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Browser for WebBrowser {
    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            tracing::error!("Navigation to {} failed: {:?}", url, e);
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::error!("Alert failed: {:?}", e);
        }
    }
}

pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// POSTs the form-encoded query and hands back the response body
pub struct FetchLoader;

impl SearchLoader for FetchLoader {
    fn load(&self, request: SearchRequest, on_complete: Box<dyn FnOnce(Result<String>)>) {
        wasm_bindgen_futures::spawn_local(async move {
            on_complete(fetch_search_results(&request).await);
        });
    }
}

pub async fn fetch_search_results(request: &SearchRequest) -> Result<String> {
    let response = Request::post(&request.endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(request.form_body())?
        .send()
        .await?;

    if !response.ok() {
        return Err(MenuError::HttpStatus {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    Ok(response.text().await?)
}

/// JSON config embedded in the page, if any
pub fn embedded_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_SCRIPT_ID)?
        .text_content()
}

/// Build the controller over the live document and bind it. Mounting twice
/// replaces the earlier controller.
pub fn mount(config: MenuConfig) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| MenuError::JsError("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| MenuError::JsError("no document".to_string()))?;

    let mut controller = MenuController::new(WebDom::new(document), WebBrowser::new(window), config);
    controller.register_urls(PENDING_URLS.with(|pending| pending.take()));

    let controller = Rc::new(RefCell::new(controller));
    attach(&controller, TimeoutScheduler, FetchLoader)?;
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(controller));
    Ok(())
}

#[wasm_bindgen(js_name = addUrl)]
pub fn add_url(key: String, url: String) {
    MOUNTED.with(|mounted| match mounted.borrow().as_ref() {
        Some(controller) => controller.borrow_mut().register_url(key, url),
        None => PENDING_URLS.with(|pending| pending.borrow_mut().insert(key, url)),
    });
}

#[wasm_bindgen(js_name = showPanel)]
pub fn show_panel(name: &str) {
    MOUNTED.with(|mounted| {
        if let Some(controller) = mounted.borrow().as_ref() {
            controller.borrow().show_panel_by_name(name);
        }
    });
}
