//! Seams between the menu controller and the page it drives.
//!
//! Elements are addressed by their `id` attribute. Elements without an id are
//! invisible to the controller and never returned by [`Dom::select_all`].

use std::rc::Rc;

use crate::domain::models::SearchRequest;
use crate::shared::Result;

/// Receives the id of the element that was clicked
pub type ClickHandler = Rc<dyn Fn(&str)>;
/// Receives the current value of the input
pub type InputHandler = Rc<dyn Fn(String)>;
pub type ResizeHandler = Rc<dyn Fn()>;

/// How a hidden element is hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMode {
    /// `visibility: hidden`, the element keeps its layout box
    Visibility,
    /// `display: none`, the layout box collapses
    Display,
}

pub trait Dom {
    /// Ids of every element matching a `tag.class` selector, in document order
    fn select_all(&self, selector: &str) -> Vec<String>;

    fn set_visible(&self, id: &str, visible: bool, mode: VisibilityMode) -> Result<()>;

    /// Rendered width in pixels
    fn width(&self, id: &str) -> Result<f64>;

    fn set_width(&self, id: &str, width: f64) -> Result<()>;

    /// Replace the element's content with an HTML fragment
    fn set_html(&self, id: &str, html: &str) -> Result<()>;

    fn on_click(&self, id: &str, handler: ClickHandler) -> Result<()>;

    fn on_input(&self, id: &str, handler: InputHandler) -> Result<()>;

    fn on_resize(&self, handler: ResizeHandler) -> Result<()>;
}

/// Window-level side effects
pub trait Browser {
    fn navigate(&self, url: &str);

    fn alert(&self, message: &str);
}

/// Deferred execution on the UI loop
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Fire-and-forget load of search results.
/// `on_complete` receives the response body or the failure.
pub trait SearchLoader {
    fn load(&self, request: SearchRequest, on_complete: Box<dyn FnOnce(Result<String>)>);
}
