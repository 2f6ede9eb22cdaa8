// Home menu controller and the page seams it runs against

pub mod dom;
pub mod controller;
pub mod live_search;
pub mod binding;
pub mod memory;

// Browser implementation (web-sys, gloo)
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use binding::{SharedController, attach};
pub use controller::MenuController;
pub use dom::{Browser, Dom, Scheduler, SearchLoader, VisibilityMode};
pub use live_search::{Debouncer, LiveSearchField};
