// Domain models for the home menu
// Pure Rust, no framework dependencies

pub mod panel;
pub mod menu;
pub mod search;

pub use panel::{Panel, crumblist_id, section_id};
pub use menu::{DispatchOutcome, MenuAction, UrlTable};
pub use search::{SearchRequest, SearchValidation};
