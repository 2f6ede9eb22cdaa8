//! DOM conventions shared by the rendered page and the menu controller.

/// Clickable menu entries
pub const MENU_ITEM_SELECTOR: &str = "div.homeMenuItem";
/// Panel sections, one per panel, id `<panel>Menu`
pub const SECTION_SELECTOR: &str = "div.homeMenuSection";
/// Breadcrumbs, one per panel, id `<panel>Crumblist`
pub const CRUMBLIST_SELECTOR: &str = "span.overlappingCrumblist";

pub const MENU_ITEM_CLASS: &str = "homeMenuItem";
pub const SECTION_CLASS: &str = "homeMenuSection";
pub const CRUMBLIST_CLASS: &str = "overlappingCrumblist";

pub const SECTION_SUFFIX: &str = "Menu";
pub const CRUMBLIST_SUFFIX: &str = "Crumblist";

pub const LIVE_SEARCH_ID: &str = "livesearch";
pub const SEARCH_RESULTS_ID: &str = "search-results";
pub const CONTENT_ID: &str = "content";
pub const CONFIG_SCRIPT_ID: &str = "home-menu-config";

pub const DEFAULT_SEARCH_ENDPOINT: &str = "search.xml";
pub const DEFAULT_VALIDATION_DELAY_MS: u32 = 1000;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_SECTION_MARGIN_PX: f64 = 10.0;

pub const COMING_SOON_MESSAGE: &str = "...soon to come";
