use dioxus::prelude::*;

use crate::app::components::MenuItem;
use crate::config::MenuItemConfig;
use crate::domain::models::Panel;
use crate::shared::constants::{SEARCH_RESULTS_ID, SECTION_CLASS};

// One panel of the home menu (BEM: c-menu-section)
#[component]
pub fn MenuSection(panel: Panel, items: Vec<MenuItemConfig>) -> Element {
    let section_id = panel.section_id();

    rsx! {
        div { id: "{section_id}", class: "{SECTION_CLASS} c-menu-section c-menu-section--{panel}",
            for item in items.iter() {
                MenuItem { key: "{item.id}", item: item.clone() }
            }
            if panel == Panel::Search {
                div { id: SEARCH_RESULTS_ID, class: "c-search-results" }
            }
        }
    }
}
