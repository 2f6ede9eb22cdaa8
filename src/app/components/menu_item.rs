use dioxus::prelude::*;

use crate::config::MenuItemConfig;
use crate::shared::constants::MENU_ITEM_CLASS;

// Clickable entry (BEM: c-menu-item). The element id is the dispatch key.
#[component]
pub fn MenuItem(item: MenuItemConfig) -> Element {
    let variant = if item.url.is_some() { "c-menu-item--link" } else { "c-menu-item--action" };

    rsx! {
        div { id: "{item.id}", class: "{MENU_ITEM_CLASS} c-menu-item {variant}",
            span { class: "c-menu-item__label", "{item.label}" }
        }
    }
}
