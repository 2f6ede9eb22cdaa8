use dioxus::prelude::*;

use crate::app::components::{Crumblist, MenuSection};
use crate::config::MenuConfig;
use crate::domain::models::Panel;
use crate::shared::constants::{CONFIG_SCRIPT_ID, CONTENT_ID, LIVE_SEARCH_ID};

/// Home page markup. Ids and classes follow the conventions in
/// `shared::constants`; the menu controller finds everything through them.
#[component]
pub fn HomePage(config: MenuConfig) -> Element {
    // Read back by the client on mount; an empty script means defaults there
    let config_json = config.to_embedded_json().unwrap_or_else(|e| {
        tracing::error!("Failed to serialize home menu config: {}", e);
        String::new()
    });

    rsx! {
        script {
            r#type: "application/json",
            id: CONFIG_SCRIPT_ID,
            dangerous_inner_html: "{config_json}",
        }

        div { id: CONTENT_ID, class: "c-home",
            div { class: "c-home__crumbs",
                for panel in Panel::ALL {
                    Crumblist { key: "{panel}", panel }
                }
            }

            input {
                id: LIVE_SEARCH_ID,
                class: "c-livesearch",
                r#type: "text",
                autocomplete: "off",
                placeholder: "Search your music...",
            }

            for panel in Panel::ALL {
                MenuSection {
                    key: "{panel}",
                    panel,
                    items: config.items_in(panel).cloned().collect::<Vec<_>>(),
                }
            }
        }
    }
}
