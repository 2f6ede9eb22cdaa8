use dioxus::prelude::*;

use crate::domain::models::Panel;
use crate::shared::constants::CRUMBLIST_CLASS;

fn crumbs(panel: Panel) -> &'static [&'static str] {
    match panel {
        Panel::Main => &["Home"],
        Panel::Music => &["Home", "My Music"],
        Panel::Radio => &["Home", "Internet Radio"],
        Panel::Search => &["Home", "My Music", "Search"],
    }
}

// Breadcrumb trail shown alongside its panel (BEM: c-crumblist)
#[component]
pub fn Crumblist(panel: Panel) -> Element {
    let crumblist_id = panel.crumblist_id();
    let trail = crumbs(panel);
    let last = trail.len() - 1;

    rsx! {
        span { id: "{crumblist_id}", class: "{CRUMBLIST_CLASS} c-crumblist",
            for (i, crumb) in trail.iter().enumerate() {
                span { class: "c-crumblist__crumb", "{crumb}" }
                if i < last {
                    span { class: "c-crumblist__separator", " / " }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trail_starts_at_home() {
        for panel in Panel::ALL {
            assert_eq!(crumbs(panel)[0], "Home");
        }
        assert_eq!(crumbs(Panel::Search).last(), Some(&"Search"));
    }
}
