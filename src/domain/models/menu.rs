use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::panel::Panel;

/// Built-in menu entries handled in-page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowPanel(Panel),
    ComingSoon,
}

impl MenuAction {
    /// Resolve a menu item id to a built-in action.
    /// `None` means the item is looked up in the URL table.
    pub fn from_item(item: &str) -> Option<MenuAction> {
        match item {
            "MY_MUSIC" => Some(MenuAction::ShowPanel(Panel::Music)),
            "RADIO" => Some(MenuAction::ShowPanel(Panel::Radio)),
            "MUSIC_ON_DEMAND" | "OTHER_SERVICES" => Some(MenuAction::ComingSoon),
            _ => None,
        }
    }
}

/// What a click on a menu item resulted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    ShowedPanel(Panel),
    ComingSoon,
    Navigated(String),
    Ignored,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::ShowedPanel(_) => "show_panel",
            DispatchOutcome::ComingSoon => "coming_soon",
            DispatchOutcome::Navigated(_) => "navigated",
            DispatchOutcome::Ignored => "ignored",
        }
    }
}

/// Menu item id → destination URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTable {
    entries: HashMap<String, String>,
}

impl UrlTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins
    pub fn insert(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.entries.insert(key.into(), url.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move every entry of `other` into this table, overwriting on conflict
    pub fn merge(&mut self, other: UrlTable) {
        self.entries.extend(other.entries);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UrlTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = UrlTable::new();
        for (key, url) in iter {
            table.insert(key, url);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions() {
        assert_eq!(
            MenuAction::from_item("MY_MUSIC"),
            Some(MenuAction::ShowPanel(Panel::Music))
        );
        assert_eq!(
            MenuAction::from_item("RADIO"),
            Some(MenuAction::ShowPanel(Panel::Radio))
        );
        assert_eq!(MenuAction::from_item("MUSIC_ON_DEMAND"), Some(MenuAction::ComingSoon));
        assert_eq!(MenuAction::from_item("OTHER_SERVICES"), Some(MenuAction::ComingSoon));
        assert_eq!(MenuAction::from_item("SETTINGS"), None);
        // Ids are case-sensitive
        assert_eq!(MenuAction::from_item("radio"), None);
    }

    #[test]
    fn test_url_table_last_write_wins() {
        let mut table = UrlTable::new();
        table.insert("SETTINGS", "settings/index.html");
        table.insert("SETTINGS", "settings/basic.html");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("SETTINGS"), Some("settings/basic.html"));
        assert_eq!(table.get("HELP"), None);
    }

    #[test]
    fn test_url_table_merge_overwrites() {
        let mut table: UrlTable = [("A", "a.html"), ("B", "b.html")].into_iter().collect();
        let newer: UrlTable = [("B", "b2.html"), ("C", "c.html")].into_iter().collect();

        table.merge(newer);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("B"), Some("b2.html"));
    }

    #[test]
    fn test_url_table_deserializes_from_json_object() {
        let table: UrlTable =
            serde_json::from_str(r#"{"FAVORITES":"favorites.html"}"#).unwrap();
        assert_eq!(table.get("FAVORITES"), Some("favorites.html"));
    }
}
