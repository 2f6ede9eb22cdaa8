use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::MenuError;
use crate::shared::constants::{CRUMBLIST_SUFFIX, SECTION_SUFFIX};

/// Mutually exclusive sections of the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Main,
    Music,
    Radio,
    Search,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Main, Panel::Music, Panel::Radio, Panel::Search];

    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Main => "main",
            Panel::Music => "music",
            Panel::Radio => "radio",
            Panel::Search => "search",
        }
    }

    pub fn section_id(&self) -> String {
        section_id(self.as_str())
    }

    pub fn crumblist_id(&self) -> String {
        crumblist_id(self.as_str())
    }

    /// Whether the live-search box belongs on this panel
    pub fn shows_live_search(&self) -> bool {
        matches!(self, Panel::Music | Panel::Search)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Panel {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Panel::Main),
            "music" => Ok(Panel::Music),
            "radio" => Ok(Panel::Radio),
            "search" => Ok(Panel::Search),
            other => Err(MenuError::UnknownPanel(other.to_string())),
        }
    }
}

/// Section element id for any panel name
pub fn section_id(panel: &str) -> String {
    format!("{}{}", panel, SECTION_SUFFIX)
}

/// Crumblist element id for any panel name
pub fn crumblist_id(panel: &str) -> String {
    format!("{}{}", panel, CRUMBLIST_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids_follow_naming_convention() {
        assert_eq!(Panel::Main.section_id(), "mainMenu");
        assert_eq!(Panel::Radio.crumblist_id(), "radioCrumblist");
        assert_eq!(section_id("anything"), "anythingMenu");
    }

    #[test]
    fn test_live_search_panels() {
        assert!(Panel::Music.shows_live_search());
        assert!(Panel::Search.shows_live_search());
        assert!(!Panel::Main.shows_live_search());
        assert!(!Panel::Radio.shows_live_search());
    }

    #[test]
    fn test_parse_unknown_panel() {
        assert_eq!("music".parse::<Panel>().unwrap(), Panel::Music);
        assert!(matches!(
            "podcasts".parse::<Panel>(),
            Err(MenuError::UnknownPanel(name)) if name == "podcasts"
        ));
    }
}
