//! Page configuration
//!
//! The server embeds a JSON document in the page; every field is optional and
//! falls back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::domain::models::{Panel, UrlTable};
use crate::shared::Result;
use crate::shared::constants::{
    DEFAULT_MIN_QUERY_LEN, DEFAULT_SEARCH_ENDPOINT, DEFAULT_SECTION_MARGIN_PX,
    DEFAULT_VALIDATION_DELAY_MS,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Player id sent with every search
    pub player: String,
    pub search_endpoint: String,
    /// Typing pause before the live search runs
    pub validation_delay_ms: u32,
    /// Queries must be strictly longer than this, in UTF-16 units after trimming
    pub min_query_len: usize,
    pub section_margin_px: f64,
    pub items: Vec<MenuItemConfig>,
}

/// One clickable entry of the home menu
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MenuItemConfig {
    pub id: String,
    pub label: String,
    pub section: Panel,
    #[serde(default)]
    pub url: Option<String>,
}

impl MenuItemConfig {
    fn new(id: &str, label: &str, section: Panel, url: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            section,
            url: url.map(str::to_string),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            player: String::new(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            validation_delay_ms: DEFAULT_VALIDATION_DELAY_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            section_margin_px: DEFAULT_SECTION_MARGIN_PX,
            items: default_items(),
        }
    }
}

fn default_items() -> Vec<MenuItemConfig> {
    vec![
        MenuItemConfig::new("MY_MUSIC", "My Music", Panel::Main, None),
        MenuItemConfig::new("RADIO", "Internet Radio", Panel::Main, None),
        MenuItemConfig::new("MUSIC_ON_DEMAND", "Music on Demand", Panel::Main, None),
        MenuItemConfig::new("OTHER_SERVICES", "Other Services", Panel::Main, None),
        MenuItemConfig::new("SETTINGS", "Settings", Panel::Main, Some("settings/index.html")),
        MenuItemConfig::new("BROWSE_BY_ARTIST", "Artists", Panel::Music, Some("browsedb.html?hierarchy=contributor,album,track&level=0")),
        MenuItemConfig::new("BROWSE_BY_ALBUM", "Albums", Panel::Music, Some("browsedb.html?hierarchy=album,track&level=0")),
        MenuItemConfig::new("BROWSE_BY_GENRE", "Genres", Panel::Music, Some("browsedb.html?hierarchy=genre,contributor,album,track&level=0")),
        MenuItemConfig::new("BROWSE_MUSIC_FOLDER", "Music Folder", Panel::Music, Some("browsetree.html")),
        MenuItemConfig::new("SAVED_PLAYLISTS", "Playlists", Panel::Music, Some("browsedb.html?hierarchy=playlist,playlistTrack&level=0")),
        MenuItemConfig::new("RADIO_FAVORITES", "Favorites", Panel::Radio, Some("plugins/Favorites/favorites_list.html")),
    ]
}

impl MenuConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config from the embedded document, or defaults when it is absent or broken
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                tracing::warn!("Invalid home menu config, using defaults: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// JSON for the page's config script. `<` is escaped so no value can close
    /// the surrounding `<script>` element.
    pub fn to_embedded_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }

    /// URLs declared on menu items
    pub fn url_table(&self) -> UrlTable {
        self.items
            .iter()
            .filter_map(|item| item.url.as_ref().map(|url| (item.id.clone(), url.clone())))
            .collect()
    }

    pub fn items_in(&self, panel: Panel) -> impl Iterator<Item = &MenuItemConfig> {
        self.items.iter().filter(move |item| item.section == panel)
    }
}
