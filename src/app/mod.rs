pub mod components;
pub mod pages;

use dioxus::prelude::*;

use crate::config::MenuConfig;
pub use pages::home::HomePage;

/// Root component: renders the home page, then hands the rendered DOM to the
/// menu controller.
#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let mount_config = config.clone();

    use_effect(move || mount_menu(&mount_config));

    rsx! {
        document::Stylesheet { href: asset!("/assets/dist/bundle.css") }
        HomePage { config }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> MenuConfig {
    MenuConfig::from_json_or_default(crate::menu::web::embedded_config().as_deref())
}

// Server side: config comes from the environment
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> MenuConfig {
    MenuConfig::from_json_or_default(std::env::var("HOME_MENU_CONFIG").ok().as_deref())
}

#[cfg(target_arch = "wasm32")]
fn mount_menu(config: &MenuConfig) {
    if let Err(e) = crate::menu::web::mount(config.clone()) {
        tracing::error!("Failed to mount home menu: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mount_menu(_config: &MenuConfig) {
    // No DOM to bind outside the browser
}
