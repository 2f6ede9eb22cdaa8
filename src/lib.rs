// Public API exports (shared between client and server)
pub mod domain;
pub mod shared;
pub mod config;

// Page controller, with the browser bindings behind wasm32
pub mod menu;

// Dioxus app rendering the home page
pub mod app;
