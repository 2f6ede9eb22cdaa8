use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    #[error("JavaScript error: {0}")]
    JsError(String),

    #[error("Search request failed: {0}")]
    SearchRequest(String),

    #[error("HTTP {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },

    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MenuError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MenuError::JsError(format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for MenuError {
    fn from(err: gloo_net::Error) -> Self {
        MenuError::SearchRequest(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
