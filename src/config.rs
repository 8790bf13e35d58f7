//! Runtime Configuration
//!
//! The backend base URL is resolved once at startup, in order:
//! 1. `<meta name="rms:api-url" content="...">` in `index.html`
//! 2. `window.__RMS_CONFIG__ = { api_url: "..." }`
//! 3. `RMS_API_URL` at compile time
//! 4. `http://localhost:8000`

use std::sync::OnceLock;

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};

const DEFAULT_API_URL: &str = "http://localhost:8000";
const META_API_URL: &str = "rms:api-url";
const WINDOW_CONFIG_KEY: &str = "__RMS_CONFIG__";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin without trailing slash
    pub api_base_url: String,
}

#[derive(Deserialize)]
struct WindowConfig {
    api_url: Option<String>,
}

impl AppConfig {
    fn with_base(url: &str) -> Self {
        Self {
            api_base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read configuration from the page
    pub fn from_document() -> Self {
        let url = meta_api_url()
            .or_else(window_api_url)
            .or_else(|| option_env!("RMS_API_URL").map(str::to_string))
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::with_base(&url)
    }

    /// Absolute URL for an API path such as `/api/orders`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base(DEFAULT_API_URL)
    }
}

/// Resolve and store the configuration. Later calls keep the first value.
pub fn init() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_document)
}

pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

fn meta_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", META_API_URL);
    let meta = document
        .query_selector(&selector)
        .ok()??
        .dyn_into::<web_sys::HtmlMetaElement>()
        .ok()?;
    Some(meta.content())
}

fn window_api_url() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<WindowConfig>(value) {
        Ok(cfg) => cfg.api_url,
        Err(e) => {
            log::warn!("[CONFIG] Ignoring malformed {}: {}", WINDOW_CONFIG_KEY, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let cfg = AppConfig::with_base("https://api.example.com/ ");
        assert_eq!(cfg.api_base_url, "https://api.example.com");
        assert_eq!(cfg.endpoint("/api/orders"), "https://api.example.com/api/orders");
    }

    #[test]
    fn test_default() {
        assert_eq!(AppConfig::default().endpoint("/auth/users/me"), "http://localhost:8000/auth/users/me");
    }
}
