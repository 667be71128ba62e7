//! Loads [`AppConfig`] from the page.
//!
//! `index.html` may embed a JSON document:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "api_base_url": "http://localhost:8080/api" }
//! </script>
//! ```
//!
//! Without one, or when it does not parse, the defaults apply.

use common::config::AppConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

pub fn load() -> AppConfig {
    let Some(document) = read_document() else {
        return AppConfig::default();
    };
    match AppConfig::from_json(&document) {
        Ok(config) => config,
        Err(err) => {
            // The logger is not installed yet, so report straight to the console.
            gloo_console::warn!(format!("ignoring #{CONFIG_ELEMENT_ID}: {err}"));
            AppConfig::default()
        }
    }
}

fn read_document() -> Option<String> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?;
    let text = element.text_content()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
