//! Backend Bridge Wrappers
//!
//! Frontend bindings to the managed backend, organized by collection.
//! The host page installs a `window.__CRM_BACKEND__` bridge that fronts
//! the document store, the auth provider, and the activity log.

mod activity;
mod auth;
mod leads;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__CRM_BACKEND__"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Human-readable text for a rejected bridge call
fn js_error_text(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// Re-export all public items
pub use activity::*;
pub use auth::*;
pub use leads::*;
