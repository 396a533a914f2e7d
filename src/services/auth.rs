//! Session Commands
//!
//! Interface to the external auth provider. Sign-in UI lives on the
//! provider's side; this app only reads the session and can end it.

use wasm_bindgen::JsValue;

use super::invoke;
use crate::models::SessionUser;

/// Currently signed-in user, if any
pub async fn current_user() -> Option<SessionUser> {
    match invoke("current_user", JsValue::NULL).await {
        Ok(result) => serde_wasm_bindgen::from_value::<Option<SessionUser>>(result).unwrap_or(None),
        Err(_) => None,
    }
}

pub async fn sign_out() {
    let _ = invoke("sign_out", JsValue::NULL).await;
}
