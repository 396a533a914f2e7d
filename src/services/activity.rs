//! Activity Log Client
//!
//! Write side is fire-and-forget: the append runs detached and failures
//! are logged, never surfaced. Read side degrades to an empty feed.

use leptos::task::spawn_local;
use serde::Serialize;

use super::{invoke, js_error_text};
use crate::leads::ActivitySink;
use crate::models::{AuditAction, AuditEntry};

#[derive(Serialize)]
struct LogActionArgs<'a> {
    #[serde(rename = "leadId")]
    lead_id: &'a str,
    action: AuditAction,
    details: &'a str,
}

#[derive(Serialize)]
struct RecentLogsArgs {
    limit: u32,
}

/// Client for the append-only activity log collection. The backend stamps
/// the entry with the current user and a server timestamp.
#[derive(Clone, Copy, Default)]
pub struct BackendActivity;

impl ActivitySink for BackendActivity {
    fn record(&self, lead_id: &str, action: AuditAction, details: &str) {
        let lead_id = lead_id.to_string();
        let details = details.to_string();
        spawn_local(async move {
            let args = LogActionArgs { lead_id: &lead_id, action, details: &details };
            let args = match serde_wasm_bindgen::to_value(&args) {
                Ok(v) => v,
                Err(err) => {
                    web_sys::console::warn_1(&format!("Failed to encode log entry: {err}").into());
                    return;
                }
            };
            if let Err(err) = invoke("log_action", args).await {
                web_sys::console::warn_1(
                    &format!("Failed to log action: {}", js_error_text(err)).into(),
                );
            }
        });
    }

    async fn recent(&self, limit: u32) -> Vec<AuditEntry> {
        let args = match serde_wasm_bindgen::to_value(&RecentLogsArgs { limit }) {
            Ok(v) => v,
            Err(_) => return Vec::new(),
        };
        match invoke("recent_logs", args).await {
            Ok(result) => serde_wasm_bindgen::from_value(result).unwrap_or_default(),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("Failed to fetch logs: {}", js_error_text(err)).into(),
                );
                Vec::new()
            }
        }
    }
}
