//! Lead Store Client
//!
//! Single-round-trip calls against the remote lead collection. Server
//! timestamps are assigned on the backend side; this client never
//! fabricates them.

use serde::Serialize;

use super::{invoke, js_error_text};
use crate::error::RemoteError;
use crate::leads::LeadStore;
use crate::models::{Lead, LeadInput, LeadPatch, Stage};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct FetchLeadsArgs<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
}

#[derive(Serialize)]
struct AddLeadArgs<'a> {
    lead: &'a LeadInput,
    #[serde(rename = "userId")]
    user_id: &'a str,
}

#[derive(Serialize)]
struct SetStatusArgs<'a> {
    #[serde(rename = "leadId")]
    lead_id: &'a str,
    status: Stage,
}

#[derive(Serialize)]
struct UpdateLeadArgs<'a> {
    #[serde(rename = "leadId")]
    lead_id: &'a str,
    data: &'a LeadPatch,
}

#[derive(Serialize)]
struct LeadIdArgs<'a> {
    #[serde(rename = "leadId")]
    lead_id: &'a str,
}

// ========================
// Client
// ========================

/// Thin typed access to the lead collection
#[derive(Clone, Copy, Default)]
pub struct BackendLeads;

impl LeadStore for BackendLeads {
    async fn fetch_all(&self, user_id: &str) -> Result<Vec<Lead>, RemoteError> {
        let args = serde_wasm_bindgen::to_value(&FetchLeadsArgs { user_id })
            .map_err(|e| RemoteError::Read(e.to_string()))?;
        let result = invoke("fetch_leads", args)
            .await
            .map_err(|e| RemoteError::Read(js_error_text(e)))?;
        serde_wasm_bindgen::from_value(result).map_err(|e| RemoteError::Read(e.to_string()))
    }

    async fn create(&self, input: &LeadInput, user_id: &str) -> Result<String, RemoteError> {
        let args = serde_wasm_bindgen::to_value(&AddLeadArgs { lead: input, user_id })
            .map_err(|e| RemoteError::Write(e.to_string()))?;
        let result = invoke("add_lead", args)
            .await
            .map_err(|e| RemoteError::Write(js_error_text(e)))?;
        serde_wasm_bindgen::from_value(result).map_err(|e| RemoteError::Write(e.to_string()))
    }

    async fn set_status(&self, lead_id: &str, status: Stage) -> Result<(), RemoteError> {
        let args = serde_wasm_bindgen::to_value(&SetStatusArgs { lead_id, status })
            .map_err(|e| RemoteError::Write(e.to_string()))?;
        invoke("update_lead_status", args)
            .await
            .map_err(|e| RemoteError::Write(js_error_text(e)))?;
        Ok(())
    }

    async fn update(&self, lead_id: &str, patch: &LeadPatch) -> Result<(), RemoteError> {
        let args = serde_wasm_bindgen::to_value(&UpdateLeadArgs { lead_id, data: patch })
            .map_err(|e| RemoteError::Write(e.to_string()))?;
        invoke("update_lead", args)
            .await
            .map_err(|e| RemoteError::Write(js_error_text(e)))?;
        Ok(())
    }

    async fn delete(&self, lead_id: &str) -> Result<(), RemoteError> {
        let args = serde_wasm_bindgen::to_value(&LeadIdArgs { lead_id })
            .map_err(|e| RemoteError::Write(e.to_string()))?;
        invoke("delete_lead", args)
            .await
            .map_err(|e| RemoteError::Write(js_error_text(e)))?;
        Ok(())
    }
}
