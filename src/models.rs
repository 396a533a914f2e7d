//! Frontend Models
//!
//! Data structures matching the remote backend documents.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Pipeline stage. Doubles as the remote `status` field and the board
/// column id, so a task can never point at an unknown column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    New,
    Contacted,
    Proposal,
    Closed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::New => "new",
            Stage::Contacted => "contacted",
            Stage::Proposal => "proposal",
            Stage::Closed => "closed",
        }
    }

    /// Column header label
    pub fn title(&self) -> &'static str {
        match self {
            Stage::New => "New Leads",
            Stage::Contacted => "Contacted",
            Stage::Proposal => "Proposal Sent",
            Stage::Closed => "Closed",
        }
    }

    pub fn from_str(s: &str) -> Option<Stage> {
        match s {
            "new" => Some(Stage::New),
            "contacted" => Some(Stage::Contacted),
            "proposal" => Some(Stage::Proposal),
            "closed" => Some(Stage::Closed),
            _ => None,
        }
    }
}

/// Server timestamp wire shape (seconds + nanoseconds since epoch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanoseconds: u32,
}

impl Timestamp {
    /// Best-effort client-side timestamp for optimistic inserts.
    /// The authoritative value is always server-assigned on write.
    pub fn now() -> Timestamp {
        let now = Utc::now();
        Timestamp {
            seconds: now.timestamp(),
            nanoseconds: now.timestamp_subsec_nanos(),
        }
    }

    pub fn millis(&self) -> i64 {
        self.seconds * 1000 + i64::from(self.nanoseconds) / 1_000_000
    }
}

/// Lead document (remote-owned record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub user_id: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub value: f64,
    pub status: Stage,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields the user supplies when creating a lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadInput {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub value: f64,
    pub status: Stage,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update for a lead edit; only set fields are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Lead {
    /// Build the optimistic stand-in inserted locally while the remote
    /// create is in flight. Replaced by the authoritative document on the
    /// next reconciliation pass.
    pub fn provisional(input: &LeadInput, user_id: &str, now: Timestamp) -> Lead {
        Lead {
            id: format!("temp-{}", now.millis()),
            user_id: user_id.to_string(),
            company_name: input.company_name.clone(),
            contact_name: input.contact_name.clone(),
            email: input.email.clone(),
            value: input.value,
            status: input.status,
            tags: input.tags.clone(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: &LeadPatch) {
        if let Some(company_name) = &patch.company_name {
            self.company_name = company_name.clone();
        }
        if let Some(contact_name) = &patch.contact_name {
            self.contact_name = contact_name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
    }
}

/// Signed-in user as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub uid: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
}

/// Semantic action recorded in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Created,
    Moved,
    Updated,
    Closed,
    Deleted,
}

/// Append-only activity log document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub lead_id: String,
    pub user_id: String,
    pub user_name: String,
    pub action: AuditAction,
    pub details: String,
    pub timestamp: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_round_trip() {
        for stage in [Stage::New, Stage::Contacted, Stage::Proposal, Stage::Closed] {
            assert_eq!(Stage::from_str(stage.as_str()), Some(stage));
        }
        assert_eq!(Stage::from_str("archived"), None);
    }

    #[test]
    fn test_stage_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Stage::Proposal).unwrap(), "\"proposal\"");
        let parsed: Stage = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(parsed, Stage::Closed);
    }

    #[test]
    fn test_timestamp_ordering() {
        let earlier = Timestamp { seconds: 100, nanoseconds: 0 };
        let later = Timestamp { seconds: 100, nanoseconds: 5 };
        assert!(earlier < later);
        assert!(later < Timestamp { seconds: 101, nanoseconds: 0 });
    }

    #[test]
    fn test_provisional_lead_gets_temp_id() {
        let input = LeadInput {
            company_name: "Acme".to_string(),
            contact_name: "Jo".to_string(),
            email: "jo@acme.test".to_string(),
            value: 1200.0,
            status: Stage::New,
            tags: vec!["hot".to_string()],
        };
        let now = Timestamp { seconds: 1_700_000_000, nanoseconds: 0 };
        let lead = Lead::provisional(&input, "u1", now);
        assert!(lead.id.starts_with("temp-"));
        assert_eq!(lead.user_id, "u1");
        assert_eq!(lead.status, Stage::New);
        assert_eq!(lead.created_at, now);
        assert_eq!(lead.tags, vec!["hot".to_string()]);
    }

    #[test]
    fn test_apply_patch_only_touches_set_fields() {
        let input = LeadInput {
            company_name: "Acme".to_string(),
            contact_name: "Jo".to_string(),
            email: "jo@acme.test".to_string(),
            value: 1200.0,
            status: Stage::Contacted,
            tags: vec![],
        };
        let mut lead = Lead::provisional(&input, "u1", Timestamp { seconds: 1, nanoseconds: 0 });

        lead.apply_patch(&LeadPatch {
            value: Some(5000.0),
            notes: Some("called twice".to_string()),
            ..Default::default()
        });

        assert_eq!(lead.value, 5000.0);
        assert_eq!(lead.notes, "called twice");
        assert_eq!(lead.company_name, "Acme");
        assert_eq!(lead.status, Stage::Contacted);
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = LeadPatch { value: Some(10.0), ..Default::default() };
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{\"value\":10.0}");
    }

    #[test]
    fn test_audit_action_wire_format() {
        assert_eq!(serde_json::to_string(&AuditAction::Moved).unwrap(), "\"MOVED\"");
    }
}
