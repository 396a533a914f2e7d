//! Activity Feed Component
//!
//! Recent audit entries for the signed-in user. Display-only; a failed
//! read simply shows an empty feed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::leads::ActivitySink;
use crate::models::{AuditAction, AuditEntry};

const FEED_LIMIT: u32 = 20;

/// Stable `<For>` key. Entries without a document id fall back to
/// timestamp plus lead id; the timestamp alone can collide when two
/// mutations land in the same millisecond.
fn entry_key(entry: &AuditEntry) -> String {
    entry
        .id
        .clone()
        .unwrap_or_else(|| format!("{}-{}", entry.timestamp.millis(), entry.lead_id))
}

fn action_label(action: AuditAction) -> &'static str {
    match action {
        AuditAction::Created => "created",
        AuditAction::Moved => "moved",
        AuditAction::Updated => "updated",
        AuditAction::Closed => "closed",
        AuditAction::Deleted => "deleted",
    }
}

#[component]
pub fn ActivityFeed() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let leads = ctx.controller.leads();
    let activity = *ctx.controller.activity();

    let (entries, set_entries) = signal(Vec::<AuditEntry>::new());

    // Refresh whenever the lead list changes (every mutation settles with
    // a reconcile, so this tracks completed actions)
    Effect::new(move |_| {
        let _ = leads.get();
        spawn_local(async move {
            set_entries.set(activity.recent(FEED_LIMIT).await);
        });
    });

    view! {
        <div class="activity-feed">
            <h3>"Recent Activity"</h3>
            <For
                each=move || entries.get()
                key=entry_key
                children=move |entry| {
                    view! {
                        <div class="activity-row">
                            <span class="activity-action">{action_label(entry.action)}</span>
                            <span class="activity-details">{entry.details.clone()}</span>
                        </div>
                    }
                }
            />
            {move || {
                entries.get().is_empty().then(|| view! { <p class="activity-empty">"No activity yet"</p> })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timestamp;

    fn entry(id: Option<&str>, lead_id: &str, stamp: Timestamp) -> AuditEntry {
        AuditEntry {
            id: id.map(str::to_string),
            lead_id: lead_id.to_string(),
            user_id: "u1".to_string(),
            user_name: "Sam".to_string(),
            action: AuditAction::Moved,
            details: "Moved to CLOSED".to_string(),
            timestamp: stamp,
        }
    }

    #[test]
    fn test_entry_key_prefers_document_id() {
        let stamp = Timestamp { seconds: 10, nanoseconds: 0 };
        assert_eq!(entry_key(&entry(Some("log-1"), "l1", stamp)), "log-1");
    }

    #[test]
    fn test_entry_keys_distinct_within_same_millisecond() {
        let stamp = Timestamp { seconds: 10, nanoseconds: 0 };
        let a = entry_key(&entry(None, "l1", stamp));
        let b = entry_key(&entry(None, "l2", stamp));
        assert_ne!(a, b);
    }
}
