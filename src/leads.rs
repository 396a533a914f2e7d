//! Optimistic Mutation Layer
//!
//! Every lead mutation follows the same transactional sequence:
//! snapshot -> synchronous local apply -> remote call ->
//! (audit on success | rollback to the exact snapshot + notice on failure)
//! -> unconditional reconcile against the authoritative list.
//!
//! The local apply runs before the entry point returns, so no other event
//! can observe a half-applied mutation. Each in-flight mutation carries its
//! own snapshot; a rollback may discard a concurrently applied mutation,
//! which the reconcile pass then repairs from remote truth.

use std::future::Future;

use leptos::prelude::*;

use crate::error::RemoteError;
use crate::models::{AuditAction, AuditEntry, Lead, LeadInput, LeadPatch, Stage, Timestamp};
use crate::store::{push_toast, ToastKind, Toasts};

/// Typed access to the remote lead collection. One round trip per call,
/// no caching, no retries.
#[allow(async_fn_in_trait)]
pub trait LeadStore {
    /// All leads owned by `user_id`, newest-created first
    async fn fetch_all(&self, user_id: &str) -> Result<Vec<Lead>, RemoteError>;
    /// Returns the server-assigned document id
    async fn create(&self, input: &LeadInput, user_id: &str) -> Result<String, RemoteError>;
    async fn set_status(&self, lead_id: &str, status: Stage) -> Result<(), RemoteError>;
    async fn update(&self, lead_id: &str, patch: &LeadPatch) -> Result<(), RemoteError>;
    async fn delete(&self, lead_id: &str) -> Result<(), RemoteError>;
}

/// Append-only activity log sink.
#[allow(async_fn_in_trait)]
pub trait ActivitySink {
    /// Best-effort append. Implementations must not block the caller and
    /// must swallow failures; a lost log entry never affects the mutation
    /// it describes.
    fn record(&self, lead_id: &str, action: AuditAction, details: &str);
    /// Most-recent-first entries for the current user; empty on failure
    async fn recent(&self, limit: u32) -> Vec<AuditEntry>;
}

/// Audit event emitted after a mutation is accepted remotely
struct AuditEvent {
    lead_id: String,
    action: AuditAction,
    details: String,
}

// ========================
// Local List Helpers
// ========================

/// Insert preserving the newest-created-first ordering invariant
pub fn insert_newest_first(leads: &mut Vec<Lead>, lead: Lead) {
    leads.push(lead);
    leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub fn apply_status(leads: &mut [Lead], lead_id: &str, status: Stage) {
    if let Some(lead) = leads.iter_mut().find(|l| l.id == lead_id) {
        lead.status = status;
    }
}

pub fn apply_patch(leads: &mut [Lead], lead_id: &str, patch: &LeadPatch) {
    if let Some(lead) = leads.iter_mut().find(|l| l.id == lead_id) {
        lead.apply_patch(patch);
    }
}

pub fn remove_lead(leads: &mut Vec<Lead>, lead_id: &str) {
    leads.retain(|l| l.id != lead_id);
}

// ========================
// Controller
// ========================

/// Owns the shared local lead list and runs every mutation through the
/// snapshot/apply/rollback/reconcile sequence. Store and sink are injected
/// so the whole layer runs against mocks in tests.
#[derive(Clone)]
pub struct LeadsController<S, A> {
    store: S,
    activity: A,
    user_id: String,
    leads: ArcRwSignal<Vec<Lead>>,
    toasts: Toasts,
}

impl<S, A> LeadsController<S, A>
where
    S: LeadStore + Clone + 'static,
    A: ActivitySink + Clone + 'static,
{
    pub fn new(store: S, activity: A, user_id: impl Into<String>, toasts: Toasts) -> Self {
        LeadsController {
            store,
            activity,
            user_id: user_id.into(),
            leads: ArcRwSignal::new(Vec::new()),
            toasts,
        }
    }

    /// Handle to the shared local list (newest-first)
    pub fn leads(&self) -> ArcRwSignal<Vec<Lead>> {
        self.leads.clone()
    }

    pub fn activity(&self) -> &A {
        &self.activity
    }

    /// Initial fetch. A failed read leaves local state untouched and only
    /// surfaces a transient notice.
    pub async fn load(&self) -> Result<(), RemoteError> {
        match self.store.fetch_all(&self.user_id).await {
            Ok(fresh) => {
                self.leads.set(fresh);
                Ok(())
            }
            Err(err) => {
                log::warn!("lead fetch failed: {err}");
                push_toast(&self.toasts, ToastKind::Error, "Could not load leads");
                Err(err)
            }
        }
    }

    /// The transactional primitive shared by all mutation kinds.
    /// Applies locally before returning; the returned future runs the
    /// remote phase and must be spawned (or awaited) by the caller.
    fn run<Fut>(
        &self,
        apply: impl FnOnce(&mut Vec<Lead>),
        failure_notice: &'static str,
        remote: Fut,
    ) -> impl Future<Output = ()> + 'static
    where
        Fut: Future<Output = Result<Option<AuditEvent>, RemoteError>> + 'static,
    {
        let snapshot = self.leads.get_untracked();
        self.leads.update(apply);

        let this = self.clone();
        async move {
            match remote.await {
                Ok(audit) => {
                    if let Some(event) = audit {
                        this.activity.record(&event.lead_id, event.action, &event.details);
                    }
                }
                Err(err) => {
                    log::warn!("lead mutation failed, rolling back: {err}");
                    // Full replace with the pre-mutation snapshot; never a merge
                    this.leads.set(snapshot);
                    push_toast(&this.toasts, ToastKind::Error, failure_notice);
                }
            }
            this.reconcile().await;
        }
    }

    pub fn create(&self, input: LeadInput) -> impl Future<Output = ()> + 'static {
        let provisional = Lead::provisional(&input, &self.user_id, Timestamp::now());
        let store = self.store.clone();
        let user_id = self.user_id.clone();
        let company = input.company_name.clone();
        self.run(
            move |leads| insert_newest_first(leads, provisional),
            "Could not create lead",
            async move {
                let id = store.create(&input, &user_id).await?;
                Ok(Some(AuditEvent {
                    lead_id: id,
                    action: AuditAction::Created,
                    details: format!("Created new lead: {company}"),
                }))
            },
        )
    }

    pub fn set_status(&self, lead_id: String, status: Stage) -> impl Future<Output = ()> + 'static {
        let store = self.store.clone();
        let apply_id = lead_id.clone();
        self.run(
            move |leads| apply_status(leads, &apply_id, status),
            "Could not move lead",
            async move {
                store.set_status(&lead_id, status).await?;
                Ok(Some(AuditEvent {
                    lead_id,
                    action: AuditAction::Moved,
                    details: format!("Moved to {}", status.as_str().to_uppercase()),
                }))
            },
        )
    }

    pub fn update(&self, lead_id: String, patch: LeadPatch) -> impl Future<Output = ()> + 'static {
        let store = self.store.clone();
        let apply_id = lead_id.clone();
        let apply_patch_fields = patch.clone();
        let subject = patch.company_name.clone().unwrap_or_else(|| "lead".to_string());
        self.run(
            move |leads| apply_patch(leads, &apply_id, &apply_patch_fields),
            "Could not update lead",
            async move {
                store.update(&lead_id, &patch).await?;
                Ok(Some(AuditEvent {
                    lead_id,
                    action: AuditAction::Updated,
                    details: format!("Updated details for {subject}"),
                }))
            },
        )
    }

    pub fn delete(&self, lead_id: String) -> impl Future<Output = ()> + 'static {
        let store = self.store.clone();
        let apply_id = lead_id.clone();
        self.run(
            move |leads| remove_lead(leads, &apply_id),
            "Could not delete lead",
            async move {
                store.delete(&lead_id).await?;
                Ok(Some(AuditEvent {
                    lead_id,
                    action: AuditAction::Deleted,
                    details: "Deleted lead".to_string(),
                }))
            },
        )
    }

    /// Converge local state with remote truth. Runs after every mutation
    /// settles, success or failure; this is what bounds divergence from
    /// optimistic artifacts. A failed read keeps the local list.
    pub async fn reconcile(&self) {
        match self.store.fetch_all(&self.user_id).await {
            Ok(fresh) => self.leads.set(fresh),
            Err(err) => log::warn!("reconcile fetch failed, keeping local state: {err}"),
        }
    }
}
