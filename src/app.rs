//! Leadboard Frontend App
//!
//! Session bootstrap plus the main workspace layout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ActivityFeed, KanbanBoard, LeadForm, StatsGrid, ToastTray};
use crate::context::AppContext;
use crate::leads::LeadsController;
use crate::models::SessionUser;
use crate::services::{self, BackendActivity, BackendLeads};
use crate::store::Toasts;

#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal(None::<SessionUser>);
    let (session_checked, set_session_checked) = signal(false);

    // Resolve the session on mount
    Effect::new(move |_| {
        spawn_local(async move {
            set_session.set(services::current_user().await);
            set_session_checked.set(true);
        });
    });

    view! {
        <div class="app-layout">
            {move || {
                if !session_checked.get() {
                    return view! { <p class="session-pending">"Signing in..."</p> }.into_any();
                }
                match session.get() {
                    Some(user) => view! { <Workspace user=user /> }.into_any(),
                    None => view! { <p class="session-missing">"Not signed in"</p> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn Workspace(user: SessionUser) -> impl IntoView {
    let toasts: Toasts = ArcRwSignal::new(Vec::new());
    let controller = LeadsController::new(
        BackendLeads,
        BackendActivity,
        user.uid.clone(),
        toasts.clone(),
    );
    provide_context(AppContext::new(controller.clone(), toasts, user.clone()));

    // Initial load of the lead list
    Effect::new(move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            let _ = controller.load().await;
        });
    });

    let display_name = if user.display_name.is_empty() {
        "Unknown User".to_string()
    } else {
        user.display_name.clone()
    };

    view! {
        <header class="app-header">
            <h1>"Leadboard"</h1>
            <div class="header-session">
                <span class="user-name">{display_name}</span>
                <button
                    class="sign-out-btn"
                    on:click=move |_| spawn_local(services::sign_out())
                >
                    "Sign out"
                </button>
            </div>
        </header>

        <main class="main-content">
            <StatsGrid />
            <LeadForm />
            <KanbanBoard />
        </main>

        <aside class="side-panel">
            <ActivityFeed />
        </aside>

        <ToastTray />
    }
}
