//! Application Context
//!
//! Shared state provided via Leptos Context API.

use crate::leads::LeadsController;
use crate::models::SessionUser;
use crate::services::{BackendActivity, BackendLeads};
use crate::store::Toasts;

/// Controller wired to the production backend bridge
pub type AppController = LeadsController<BackendLeads, BackendActivity>;

/// App-wide state provided via context
#[derive(Clone)]
pub struct AppContext {
    pub controller: AppController,
    pub toasts: Toasts,
    pub user: SessionUser,
}

impl AppContext {
    pub fn new(controller: AppController, toasts: Toasts, user: SessionUser) -> Self {
        Self { controller, toasts, user }
    }
}
