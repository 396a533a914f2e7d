//! UI State Store
//!
//! Owner-free shared signals for transient UI state (toast notices).
//! `ArcRwSignal` keeps these constructible outside a reactive owner, so
//! the controller layer can be exercised in plain tests.

use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

/// Transient user-facing notice
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

pub type Toasts = ArcRwSignal<Vec<Toast>>;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Append a toast, returning its id for later dismissal
pub fn push_toast(toasts: &Toasts, kind: ToastKind, message: impl Into<String>) -> u64 {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    let toast = Toast { id, kind, message: message.into() };
    toasts.update(|list| list.push(toast));
    id
}

pub fn dismiss_toast(toasts: &Toasts, id: u64) {
    toasts.update(|list| list.retain(|t| t.id != id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let toasts: Toasts = ArcRwSignal::new(Vec::new());
        let a = push_toast(&toasts, ToastKind::Error, "failed");
        let b = push_toast(&toasts, ToastKind::Success, "done");
        assert_ne!(a, b);
        assert_eq!(toasts.get_untracked().len(), 2);

        dismiss_toast(&toasts, a);
        let remaining = toasts.get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "done");
    }
}
