//! Toast Tray Component
//!
//! Transient notices (mutation failures, mostly). Each toast dismisses
//! itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{dismiss_toast, ToastKind};

const TOAST_MILLIS: u32 = 4000;

#[component]
pub fn ToastTray() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = ctx.toasts.clone();

    view! {
        <div class="toast-tray">
            <For
                each={
                    let toasts = toasts.clone();
                    move || toasts.get()
                }
                key=|toast| toast.id
                children=move |toast| {
                    let dismiss_in = toasts.clone();
                    let toast_id = toast.id;
                    spawn_local(async move {
                        TimeoutFuture::new(TOAST_MILLIS).await;
                        dismiss_toast(&dismiss_in, toast_id);
                    });

                    let kind_class = match toast.kind {
                        ToastKind::Error => "toast error",
                        ToastKind::Success => "toast success",
                    };
                    view! { <div class=kind_class>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
