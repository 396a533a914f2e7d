//! New Lead Form Component
//!
//! Minimal create form; the optimistic insert makes the new card appear
//! at the head of the list immediately.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::input_value;
use crate::context::AppContext;
use crate::models::{LeadInput, Stage};

#[component]
pub fn LeadForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (company, set_company) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (value, set_value) = signal(String::new());

    let create_lead = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let company_name = company.get();
        let contact_name = contact.get();
        if company_name.is_empty() || contact_name.is_empty() {
            return;
        }
        let input = LeadInput {
            company_name,
            contact_name,
            email: email.get(),
            value: value.get().parse().unwrap_or(0.0),
            status: Stage::New,
            tags: vec![],
        };

        let controller = ctx.controller.clone();
        spawn_local(controller.create(input));

        set_company.set(String::new());
        set_contact.set(String::new());
        set_email.set(String::new());
        set_value.set(String::new());
    };

    view! {
        <form class="lead-form" on:submit=create_lead>
            <input
                type="text"
                placeholder="Company..."
                prop:value=move || company.get()
                on:input=move |ev| set_company.set(input_value(&ev))
            />
            <input
                type="text"
                placeholder="Contact..."
                prop:value=move || contact.get()
                on:input=move |ev| set_contact.set(input_value(&ev))
            />
            <input
                type="email"
                placeholder="Email..."
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(input_value(&ev))
            />
            <input
                type="number"
                placeholder="Value..."
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(input_value(&ev))
            />
            <button type="submit">"Add Lead"</button>
        </form>
    }
}
