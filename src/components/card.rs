//! Board Card Component
//!
//! A single lead on the board: drag affordance, inline edit, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dnd::{make_on_card_mousedown, make_on_card_mouseenter, DndSignals, DragTarget as DndTarget};

use super::input_value;
use crate::board::Task;
use crate::context::AppContext;
use crate::models::LeadPatch;

/// Diff the edit fields against the displayed task. Blank text fields and
/// unparsable values are ignored; `None` means there is nothing to write.
fn edit_patch(task: &Task, company: String, contact: String, value: String) -> Option<LeadPatch> {
    let mut patch = LeadPatch::default();
    if !company.trim().is_empty() && company != task.company_name {
        patch.company_name = Some(company);
    }
    if !contact.trim().is_empty() && contact != task.content {
        patch.contact_name = Some(contact);
    }
    if let Ok(parsed) = value.trim().parse::<f64>() {
        if parsed != task.value {
            patch.value = Some(parsed);
        }
    }
    (patch != LeadPatch::default()).then_some(patch)
}

#[component]
pub fn BoardCard(
    task: Task,
    dnd: DndSignals,
    on_hover: Callback<(String, DndTarget)>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id.clone();
    let on_mousedown = make_on_card_mousedown(dnd, id.clone());
    let on_mouseenter = make_on_card_mouseenter(dnd, id.clone(), move |dragged, target| {
        on_hover.run((dragged, target))
    });

    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str())
    };

    let editing = RwSignal::new(false);
    let (company, set_company) = signal(task.company_name.clone());
    let (contact, set_contact) = signal(task.content.clone());
    let (value, set_value) = signal(task.value.to_string());

    let on_save = {
        let task = task.clone();
        let controller = ctx.controller.clone();
        move |_| {
            if let Some(patch) = edit_patch(&task, company.get(), contact.get(), value.get()) {
                spawn_local(controller.update(task.id.clone(), patch));
            }
            editing.set(false);
        }
    };

    let on_cancel = {
        let company0 = task.company_name.clone();
        let contact0 = task.content.clone();
        let value0 = task.value.to_string();
        move |_| {
            set_company.set(company0.clone());
            set_contact.set(contact0.clone());
            set_value.set(value0.clone());
            editing.set(false);
        }
    };

    let on_delete = {
        let id = id.clone();
        move |_| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Are you sure you want to delete this lead?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let controller = ctx.controller.clone();
            let id = id.clone();
            spawn_local(controller.delete(id));
        }
    };

    let content = task.content.clone();
    let company_name = task.company_name.clone();
    let task_value = task.value;
    let tags = task.tags.clone();

    view! {
        <div
            class="board-card"
            class:dragging=is_dragging
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
        >
            {move || {
                if editing.get() {
                    view! {
                        <div class="card-edit">
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
                                type="number"
                                placeholder="Value..."
                                prop:value=move || value.get()
                                on:input=move |ev| set_value.set(input_value(&ev))
                            />
                            <div class="card-edit-actions">
                                <button class="save-btn" on:click=on_save.clone()>"Save"</button>
                                <button class="cancel-btn" on:click=on_cancel.clone()>"Cancel"</button>
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="card-body">
                            <div class="card-head">
                                <span class="card-contact">{content.clone()}</span>
                                <span class="card-actions">
                                    <button class="edit-btn" on:click=move |_| editing.set(true)>
                                        "Edit"
                                    </button>
                                    <button class="delete-btn" on:click=on_delete.clone()>"×"</button>
                                </span>
                            </div>
                            <div class="card-company">{company_name.clone()}</div>
                            <div class="card-value">{format!("${task_value:.0}")}</div>
                            <div class="card-tags">
                                {tags
                                    .iter()
                                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stage;

    fn task() -> Task {
        Task {
            id: "t1".to_string(),
            column_id: Stage::New,
            content: "Jo".to_string(),
            company_name: "Acme".to_string(),
            value: 1200.0,
            tags: vec![],
        }
    }

    #[test]
    fn test_unchanged_fields_produce_no_patch() {
        let t = task();
        assert_eq!(
            edit_patch(&t, "Acme".to_string(), "Jo".to_string(), "1200".to_string()),
            None
        );
    }

    #[test]
    fn test_patch_carries_only_changed_fields() {
        let t = task();
        let patch = edit_patch(&t, "Acme Corp".to_string(), "Jo".to_string(), "9000".to_string())
            .expect("two fields changed");
        assert_eq!(patch.company_name.as_deref(), Some("Acme Corp"));
        assert_eq!(patch.value, Some(9000.0));
        assert_eq!(patch.contact_name, None);
    }

    #[test]
    fn test_blank_and_unparsable_fields_ignored() {
        let t = task();
        assert_eq!(
            edit_patch(&t, "  ".to_string(), String::new(), "abc".to_string()),
            None
        );
    }

    #[test]
    fn test_contact_rename() {
        let t = task();
        let patch = edit_patch(&t, "Acme".to_string(), "Sam".to_string(), "1200".to_string())
            .expect("contact changed");
        assert_eq!(patch.contact_name.as_deref(), Some("Sam"));
        assert_eq!(patch.company_name, None);
        assert_eq!(patch.value, None);
    }
}
