//! Leptos DnD Primitives
//!
//! Mouse-event drag-and-drop for board-style UIs.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// What the pointer is currently over during a drag
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// Over a draggable card
    Card(String),
    /// Over a column surface (valid even when the column is empty)
    Column(String),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_target_read: ReadSignal<Option<DragTarget>>,
    pub drop_target_write: WriteSignal<Option<DragTarget>>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<DragTarget>);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation, clearing all transient state
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_card_mousedown(dnd: DndSignals, card_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(card_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for cards.
/// Sets the drop target and reports the hover so callers can run
/// live-preview logic while the drag is still in progress.
pub fn make_on_card_mouseenter<F>(dnd: DndSignals, card_id: String, on_hover: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(String, DragTarget) + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != card_id {
                let target = DragTarget::Card(card_id.clone());
                dnd.drop_target_write.set(Some(target.clone()));
                on_hover(dragging, target);
            }
        }
    }
}

/// Create mouseenter handler for column surfaces
pub fn make_on_column_mouseenter<F>(dnd: DndSignals, column_id: String, on_hover: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(String, DragTarget) + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            let target = DragTarget::Column(column_id.clone());
            dnd.drop_target_write.set(Some(target.clone()));
            on_hover(dragging, target);
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove<F>(dnd: DndSignals, on_drag_start: F)
where
    F: Fn(String) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if let Some(pending_id) = pending {
            if dnd.dragging_id_read.get_untracked().is_none() {
                let start_x = dnd.start_x_read.get_untracked();
                let start_y = dnd.start_y_read.get_untracked();
                let dx = (ev.client_x() - start_x).abs();
                let dy = (ev.client_y() - start_y).abs();

                // Start dragging if moved beyond threshold
                if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                    dnd.dragging_id_write.set(Some(pending_id.clone()));
                    on_drag_start(pending_id);
                }
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup + mousemove handlers.
/// `on_drop` receives the dragged card id and the current drop target,
/// or `None` when the drag ended over nothing droppable (cancel).
pub fn bind_global_handlers<S, F>(dnd: DndSignals, on_drag_start: S, on_drop: F)
where
    S: Fn(String) + Clone + 'static,
    F: Fn(String, Option<DragTarget>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let Some(dragged) = dragging_id {
            end_drag(&dnd);
            on_drop(dragged, drop_target);
        } else {
            // Not dragging - just end any pending state
            end_drag(&dnd);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_drag_start);
}
