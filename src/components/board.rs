//! Kanban Board Component
//!
//! Wires the drag gesture signals to the board state machine and forwards
//! status changes to the optimistic mutation layer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dnd::{bind_global_handlers, create_dnd_signals, DragTarget as DndTarget};

use crate::board::{columns, BoardState, DragTarget, StatusChange};
use crate::components::BoardColumn;
use crate::context::AppContext;
use crate::models::Stage;

/// Resolve a pointer-level target to a board-level one.
/// Unknown column ids resolve to nothing and the gesture becomes a cancel.
fn board_target(target: &DndTarget) -> Option<DragTarget> {
    match target {
        DndTarget::Card(id) => Some(DragTarget::Card(id.clone())),
        DndTarget::Column(id) => Stage::from_str(id).map(DragTarget::Column),
    }
}

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let leads = ctx.controller.leads();
    let board = RwSignal::new(BoardState::new());

    // Sync tasks from the shared lead list (initial load, optimistic
    // applies, rollbacks and reconciliations all arrive through it)
    {
        let leads = leads.clone();
        Effect::new(move |_| {
            let current = leads.get();
            board.update(|b| b.sync_from_leads(&current));
        });
    }

    let controller = ctx.controller.clone();
    let persist = move |change: StatusChange| {
        spawn_local(controller.set_status(change.lead_id, change.status));
    };

    let dnd = create_dnd_signals();

    let on_hover = {
        let persist = persist.clone();
        Callback::new(move |(_dragged, target): (String, DndTarget)| {
            let Some(target) = board_target(&target) else { return };
            let change = board.try_update(|b| b.drag_over(&target)).flatten();
            if let Some(change) = change {
                persist(change);
            }
        })
    };

    let on_drag_start = move |task_id: String| {
        board.update(|b| {
            b.drag_start(&task_id);
        });
    };

    let on_drop = {
        let persist = persist.clone();
        move |_dragged: String, target: Option<DndTarget>| {
            let target = target.as_ref().and_then(board_target);
            let change = board.try_update(|b| b.drag_end(target.as_ref())).flatten();
            if let Some(change) = change {
                persist(change);
            }
        }
    };

    bind_global_handlers(dnd, on_drag_start, on_drop);

    view! {
        <div
            class="kanban-board"
            class:drag-active=move || board.with(|b| b.active_task_id().is_some())
        >
            {columns()
                .into_iter()
                .map(|column| {
                    view! {
                        <BoardColumn
                            column=column
                            board=board
                            dnd=dnd
                            on_hover=on_hover
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
