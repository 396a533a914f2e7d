//! Board Column Component
//!
//! One pipeline stage: header with count, card list, drop surface.
//! The column body is a drop target even with zero cards.

use leptos::prelude::*;
use leptos_dnd::{make_on_column_mouseenter, make_on_mouseleave, DndSignals, DragTarget as DndTarget};

use crate::board::{BoardState, Column};
use crate::components::BoardCard;

#[component]
pub fn BoardColumn(
    column: Column,
    board: RwSignal<BoardState>,
    dnd: DndSignals,
    on_hover: Callback<(String, DndTarget)>,
) -> impl IntoView {
    let column_id = column.id;
    let tasks = move || board.with(|b| b.column_tasks(column_id));

    let on_mouseenter = make_on_column_mouseenter(
        dnd,
        column_id.as_str().to_string(),
        move |dragged, target| on_hover.run((dragged, target)),
    );
    let on_mouseleave = make_on_mouseleave(dnd);

    view! {
        <div class="board-column">
            <div class="column-header">
                <h3>{column.title}</h3>
                <span class="column-count">{move || tasks().len()}</span>
            </div>

            <div
                class="column-cards"
                on:mouseenter=on_mouseenter
                on:mouseleave=on_mouseleave
            >
                <For
                    each=tasks
                    // The key carries the editable fields so an accepted
                    // edit re-renders the card
                    key=|task| format!("{}|{}|{}|{}", task.id, task.company_name, task.content, task.value)
                    children=move |task| {
                        view! { <BoardCard task=task dnd=dnd on_hover=on_hover /> }
                    }
                />
            </div>
        </div>
    }
}
