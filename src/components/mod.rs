//! UI Components

use wasm_bindgen::JsCast;

mod activity_feed;
mod board;
mod card;
mod column;
mod lead_form;
mod stats;
mod toast_tray;

pub use activity_feed::ActivityFeed;
pub use board::KanbanBoard;
pub use card::BoardCard;
pub use column::BoardColumn;
pub use lead_form::LeadForm;
pub use stats::StatsGrid;
pub use toast_tray::ToastTray;

/// Text value of the input element an event fired on
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}
