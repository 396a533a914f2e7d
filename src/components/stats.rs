//! Stats Grid Component
//!
//! Aggregate dashboard numbers over the current lead list.

use leptos::prelude::*;

use crate::analytics::{active_deals, conversion_rate, leads_by_status, total_revenue};
use crate::context::AppContext;

#[component]
pub fn StatsGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let leads = ctx.controller.leads();

    let revenue = {
        let leads = leads.clone();
        move || format!("${:.0}", total_revenue(&leads.get()))
    };
    let conversion = {
        let leads = leads.clone();
        move || format!("{}%", conversion_rate(&leads.get()))
    };
    let active = {
        let leads = leads.clone();
        move || active_deals(&leads.get())
    };
    let bars = move || leads_by_status(&leads.get());

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-label">"Total Revenue"</span>
                <span class="stat-value">{revenue}</span>
            </div>
            <div class="stat-card">
                <span class="stat-label">"Conversion"</span>
                <span class="stat-value">{conversion}</span>
            </div>
            <div class="stat-card">
                <span class="stat-label">"Active Deals"</span>
                <span class="stat-value">{active}</span>
            </div>
            <div class="stat-card status-chart">
                <span class="stat-label">"Pipeline"</span>
                <div class="status-bars">
                    {move || {
                        bars()
                            .into_iter()
                            .map(|bar| {
                                view! {
                                    <div class="status-bar">
                                        <span
                                            class="status-dot"
                                            style=format!("background-color: {};", bar.fill)
                                        ></span>
                                        <span class="status-name">{bar.stage.title()}</span>
                                        <span class="status-count">{bar.count}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
