//! Stats Dashboard Component
//!
//! Platform metric cards, plus user-scoped cards when signed in. Values come
//! from the filter engine's `compute_metrics` over the full collection.

use leptos::prelude::*;

use crate::filter::Metrics;

#[component]
fn MetricCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="metric-card">
            <span class="metric-label">{label}</span>
            <span class="metric-value">{value}</span>
        </div>
    }
}

#[component]
pub fn StatsDashboard(#[prop(into)] metrics: Signal<Metrics>) -> impl IntoView {
    view! {
        <section class="stats-dashboard">
            {move || {
                let metrics = metrics.get();
                view! {
                    <div class="metric-grid">
                        <MetricCard label="Total Requests" value=metrics.total_requests.to_string() />
                        <MetricCard label="Total Prayers" value=metrics.total_prayers.to_string() />
                        <MetricCard label="Urgent" value=metrics.urgent.to_string() />
                        <MetricCard label="You Prayed" value=metrics.prayed_by_viewer.to_string() />
                    </div>
                }
            }}
            {move || metrics.get().user.map(|user| view! {
                <div class="metric-grid user-metrics">
                    <MetricCard label="Your Requests" value=user.authored.to_string() />
                    <MetricCard label="Saved Requests" value=user.saved.to_string() />
                    <MetricCard label="Your Impact" value=user.impact.to_string() />
                </div>
            })}
        </section>
    }
}
