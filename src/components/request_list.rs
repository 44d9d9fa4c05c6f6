//! Request List Component
//!
//! Loading/empty states, the card grid for the current page, and pagination.

use leptos::prelude::*;

use crate::components::{Pagination, RequestCard};
use crate::filter::{self, FilterState};
use crate::models::{PrayerRequest, User};

#[component]
pub fn RequestList(
    #[prop(into)] visible: Signal<Vec<PrayerRequest>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] user: Signal<Option<User>>,
    filter: RwSignal<FilterState>,
    page: RwSignal<usize>,
) -> impl IntoView {
    let total_pages = Signal::derive(move || filter::total_pages(visible.read().len()));
    let page_items = Signal::derive(move || filter::page_slice(&visible.read(), page.get()));

    view! {
        <section class="request-list">
            <h2>{move || format!("Prayer Requests ({})", visible.read().len())}</h2>
            <Show when=move || loading.get()>
                <div class="loading">"Loading prayer requests..."</div>
            </Show>
            <Show when=move || !loading.get() && visible.read().is_empty()>
                <div class="empty-state">
                    <p>"No prayer requests found matching your criteria."</p>
                    <button on:click=move |_| filter.set(FilterState::default())>
                        "Clear Filters"
                    </button>
                </div>
            </Show>
            <div class="card-grid">
                <For
                    each=move || page_items.get()
                    key=|request| request.id.clone()
                    children=move |request| view! { <RequestCard request=request user=user /> }
                />
            </div>
            <Pagination
                current_page=page.read_only()
                total_pages=total_pages
                on_page_change=Callback::new(move |p| page.set(p))
            />
        </section>
    }
}
