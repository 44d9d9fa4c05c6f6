//! Filter Bar Component
//!
//! Search input, category select, urgency and scope toggles. Every change
//! funnels into the shared FilterState signal; the page-reset effect in the
//! app reacts to that signal, so no component here touches pagination.

use leptos::prelude::*;

use crate::components::CategorySelect;
use crate::filter::{FilterState, Scope};
use crate::models::User;

#[component]
pub fn FilterBar(
    filter: RwSignal<FilterState>,
    #[prop(into)] user: Signal<Option<User>>,
) -> impl IntoView {
    // Clicking the active scope switches it off; Mine and Saved can never be
    // on at the same time
    let toggle_scope = move |scope: Scope| {
        filter.update(|f| {
            f.scope = if f.scope == scope { Scope::All } else { scope };
        });
    };

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search prayer requests..."
                prop:value=move || filter.read().query.clone()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.query = value);
                }
            />
            <div class="filter-row">
                <CategorySelect
                    selected=Signal::derive(move || filter.read().category)
                    on_change=Callback::new(move |category| {
                        filter.update(|f| f.category = category);
                    })
                    include_all=true
                />
                <button
                    class=move || {
                        if filter.read().urgent_only { "filter-btn active" } else { "filter-btn" }
                    }
                    on:click=move |_| filter.update(|f| f.urgent_only = !f.urgent_only)
                >
                    "Urgent Only"
                </button>
                <Show when=move || user.read().is_some()>
                    <button
                        class=move || {
                            if filter.read().scope == Scope::Mine {
                                "filter-btn active"
                            } else {
                                "filter-btn"
                            }
                        }
                        on:click=move |_| toggle_scope(Scope::Mine)
                    >
                        "My Requests"
                    </button>
                    <button
                        class=move || {
                            if filter.read().scope == Scope::Saved {
                                "filter-btn active"
                            } else {
                                "filter-btn"
                            }
                        }
                        on:click=move |_| toggle_scope(Scope::Saved)
                    >
                        "Saved"
                    </button>
                </Show>
                <Show when=move || filter.read().is_active()>
                    <button
                        class="filter-btn clear"
                        on:click=move |_| filter.set(FilterState::default())
                    >
                        "Clear"
                    </button>
                </Show>
            </div>
        </div>
    }
}
