//! Category Select Component
//!
//! Dropdown over the fixed category set, shared by the filter bar and the
//! submission form.

use leptos::prelude::*;

use crate::models::Category;

/// Category dropdown. With `include_all`, the empty value stands for "all
/// categories" and `on_change` receives `None`.
#[component]
pub fn CategorySelect(
    #[prop(into)] selected: Signal<Option<Category>>,
    #[prop(into)] on_change: Callback<Option<Category>>,
    #[prop(optional)] include_all: bool,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                let category = if value.is_empty() {
                    None
                } else {
                    Some(Category::parse(&value))
                };
                on_change.run(category);
            }
        >
            <Show when=move || include_all>
                <option value="" selected=move || selected.get().is_none()>
                    "All Categories"
                </option>
            </Show>
            {Category::ALL.iter().map(|category| {
                let category = *category;
                view! {
                    <option
                        value=category.as_str()
                        selected=move || selected.get() == Some(category)
                    >
                        {category.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
