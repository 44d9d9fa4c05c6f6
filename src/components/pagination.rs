//! Pagination Component
//!
//! Previous/next controls plus numbered page buttons. Hidden entirely when
//! one page is enough.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| {
                        let previous = current_page.get().saturating_sub(1).max(1);
                        on_page_change.run(previous);
                    }
                >
                    "Previous"
                </button>
                {move || (1..=total_pages.get()).map(|page| {
                    let is_active = move || current_page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "page-btn active" } else { "page-btn" }
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page}
                        </button>
                    }
                }).collect_view()}
                <button
                    class="page-btn"
                    disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| {
                        let next = (current_page.get() + 1).min(total_pages.get());
                        on_page_change.run(next);
                    }
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
