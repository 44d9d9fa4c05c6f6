//! Delete Confirm Button Component
//!
//! Two-step delete control: the first click arms it, the second confirms.

use leptos::prelude::*;

/// Author-only delete control with an inline confirm step
#[component]
pub fn DeleteConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        {move || if armed.get() {
            view! {
                <span class="delete-confirm">
                    "Delete?"
                    <button
                        class="icon-btn danger"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button
                        class="icon-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "No"
                    </button>
                </span>
            }.into_any()
        } else {
            view! {
                <button
                    class="icon-btn danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "Delete"
                </button>
            }.into_any()
        }}
    }
}
