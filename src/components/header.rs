//! Header Component
//!
//! Title bar with sign-in/sign-up entry points and the signed-in user menu.

use leptos::prelude::*;

use crate::filter::Metrics;
use crate::models::User;

#[component]
pub fn Header(
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(into)] metrics: Signal<Metrics>,
    set_sign_in_open: WriteSignal<bool>,
    set_sign_up_open: WriteSignal<bool>,
    #[prop(into)] on_sign_out: Callback<()>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="app-header">
            <div class="header-titles">
                <h1>"Prayer Requests Platform"</h1>
                <p class="subtitle">"Connect with your brothers and sisters in prayer"</p>
            </div>
            {move || match user.get() {
                Some(user) => {
                    let user_metrics = metrics.get().user.unwrap_or_default();
                    view! {
                        <div class="user-menu">
                            <button
                                class="avatar-btn"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                {initials(&user.name)}
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="user-dropdown">
                                    <p class="user-name">{user.name.clone()}</p>
                                    <p class="user-email">{user.email.clone()}</p>
                                    <p class="user-counts">
                                        {format!(
                                            "{} requests, {} saved",
                                            user_metrics.authored, user_metrics.saved,
                                        )}
                                    </p>
                                    <button
                                        class="sign-out-btn"
                                        on:click=move |_| {
                                            set_menu_open.set(false);
                                            on_sign_out.run(());
                                        }
                                    >
                                        "Sign out"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }.into_any()
                }
                None => view! {
                    <div class="auth-buttons">
                        <button on:click=move |_| set_sign_in_open.set(true)>"Sign In"</button>
                        <button class="primary" on:click=move |_| set_sign_up_open.set(true)>
                            "Sign Up"
                        </button>
                    </div>
                }.into_any(),
            }}
        </header>
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
