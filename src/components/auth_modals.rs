//! Auth Modal Components
//!
//! Mock sign-in and sign-up dialogs. Credentials are validated locally and
//! never leave the browser; success hands a session user to the caller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{self, SignInData, SignUpData};
use crate::models::User;

#[component]
pub fn AuthModals(
    sign_in_open: ReadSignal<bool>,
    set_sign_in_open: WriteSignal<bool>,
    sign_up_open: ReadSignal<bool>,
    set_sign_up_open: WriteSignal<bool>,
    #[prop(into)] on_sign_in: Callback<User>,
) -> impl IntoView {
    let (sign_in_data, set_sign_in_data) = signal(SignInData::default());
    let (sign_up_data, set_sign_up_data) = signal(SignUpData::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let submit_sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        set_error.set(None);
        let data = sign_in_data.get();
        spawn_local(async move {
            match auth::sign_in(&data).await {
                Ok(user) => {
                    on_sign_in.run(user);
                    set_sign_in_data.set(SignInData::default());
                    set_error.set(None);
                    set_sign_in_open.set(false);
                }
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    let submit_sign_up = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        set_error.set(None);
        let data = sign_up_data.get();
        spawn_local(async move {
            match auth::sign_up(&data).await {
                Ok(user) => {
                    on_sign_in.run(user);
                    set_sign_up_data.set(SignUpData::default());
                    set_error.set(None);
                    set_sign_up_open.set(false);
                }
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    let switch_to_sign_up = move |_| {
        set_error.set(None);
        set_sign_in_open.set(false);
        set_sign_up_open.set(true);
    };
    let switch_to_sign_in = move |_| {
        set_error.set(None);
        set_sign_up_open.set(false);
        set_sign_in_open.set(true);
    };

    view! {
        <Show when=move || sign_in_open.get()>
            <div class="dialog-backdrop" on:click=move |_| set_sign_in_open.set(false)></div>
            <div class="dialog auth-dialog" role="dialog">
                <h2>"Sign In"</h2>
                <p class="dialog-description">"Welcome back! Please sign in to your account."</p>
                <form on:submit=submit_sign_in>
                    {move || error.get().map(|message| view! {
                        <div class="form-error">{message}</div>
                    })}
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || sign_in_data.read().email.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_sign_in_data.update(|d| d.email = value);
                            }
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || sign_in_data.read().password.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_sign_in_data.update(|d| d.password = value);
                            }
                        />
                    </label>
                    <div class="dialog-footer">
                        <button type="submit" class="primary" disabled=move || loading.get()>
                            {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                        <button type="button" on:click=switch_to_sign_up>
                            "Don't have an account? Sign up"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
        <Show when=move || sign_up_open.get()>
            <div class="dialog-backdrop" on:click=move |_| set_sign_up_open.set(false)></div>
            <div class="dialog auth-dialog" role="dialog">
                <h2>"Sign Up"</h2>
                <p class="dialog-description">"Create your account to join the prayer community."</p>
                <form on:submit=submit_sign_up>
                    {move || error.get().map(|message| view! {
                        <div class="form-error">{message}</div>
                    })}
                    <label>
                        "Full Name"
                        <input
                            type="text"
                            placeholder="Enter your full name"
                            prop:value=move || sign_up_data.read().name.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_sign_up_data.update(|d| d.name = value);
                            }
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || sign_up_data.read().email.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_sign_up_data.update(|d| d.email = value);
                            }
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            placeholder="Create a password"
                            prop:value=move || sign_up_data.read().password.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_sign_up_data.update(|d| d.password = value);
                            }
                        />
                    </label>
                    <label>
                        "Confirm Password"
                        <input
                            type="password"
                            placeholder="Confirm your password"
                            prop:value=move || sign_up_data.read().confirm_password.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_sign_up_data.update(|d| d.confirm_password = value);
                            }
                        />
                    </label>
                    <div class="dialog-footer">
                        <button type="submit" class="primary" disabled=move || loading.get()>
                            {move || if loading.get() { "Signing up..." } else { "Sign Up" }}
                        </button>
                        <button type="button" on:click=switch_to_sign_in>
                            "Already have an account? Sign in"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
