//! Request Form Component
//!
//! Submission dialog for new prayer requests. Validates client-side before
//! any network call: the body must be non-empty, and a name is required
//! unless the request is anonymous or a user is signed in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::CategorySelect;
use crate::context::AppContext;
use crate::models::{self, Category, NewPrayerRequest, User};
use crate::store::{self, use_app_store};

#[component]
pub fn RequestForm(#[prop(into)] user: Signal<Option<User>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (open, set_open) = signal(false);
    let (draft, set_draft) = signal(NewPrayerRequest::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = draft.get();
        if let Err(message) = models::validate_submission(&request, user.get_untracked().is_some())
        {
            ctx.show_alert(message, 4_000);
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            if store::create_request(store, &request).await {
                set_draft.set(NewPrayerRequest::default());
                set_open.set(false);
                ctx.show_alert("Your prayer request has been submitted.", 3_000);
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="submit-section">
            <button class="primary submit-open-btn" on:click=move |_| set_open.set(true)>
                "Submit Prayer Request"
            </button>
            <Show when=move || open.get()>
                <div class="dialog-backdrop" on:click=move |_| set_open.set(false)></div>
                <div class="dialog" role="dialog">
                    <h2>"Submit Your Prayer Request"</h2>
                    <p class="dialog-description">
                        "Share your request with the community."
                    </p>
                    <form on:submit=on_submit>
                        <label class="checkbox-row">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.read().is_anonymous
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    set_draft.update(|d| d.is_anonymous = checked);
                                }
                            />
                            "Post anonymously (your name won't be shown)"
                        </label>
                        <Show when=move || !draft.read().is_anonymous>
                            <label>
                                "Your Name"
                                <input
                                    type="text"
                                    placeholder="Enter your name"
                                    prop:value=move || draft.read().name.clone()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_draft.update(|d| d.name = value);
                                    }
                                />
                            </label>
                        </Show>
                        <label>
                            "Category"
                            <CategorySelect
                                selected=Signal::derive(move || Some(draft.read().category))
                                on_change=Callback::new(move |category: Option<Category>| {
                                    set_draft.update(|d| d.category = category.unwrap_or_default());
                                })
                            />
                        </label>
                        <label>
                            "Prayer Request"
                            <textarea
                                placeholder="Please describe what you would like prayers for..."
                                prop:value=move || draft.read().request_text.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.request_text = value);
                                }
                            ></textarea>
                        </label>
                        <label>
                            "Location (Optional)"
                            <input
                                type="text"
                                placeholder="e.g., Makkah, Madinah, or your city"
                                prop:value=move || draft.read().location.clone()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.location = value);
                                }
                            />
                        </label>
                        <label class="checkbox-row">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.read().is_urgent
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    set_draft.update(|d| d.is_urgent = checked);
                                }
                            />
                            "Mark as urgent"
                        </label>
                        <div class="dialog-footer">
                            <button type="button" on:click=move |_| set_open.set(false)>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="primary"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
