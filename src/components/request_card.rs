//! Request Card Component
//!
//! One prayer request: submitter, badges, body text, and the
//! pray/copy/save/delete actions. The pray count is read back from the store
//! so a confirmed increment shows up without re-rendering the whole card.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{time_ago, PrayerRequest, User};
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn RequestCard(
    request: PrayerRequest,
    #[prop(into)] user: Signal<Option<User>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = request.id.clone();
    let initial_count = request.prayed_for_count;

    let already_prayed = {
        let id = id.clone();
        move || store.prayed().read().contains(&id)
    };
    let is_own = {
        let author_id = request.author_id.clone();
        move || match (&author_id, user.read().as_ref()) {
            (Some(author), Some(user)) => *author == user.id,
            _ => false,
        }
    };
    let is_saved = {
        let id = id.clone();
        move || {
            let saved = store.saved().read();
            user.read()
                .as_ref()
                .is_some_and(|user| saved.contains(&(user.id.clone(), id.clone())))
        }
    };
    let pray_count = {
        let id = id.clone();
        move || {
            store
                .requests()
                .read()
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.prayed_for_count)
                .unwrap_or(initial_count)
        }
    };

    let on_pray = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                if store::increment_pray(store, &id).await {
                    ctx.show_alert("Thank you for praying.", 2_000);
                }
            });
        }
    };

    let (copied, set_copied) = signal(false);
    let share_text = request.share_text();
    let on_copy = move |_| {
        let text = share_text.clone();
        spawn_local(async move {
            let clipboard = window().navigator().clipboard();
            if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
                set_copied.set(true);
                TimeoutFuture::new(2_000).await;
                set_copied.set(false);
            }
        });
    };

    let on_save = {
        let id = id.clone();
        move |_| store::toggle_saved(store, &id)
    };
    let on_delete = {
        let id = id.clone();
        Callback::new(move |_| {
            let id = id.clone();
            spawn_local(async move {
                if store::delete_request(store, &id).await {
                    ctx.show_alert("Prayer request has been deleted.", 3_000);
                }
            });
        })
    };

    let display_name = request.display_name().to_string();
    let location = request.location.clone();
    let created_at = request.created_at;
    let category = request.category;

    view! {
        <article class="request-card" class:urgent=request.is_urgent>
            <header class="card-header">
                <div class="card-title">
                    <span class="display-name">{display_name}</span>
                    {request.is_urgent.then(|| view! {
                        <span class="badge urgent">"Urgent"</span>
                    })}
                </div>
                <div class="card-meta">
                    <span class="time-ago">{move || time_ago(created_at, Utc::now())}</span>
                    {location.map(|location| view! {
                        <span class="location">{location}</span>
                    })}
                </div>
                <span class="badge category">{category.label()}</span>
                <Show when=move || user.read().is_some()>
                    <div class="card-actions">
                        <button
                            class={
                                let is_saved = is_saved.clone();
                                move || if is_saved() { "icon-btn saved" } else { "icon-btn" }
                            }
                            on:click=on_save.clone()
                        >
                            {
                                let is_saved = is_saved.clone();
                                move || if is_saved() { "★" } else { "☆" }
                            }
                        </button>
                        <Show when=is_own.clone()>
                            <DeleteConfirmButton on_confirm=on_delete />
                        </Show>
                    </div>
                </Show>
            </header>
            <p class="card-body">{request.request_text.clone()}</p>
            <footer class="card-footer">
                <span class="pray-count">
                    {
                        let pray_count = pray_count.clone();
                        move || format!("{} prayers", pray_count())
                    }
                </span>
                <button class="icon-btn" on:click=on_copy>
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
                <button
                    class="pray-btn"
                    disabled=already_prayed.clone()
                    on:click=on_pray
                >
                    {
                        let already_prayed = already_prayed.clone();
                        move || if already_prayed() { "Prayed ✓" } else { "I Prayed for This" }
                    }
                </button>
            </footer>
        </article>
    }
}
