//! Alert Banner Component
//!
//! Transient message banner fed by the AppContext alert channel.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.alert.get().map(|message| view! {
            <div class="alert-banner" role="status">{message}</div>
        })}
    }
}
