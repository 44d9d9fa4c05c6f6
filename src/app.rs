//! Prayer Board App
//!
//! Main application component: owns the filter and pagination signals, wires
//! the store and context, and composes the layout. Data flows one way: user
//! actions go through the store, derived state comes back out through the
//! filter engine.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    AlertBanner, AuthModals, FilterBar, Header, RequestForm, RequestList, StatsDashboard,
};
use crate::context::AppContext;
use crate::filter::{self, FilterState, Scope};
use crate::store::{self, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new();
    provide_context(ctx);

    let filter = RwSignal::new(FilterState::default());
    let page = RwSignal::new(1usize);
    let (sign_in_open, set_sign_in_open) = signal(false);
    let (sign_up_open, set_sign_up_open) = signal(false);

    // Load requests on mount and whenever a reload is requested
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            store::load_requests(store).await;
        });
    });

    // Any filter change resets pagination to the first page
    Effect::new(move |_| {
        let _ = filter.get();
        page.set(1);
    });

    // Surface store errors as transient alerts, then clear them
    Effect::new(move |_| {
        if let Some(message) = store.last_error().get() {
            ctx.show_alert(message, 5_000);
            store.last_error().set(None);
        }
    });

    let user = Signal::derive(move || store.user().get());
    let visible = Signal::derive(move || {
        filter::visible_requests(
            &store.requests().read(),
            &filter.read(),
            store.user().read().as_ref(),
            &store.saved().read(),
        )
    });
    let metrics = Signal::derive(move || {
        filter::compute_metrics(
            &store.requests().read(),
            store.user().read().as_ref(),
            &store.prayed().read(),
            &store.saved().read(),
        )
    });

    let on_sign_in = Callback::new(move |user| {
        store.user().set(Some(user));
    });
    let on_sign_out = Callback::new(move |_| {
        store::sign_out(store);
        filter.update(|f| f.scope = Scope::All);
    });

    view! {
        <div class="app-layout">
            <Header
                user=user
                metrics=metrics
                set_sign_in_open=set_sign_in_open
                set_sign_up_open=set_sign_up_open
                on_sign_out=on_sign_out
            />
            <AlertBanner />
            <main class="main-content">
                <StatsDashboard metrics=metrics />
                <FilterBar filter=filter user=user />
                <RequestForm user=user />
                <RequestList
                    visible=visible
                    loading=Signal::derive(move || store.loading().get())
                    user=user
                    filter=filter
                    page=page
                />
            </main>
            <AuthModals
                sign_in_open=sign_in_open
                set_sign_in_open=set_sign_in_open
                sign_up_open=sign_up_open
                set_sign_up_open=set_sign_up_open
                on_sign_in=on_sign_in
            />
        </div>
    }
}
