//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation of
//! the request collection goes through the functions in this module; the
//! filter engine and the components only read it. Each operation traps its
//! own failure into `last_error` and reports success as a bool — nothing
//! escapes the store boundary.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::{NewPrayerRequest, PrayerRequest, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical request collection, newest first
    pub requests: Vec<PrayerRequest>,
    /// True while a full reload is in flight
    pub loading: bool,
    /// Last operation failure, overwritten by each new one
    pub last_error: Option<String>,
    /// Session user from mock auth
    pub user: Option<User>,
    /// Request ids the current viewer prayed for this session
    pub prayed: HashSet<String>,
    /// (user id, request id) bookmark pairs, session-local only
    pub saved: HashSet<(String, String)>,
    /// Bumped on every reload so a late response from a superseded load is
    /// discarded instead of overwriting newer state
    pub load_generation: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Operations
// ========================

/// Replace the collection with a fresh server fetch. On failure the
/// collection is left untouched and an error message is recorded.
pub async fn load_requests(store: AppStore) {
    let generation = {
        let counter_field = store.load_generation();
        let mut counter = counter_field.write();
        *counter += 1;
        *counter
    };
    store.loading().set(true);

    match api::list_requests().await {
        Ok(requests) => {
            if store.load_generation().get_untracked() == generation {
                web_sys::console::log_1(
                    &format!("[store] loaded {} requests", requests.len()).into(),
                );
                store.requests().set(requests);
            } else {
                web_sys::console::log_1(&"[store] dropping superseded load response".into());
            }
        }
        Err(error) => {
            web_sys::console::error_1(&format!("[store] load failed: {}", error).into());
            set_error(store, "Failed to load prayer requests. Please try again.");
        }
    }

    if store.load_generation().get_untracked() == generation {
        store.loading().set(false);
    }
}

/// Send a new request; on success the authoritative record returned by the
/// backend is prepended. No optimistic insertion before confirmation.
/// Validation happens in the form before this is called.
pub async fn create_request(store: AppStore, input: &NewPrayerRequest) -> bool {
    match api::create_request(input).await {
        Ok(created) => {
            store.requests().write().insert(0, created);
            true
        }
        Err(error) => {
            web_sys::console::error_1(&format!("[store] create failed: {}", error).into());
            set_error(store, "Failed to submit your prayer request. Please try again.");
            false
        }
    }
}

/// Record one prayer, server first, then local state. A stale id leaves both
/// the collection and the viewer's prayed set untouched.
pub async fn increment_pray(store: AppStore, id: &str) -> bool {
    match api::increment_pray_count(id).await {
        Ok(()) => {
            if apply_increment(&mut store.requests().write(), id) {
                store.prayed().write().insert(id.to_string());
            }
            true
        }
        Err(error) => {
            web_sys::console::error_1(&format!("[store] pray failed: {}", error).into());
            set_error(store, "Failed to record prayer. Please try again.");
            false
        }
    }
}

/// Delete a request server-side, then drop it from the collection
pub async fn delete_request(store: AppStore, id: &str) -> bool {
    match api::delete_request(id).await {
        Ok(()) => {
            remove_request(&mut store.requests().write(), id);
            true
        }
        Err(error) => {
            web_sys::console::error_1(&format!("[store] delete failed: {}", error).into());
            set_error(store, "Failed to delete prayer request. Please try again.");
            false
        }
    }
}

/// Flip the signed-in user's bookmark on a request. Bookmarks have no backend
/// persistence yet, so this state is lost on reload.
pub fn toggle_saved(store: AppStore, id: &str) {
    let Some(user) = store.user().get_untracked() else {
        return;
    };
    let key = (user.id, id.to_string());
    let saved_field = store.saved();
    let mut saved = saved_field.write();
    if !saved.remove(&key) {
        saved.insert(key);
    }
}

/// Clear the session user; viewer-scope filter state is reset by the caller
pub fn sign_out(store: AppStore) {
    store.user().set(None);
}

fn set_error(store: AppStore, message: &str) {
    store.last_error().set(Some(message.to_string()));
}

/// Bump the matching record in place and report whether one matched, so the
/// caller can skip viewer-side bookkeeping for stale ids. No de-duplication:
/// praying twice increases the count by exactly two.
fn apply_increment(requests: &mut [PrayerRequest], id: &str) -> bool {
    match requests.iter_mut().find(|request| request.id == id) {
        Some(request) => {
            request.prayed_for_count += 1;
            true
        }
        None => false,
    }
}

/// Remove exactly the record with the matching id, leaving order intact
fn remove_request(requests: &mut Vec<PrayerRequest>, id: &str) {
    requests.retain(|request| request.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::{TimeZone, Utc};

    fn request(id: &str) -> PrayerRequest {
        PrayerRequest {
            id: id.to_string(),
            name: "Ali".to_string(),
            request_text: "text".to_string(),
            location: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            prayed_for_count: 0,
            is_urgent: false,
            is_anonymous: false,
            category: Category::Other,
            author_id: None,
        }
    }

    #[test]
    fn increment_has_no_hidden_deduplication() {
        let mut requests = vec![request("a"), request("b")];
        assert!(apply_increment(&mut requests, "a"));
        assert!(apply_increment(&mut requests, "a"));
        assert_eq!(requests[0].prayed_for_count, 2);
        assert_eq!(requests[1].prayed_for_count, 0);
    }

    #[test]
    fn increment_with_stale_id_is_a_noop() {
        let mut requests = vec![request("a")];
        assert!(!apply_increment(&mut requests, "gone"));
        assert_eq!(requests[0].prayed_for_count, 0);
    }

    #[test]
    fn remove_drops_exactly_one_and_keeps_order() {
        let mut requests = vec![request("a"), request("b"), request("c")];
        remove_request(&mut requests, "b");
        let ids: Vec<_> = requests.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
