//! Filter & Aggregation Engine
//!
//! Pure functions computing the visible subset of requests, pagination
//! windows, and dashboard metrics. No signals, no I/O; the view feeds the
//! full collection in and renders whatever comes out.

use std::collections::HashSet;

use crate::models::{Category, PrayerRequest, User};

/// Requests shown per page
pub const PAGE_SIZE: usize = 6;

/// Session-local bookmark pairs: (user id, request id)
pub type SavedSet = HashSet<(String, String)>;

/// Mutually exclusive view scopes; Mine and Saved only apply to a signed-in
/// user and are ignored otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    Mine,
    Saved,
}

/// Current filter inputs, owned by the view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    /// None means "all categories"
    pub category: Option<Category>,
    pub urgent_only: bool,
    pub scope: Scope,
}

impl FilterState {
    /// True when any input differs from the default, i.e. the Clear button
    /// has something to do
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.category.is_some()
            || self.urgent_only
            || self.scope != Scope::All
    }
}

fn matches_query(request: &PrayerRequest, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    request.request_text.to_lowercase().contains(&query)
        || request
            .location
            .as_ref()
            .is_some_and(|location| location.to_lowercase().contains(&query))
        || (!request.is_anonymous && request.name.to_lowercase().contains(&query))
}

fn matches_scope(
    request: &PrayerRequest,
    scope: Scope,
    user: Option<&User>,
    saved: &SavedSet,
) -> bool {
    let Some(user) = user else {
        return true;
    };
    match scope {
        Scope::All => true,
        Scope::Mine => request.author_id.as_deref() == Some(user.id.as_str()),
        Scope::Saved => saved.contains(&(user.id.clone(), request.id.clone())),
    }
}

/// Visible subset of the collection. Relative order of the input is
/// preserved; nothing is re-sorted.
pub fn visible_requests(
    requests: &[PrayerRequest],
    filter: &FilterState,
    user: Option<&User>,
    saved: &SavedSet,
) -> Vec<PrayerRequest> {
    requests
        .iter()
        .filter(|request| matches_query(request, &filter.query))
        .filter(|request| filter.category.is_none_or(|c| request.category == c))
        .filter(|request| !filter.urgent_only || request.is_urgent)
        .filter(|request| matches_scope(request, filter.scope, user, saved))
        .cloned()
        .collect()
}

/// Number of pages for a visible count
pub fn total_pages(visible: usize) -> usize {
    visible.div_ceil(PAGE_SIZE)
}

/// One page window, 1-based. Pages past the end yield an empty slice; the
/// view resets to page 1 whenever a filter input changes.
pub fn page_slice(requests: &[PrayerRequest], page: usize) -> Vec<PrayerRequest> {
    if page == 0 {
        return Vec::new();
    }
    requests
        .iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}

/// Counters scoped to the signed-in user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserMetrics {
    pub authored: usize,
    pub saved: usize,
    /// Sum of pray counts over the user's own requests
    pub impact: u32,
}

/// Dashboard counters over the full, unfiltered collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub total_requests: usize,
    pub total_prayers: u32,
    pub urgent: usize,
    /// Requests the current viewer prayed for this session
    pub prayed_by_viewer: usize,
    pub user: Option<UserMetrics>,
}

/// Recomputed from scratch on every relevant state change; the collection is
/// small enough that incremental aggregation is not worth it.
pub fn compute_metrics(
    requests: &[PrayerRequest],
    user: Option<&User>,
    prayed: &HashSet<String>,
    saved: &SavedSet,
) -> Metrics {
    Metrics {
        total_requests: requests.len(),
        total_prayers: requests.iter().map(|r| r.prayed_for_count).sum(),
        urgent: requests.iter().filter(|r| r.is_urgent).count(),
        prayed_by_viewer: requests.iter().filter(|r| prayed.contains(&r.id)).count(),
        user: user.map(|user| UserMetrics {
            authored: requests
                .iter()
                .filter(|r| r.author_id.as_deref() == Some(user.id.as_str()))
                .count(),
            saved: requests
                .iter()
                .filter(|r| saved.contains(&(user.id.clone(), r.id.clone())))
                .count(),
            impact: requests
                .iter()
                .filter(|r| r.author_id.as_deref() == Some(user.id.as_str()))
                .map(|r| r.prayed_for_count)
                .sum(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn request(id: &str, name: &str, text: &str) -> PrayerRequest {
        PrayerRequest {
            id: id.to_string(),
            name: name.to_string(),
            request_text: text.to_string(),
            location: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            prayed_for_count: 0,
            is_urgent: false,
            is_anonymous: false,
            category: Category::Other,
            author_id: None,
        }
    }

    fn viewer(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Viewer".to_string(),
            email: "viewer@example.com".to_string(),
        }
    }

    fn no_filter() -> FilterState {
        FilterState::default()
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let requests = vec![
            request("a", "Ali", "one"),
            request("b", "Bilal", "two"),
            request("c", "Cala", "three"),
        ];
        let visible = visible_requests(&requests, &no_filter(), None, &SavedSet::new());
        let ids: Vec<_> = visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn visible_is_ordered_subset_of_input() {
        let mut requests: Vec<_> = (0..10)
            .map(|i| request(&format!("r{}", i), "Name", "text"))
            .collect();
        requests[2].is_urgent = true;
        requests[7].is_urgent = true;

        let filter = FilterState {
            urgent_only: true,
            ..Default::default()
        };
        let visible = visible_requests(&requests, &filter, None, &SavedSet::new());
        let ids: Vec<_> = visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r2", "r7"]);
    }

    #[test]
    fn query_matches_location_case_insensitively() {
        let mut r = request("a", "Ali", "Safe journey");
        r.location = Some("Makkah, Saudi Arabia".to_string());
        let filter = FilterState {
            query: "makkah".to_string(),
            ..Default::default()
        };
        let visible = visible_requests(&[r], &filter, None, &SavedSet::new());
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn query_never_matches_anonymous_name() {
        let mut r = request("a", "Fatima", "Health");
        r.is_anonymous = true;
        let filter = FilterState {
            query: "fatima".to_string(),
            ..Default::default()
        };
        assert!(visible_requests(&[r.clone()], &filter, None, &SavedSet::new()).is_empty());

        r.is_anonymous = false;
        assert_eq!(
            visible_requests(&[r], &filter, None, &SavedSet::new()).len(),
            1
        );
    }

    #[test]
    fn category_filter_is_exact_or_all() {
        let mut a = request("a", "Ali", "one");
        a.category = Category::Health;
        let b = request("b", "Bilal", "two");

        let filter = FilterState {
            category: Some(Category::Health),
            ..Default::default()
        };
        let visible = visible_requests(&[a.clone(), b.clone()], &filter, None, &SavedSet::new());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a");

        let visible = visible_requests(&[a, b], &no_filter(), None, &SavedSet::new());
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn mine_scope_requires_matching_author() {
        let mut a = request("a", "Ali", "one");
        a.author_id = Some("u1".to_string());
        let b = request("b", "Bilal", "two");

        let filter = FilterState {
            scope: Scope::Mine,
            ..Default::default()
        };
        let user = viewer("u1");
        let visible = visible_requests(&[a, b], &filter, Some(&user), &SavedSet::new());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a");
    }

    #[test]
    fn saved_scope_uses_bookmark_pairs() {
        let a = request("a", "Ali", "one");
        let b = request("b", "Bilal", "two");
        let mut saved = SavedSet::new();
        saved.insert(("u1".to_string(), "b".to_string()));

        let filter = FilterState {
            scope: Scope::Saved,
            ..Default::default()
        };
        let user = viewer("u1");
        let visible = visible_requests(&[a, b], &filter, Some(&user), &saved);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "b");
    }

    #[test]
    fn scope_is_ignored_without_a_user() {
        let a = request("a", "Ali", "one");
        let filter = FilterState {
            scope: Scope::Mine,
            ..Default::default()
        };
        assert_eq!(
            visible_requests(&[a], &filter, None, &SavedSet::new()).len(),
            1
        );
    }

    #[test]
    fn seven_requests_paginate_into_two_pages() {
        let requests: Vec<_> = (0..7)
            .map(|i| request(&format!("r{}", i), "Name", "text"))
            .collect();

        assert_eq!(total_pages(requests.len()), 2);
        assert_eq!(page_slice(&requests, 1).len(), 6);
        let second = page_slice(&requests, 2);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, "r6");
        assert!(page_slice(&requests, 3).is_empty());
    }

    #[test]
    fn total_pages_of_empty_collection_is_zero() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn metrics_ignore_filters_entirely() {
        let mut requests: Vec<_> = (0..4)
            .map(|i| request(&format!("r{}", i), "Name", "text"))
            .collect();
        requests[0].prayed_for_count = 3;
        requests[1].prayed_for_count = 2;
        requests[2].is_urgent = true;

        let metrics = compute_metrics(&requests, None, &HashSet::new(), &SavedSet::new());
        assert_eq!(metrics.total_requests, 4);
        assert_eq!(metrics.total_prayers, 5);
        assert_eq!(metrics.urgent, 1);
        assert_eq!(metrics.prayed_by_viewer, 0);
        assert_eq!(metrics.user, None);
    }

    #[test]
    fn user_metrics_cover_authored_saved_and_impact() {
        let mut a = request("a", "Ali", "one");
        a.author_id = Some("u1".to_string());
        a.prayed_for_count = 4;
        let mut b = request("b", "Ali", "two");
        b.author_id = Some("u1".to_string());
        b.prayed_for_count = 1;
        let c = request("c", "Bilal", "three");

        let mut saved = SavedSet::new();
        saved.insert(("u1".to_string(), "c".to_string()));
        let mut prayed = HashSet::new();
        prayed.insert("c".to_string());

        let user = viewer("u1");
        let metrics = compute_metrics(&[a, b, c], Some(&user), &prayed, &saved);
        assert_eq!(metrics.prayed_by_viewer, 1);
        let user_metrics = metrics.user.unwrap();
        assert_eq!(user_metrics.authored, 2);
        assert_eq!(user_metrics.saved, 1);
        assert_eq!(user_metrics.impact, 5);
    }
}
