//! Prayer Endpoints
//!
//! One function per backend action. Failures are returned to the caller
//! untouched; recovery happens at the store boundary.

use super::wire::{
    from_wire, to_wire, NewComment, UpdatePrayerInput, WireComment, WirePrayerRequest, WireStats,
};
use super::{check, client, url, ApiResult};
use crate::models::{Category, NewPrayerRequest, PrayerRequest};

pub async fn list_requests() -> ApiResult<Vec<PrayerRequest>> {
    let response = check(client().get(url("/prayers")).send().await?)?;
    let records: Vec<WirePrayerRequest> = response.json().await?;
    Ok(records.into_iter().map(from_wire).collect())
}

pub async fn get_request(id: &str) -> ApiResult<PrayerRequest> {
    let response = check(client().get(url(&format!("/prayers/{}", id))).send().await?)?;
    Ok(from_wire(response.json().await?))
}

/// Create a request and return the authoritative record the backend stored
pub async fn create_request(input: &NewPrayerRequest) -> ApiResult<PrayerRequest> {
    let payload = to_wire(input);
    let response = check(client().post(url("/prayers")).json(&payload).send().await?)?;
    Ok(from_wire(response.json().await?))
}

pub async fn update_request(id: &str, input: &UpdatePrayerInput) -> ApiResult<PrayerRequest> {
    let response = check(
        client()
            .put(url(&format!("/prayers/{}", id)))
            .json(input)
            .send()
            .await?,
    )?;
    Ok(from_wire(response.json().await?))
}

pub async fn delete_request(id: &str) -> ApiResult<()> {
    check(client().delete(url(&format!("/prayers/{}", id))).send().await?)?;
    Ok(())
}

/// Record one prayer. Only success/failure is relied upon; the response body
/// carries no count.
pub async fn increment_pray_count(id: &str) -> ApiResult<()> {
    check(client().post(url(&format!("/prayers/{}/pray", id))).send().await?)?;
    Ok(())
}

pub async fn search_requests(query: &str) -> ApiResult<Vec<PrayerRequest>> {
    let response = check(
        client()
            .get(url("/prayers/search"))
            .query(&[("q", query)])
            .send()
            .await?,
    )?;
    let records: Vec<WirePrayerRequest> = response.json().await?;
    Ok(records.into_iter().map(from_wire).collect())
}

pub async fn requests_by_category(category: Category) -> ApiResult<Vec<PrayerRequest>> {
    let response = check(
        client()
            .get(url(&format!("/prayers/category/{}", category.as_str())))
            .send()
            .await?,
    )?;
    let records: Vec<WirePrayerRequest> = response.json().await?;
    Ok(records.into_iter().map(from_wire).collect())
}

pub async fn recent_requests(limit: u32) -> ApiResult<Vec<PrayerRequest>> {
    let response = check(
        client()
            .get(url("/prayers/recent"))
            .query(&[("limit", limit)])
            .send()
            .await?,
    )?;
    let records: Vec<WirePrayerRequest> = response.json().await?;
    Ok(records.into_iter().map(from_wire).collect())
}

pub async fn stats() -> ApiResult<WireStats> {
    let response = check(client().get(url("/prayers/stats")).send().await?)?;
    Ok(response.json().await?)
}

pub async fn comments(id: &str) -> ApiResult<Vec<WireComment>> {
    let response = check(
        client()
            .get(url(&format!("/prayers/{}/comments", id)))
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}

pub async fn add_comment(id: &str, input: &NewComment) -> ApiResult<WireComment> {
    let response = check(
        client()
            .post(url(&format!("/prayers/{}/comments", id)))
            .json(input)
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}
