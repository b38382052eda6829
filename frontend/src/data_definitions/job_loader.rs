//! Loads the job list for the repository named in the page URL.

use anyhow::{anyhow, Context};
use common::fetch_status::FetchAction;
use common::job::{Job, JobList};
use common::query_codec::QueryParams;
use dioxus::logger::tracing::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub const JOBS_ENDPOINT: &str = "/api/jobs/";

/// Job list URL. Filters are applied in the browser, so only the parameters
/// that are not filters (repo, revision, ...) go to the server.
pub fn jobs_url(non_filter_params: &QueryParams) -> String {
    let query = non_filter_params.to_query_string();
    if query.is_empty() {
        JOBS_ENDPOINT.to_string()
    } else {
        format!("{JOBS_ENDPOINT}?{query}")
    }
}

async fn request(url: &str) -> anyhow::Result<(u16, String)> {
    let window = web_sys::window().context("no browser window")?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("Request to {url} failed: {e:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| anyhow!("Unexpected fetch result: {e:?}"))?;
    let body = response
        .text()
        .map_err(|e| anyhow!("Failed to read response body: {e:?}"))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("Failed to read response body: {e:?}"))?;
    Ok((response.status(), body.as_string().unwrap_or_default()))
}

pub async fn fetch_jobs(url: String) -> FetchAction<Vec<Job>> {
    info!("Loading jobs from {url}");
    match request(&url).await {
        Ok((status, body)) => FetchAction::<JobList>::from_response(status, &body).map(|list| list.results),
        Err(e) => {
            error!("{e:#}");
            FetchAction::Error
        }
    }
}
