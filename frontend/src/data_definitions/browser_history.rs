//! Browser location access and the history sink backed by it.

use anyhow::{anyhow, Context};
use common::history_sink::HistorySink;
use wasm_bindgen::JsValue;

fn window() -> anyhow::Result<web_sys::Window> {
    web_sys::window().context("no browser window")
}

/// `location.search` of the current page, including the leading `?`.
pub fn current_query() -> anyhow::Result<String> {
    window()?
        .location()
        .search()
        .map_err(|e| anyhow!("Failed to read location.search: {e:?}"))
}

pub fn current_path() -> anyhow::Result<String> {
    window()?
        .location()
        .pathname()
        .map_err(|e| anyhow!("Failed to read location.pathname: {e:?}"))
}

fn push_state(url: &str) -> anyhow::Result<()> {
    window()?
        .history()
        .map_err(|e| anyhow!("Failed to access history: {e:?}"))?
        .push_state_with_url(&JsValue::NULL, "", Some(url))
        .map_err(|e| anyhow!("Failed to push state: {e:?}"))
}

/// Pushes filter URLs onto `window.history`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserHistory;

impl HistorySink for BrowserHistory {
    fn push(&mut self, path: &str, query: &str) {
        let url = format!("{path}?{query}");
        if let Err(e) = push_state(&url) {
            dioxus::logger::tracing::error!("Could not update the url to {url}: {e:#}");
        }
    }
}
