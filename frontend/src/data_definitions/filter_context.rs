//! State shared by the job view components.

use common::fetch_status::FetchState;
use common::filter_model::FilterModel;
use common::job::Job;
use dioxus::prelude::*;

use crate::data_definitions::browser_history::BrowserHistory;

#[derive(Clone, Copy)]
pub struct FilterContext {
    pub filter_model: Signal<FilterModel<BrowserHistory>>,
    /// Driven by `job_loader::fetch_jobs` through `FetchState::reduce`.
    pub jobs: Signal<FetchState<Vec<Job>>>,
}
