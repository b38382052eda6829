use dioxus::prelude::*;

use crate::components::error_boundary::ErrorMessages;
use crate::data_definitions::filter_context::FilterContext;

/// Jobs that pass the current filters.
#[component]
pub fn JobsPage() -> Element {
    let context = use_context::<FilterContext>();
    let filter_model = context.filter_model;
    let jobs = context.jobs;
    let matcher = use_memo(move || filter_model.read().matcher());

    let jobs = jobs.read();
    if jobs.is_fetching() {
        return rsx! {
            div { style: "padding: 20px;", "Loading jobs..." }
        };
    }
    let messages = jobs.error_messages();
    if !messages.is_empty() {
        return rsx! {
            ErrorMessages { messages }
        };
    }

    let matcher = matcher();
    let model = filter_model.read();
    let config = model.config();
    let mut visible: Vec<(u64, String)> = Vec::new();
    let mut unclassified = 0;
    for job in jobs.data.iter().filter(|job| matcher.show_job(job)) {
        if model.is_job_unclassified_failure(job) {
            unclassified += 1;
        }
        let line = format!(
            "{} {}({}) {}",
            job.platform_display(config),
            job.job_group_symbol,
            job.job_type_symbol,
            job.status()
        );
        visible.push((job.id, line));
    }
    let shown = visible.len();

    rsx! {
        div {
            id: "x-jobs-container",
            style: "padding: 20px;",
            p { "{shown} jobs shown, {unclassified} unclassified failures" }
            ul {
                for (id, line) in visible {
                    li { key: "{id}", "{line}" }
                }
            }
        }
    }
}
