use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use common::filter_config::FilterConfig;
use common::filter_const::{CLASSIFIED_STATE, RESULT_STATUS, SEARCH_STR, TIER};
use common::filter_model::FilterModel;
use common::history_sink::MemoryHistory;
use common::job::Job;
use common::query_codec::QueryParams;
use pretty_assertions::assert_eq;

fn model(query: &str) -> FilterModel<MemoryHistory> {
    FilterModel::from_query(query, MemoryHistory::default())
}

/// Field name to value set, as the filters are in effect.
fn logical_state(m: &FilterModel<MemoryHistory>) -> BTreeMap<String, BTreeSet<String>> {
    let mut state: BTreeMap<String, BTreeSet<String>> = m
        .field_filters()
        .into_iter()
        .map(|(field, values)| (field, values.into_iter().collect()))
        .collect();
    state.insert(RESULT_STATUS.to_string(), m.result_statuses().into_iter().collect());
    state.insert(CLASSIFIED_STATE.to_string(), m.classified_states().into_iter().collect());
    state.insert(SEARCH_STR.to_string(), m.search_terms().into_iter().collect());
    state
}

#[test]
fn defaults_in_any_order_leave_the_url() {
    let mut m = model("repo=autoland");
    m.replace_filter(TIER, vec!["2".to_string(), "1".to_string()]);
    m.replace_filter(
        CLASSIFIED_STATE,
        vec!["unclassified".to_string(), "classified".to_string()],
    );
    assert_eq!(m.query_string(), "repo=autoland");

    let reparsed = model(&m.query_string());
    assert_eq!(reparsed.field_filters()[TIER], vec!["1", "2"]);
    assert_eq!(reparsed.classified_states(), vec!["classified", "unclassified"]);
}

#[test]
fn serialized_state_round_trips() {
    let mut m = model("repo=try&selectedJob=99");
    m.add_filter(TIER, "3");
    m.add_filter("platform", "linux x64");
    m.add_filter(SEARCH_STR, "browser, chrome");
    m.toggle_result_statuses(&["superseded", "success"]);
    m.toggle_classified_filter("classified");

    let reparsed = model(&m.query_string());
    assert_eq!(logical_state(&reparsed), logical_state(&m));
    assert_eq!(reparsed.query_string(), m.query_string());
    assert_eq!(reparsed.non_filter_params(), m.non_filter_params());
}

#[test]
fn awkward_values_round_trip() {
    let job = Job {
        state: "completed".to_string(),
        result: "success".to_string(),
        tier: Some(1),
        job_type_symbol: "bc1".to_string(),
        job_type_name: "mochitest-browser".to_string(),
        ..Default::default()
    };
    let mut m = model("repo=try");
    m.add_filter("job_type_symbol", "");
    m.add_filter("job_type_name", "mochitest,xpcshell");
    m.add_filter("job_type_name", "xpcshell");
    m.replace_filter("platform", vec!["linux".to_string(), "linux".to_string()]);
    m.toggle_result_statuses(&["superseded", "superseded"]);
    m.add_filter(SEARCH_STR, "browser, chrome");
    m.add_filter(SEARCH_STR, "");

    let reparsed = model(&m.query_string());
    assert_eq!(logical_state(&reparsed), logical_state(&m));
    assert_eq!(reparsed.field_filters(), m.field_filters());
    assert_eq!(reparsed.result_statuses(), m.result_statuses());
    assert_eq!(reparsed.search_terms(), vec!["browser, chrome"]);
    assert_eq!(reparsed.query_string(), m.query_string());
    assert_eq!(reparsed.show_job(&job), m.show_job(&job));
}

#[test]
fn add_then_remove_is_a_no_op() {
    let mut m = model("");
    m.add_filter("job_group_symbol", "m");
    m.remove_filter("job_group_symbol", "m");
    assert!(!m.field_filters().contains_key("job_group_symbol"));
    assert_eq!(m.query_string(), "");
}

#[test]
fn result_status_toggle_is_one_history_entry() {
    let mut m = model("filter-resultStatus=busted&filter-resultStatus=exception");
    m.toggle_result_statuses(&["exception", "success"]);
    let statuses: BTreeSet<String> = m.result_statuses().into_iter().collect();
    assert_eq!(statuses, BTreeSet::from(["busted".to_string(), "success".to_string()]));
    assert_eq!(m.history().entries.len(), 1);
}

#[test]
fn runnable_jobs_ignore_status_and_classification() {
    let runnable = Job {
        state: "runnable".to_string(),
        job_type_symbol: "B".to_string(),
        ..Default::default()
    };
    let m = model("filter-resultStatus=busted&filter-classifiedState=classified");
    assert!(m.show_job(&runnable));

    let m = model("filter-resultStatus=busted&filter-job_type_symbol=x");
    assert!(!m.show_job(&runnable));
}

#[test]
fn search_terms_must_all_match() {
    let job = Job {
        state: "completed".to_string(),
        result: "success".to_string(),
        tier: Some(1),
        job_type_name: "py-lint-check".to_string(),
        ..Default::default()
    };
    let mut m = model("filter-searchStr=lint&filter-searchStr=py");
    assert!(m.show_job(&job));

    m.remove_filter(SEARCH_STR, "py");
    m.add_filter(SEARCH_STR, "rs");
    assert_eq!(m.search_terms(), vec!["lint", "rs"]);
    assert!(!m.show_job(&job));
}

#[test]
fn platform_matches_on_display_name() {
    let config = FilterConfig::from_json(r#"{"platform_map": {"linux64": "Linux"}}"#).unwrap();
    let config = Arc::new(config);
    let job = Job {
        state: "completed".to_string(),
        result: "success".to_string(),
        tier: Some(1),
        platform: "linux64".to_string(),
        platform_option: "opt".to_string(),
        ..Default::default()
    };

    let by_display = FilterModel::with_config(
        &QueryParams::parse("filter-platform=linux%20opt"),
        config.clone(),
        MemoryHistory::default(),
    );
    assert!(by_display.show_job(&job));

    let by_code = FilterModel::with_config(
        &QueryParams::parse("filter-platform=linux64%20opt"),
        config,
        MemoryHistory::default(),
    );
    assert!(!by_code.show_job(&job));
}

#[test]
fn unclassified_failures_toggle_returns_to_reset() {
    let mut m = model("");
    m.set_only_unclassified_failures();
    assert!(m.is_unclassified_failures());
    m.toggle_unclassified_failures();

    let mut reset = model("");
    reset.reset_non_field_filters();
    assert_eq!(m.query_string(), reset.query_string());
    assert_eq!(logical_state(&m), logical_state(&reset));
    assert!(!m.is_unclassified_failures());

    m.toggle_unclassified_failures();
    assert_eq!(
        m.history().last(),
        Some("/?filter-classifiedState=unclassified&filter-resultStatus=testfailed&filter-resultStatus=busted&filter-resultStatus=exception")
    );
}

#[test]
fn unclassified_failure_jobs() {
    let m = model("");
    let mut job = Job {
        state: "completed".to_string(),
        result: "testfailed".to_string(),
        failure_classification_id: 7,
        ..Default::default()
    };
    assert!(m.is_job_unclassified_failure(&job));
    job.failure_classification_id = 2;
    assert!(!m.is_job_unclassified_failure(&job));
}
