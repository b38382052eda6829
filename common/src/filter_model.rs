//! The filter set of one job view, kept in sync with the page URL.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use url::Url;

use crate::field_catalog::FieldChoice;
use crate::filter_config::FilterConfig;
use crate::filter_const::{
    CLASSIFIED_STATE, FAILURE_RESULTS, IN_PROGRESS_STATUSES, NON_FIELD_FILTERS, RESULT_STATUS,
    SEARCH_STR, SUPERSEDED, UNCLASSIFIED,
};
use crate::filter_error::FilterResult;
use crate::history_sink::HistorySink;
use crate::job::Job;
use crate::job_matcher::JobMatcher;
use crate::query_codec::{self, FilterState, QueryParams};

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn same_values(a: &[String], b: &[&str]) -> bool {
    a.iter().map(String::as_str).collect::<BTreeSet<_>>() == b.iter().copied().collect::<BTreeSet<_>>()
}

/// Filters read from the URL plus the operations the job views use to change
/// them. Every change is written back to the injected [`HistorySink`].
#[derive(Debug)]
pub struct FilterModel<H> {
    history: H,
    path: String,
    config: Arc<FilterConfig>,
    current_filters: FilterState,
    non_filter_params: QueryParams,
}

impl<H: HistorySink> FilterModel<H> {
    /// Model for a raw query string, e.g. `location.search`.
    pub fn from_query(query: &str, history: H) -> Self {
        Self::with_config(&QueryParams::parse(query), Arc::new(FilterConfig::default()), history)
    }

    pub fn from_url(url: &str, history: H) -> FilterResult<Self> {
        let parsed = Url::parse(url)?;
        let params = QueryParams::from_url(url)?;
        Ok(Self::with_config(&params, Arc::new(FilterConfig::default()), history).with_path(parsed.path()))
    }

    pub fn with_config(params: &QueryParams, config: Arc<FilterConfig>, history: H) -> Self {
        let current_filters = query_codec::parse_filters(params, &config);
        let non_filter_params = query_codec::parse_non_filter_params(params);
        tracing::debug!("filters from url: {current_filters:?}");
        Self {
            history,
            path: "/".to_string(),
            config,
            current_filters,
            non_filter_params,
        }
    }

    /// Path pushed together with the query string. Defaults to `/`.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    /// Re-reads the filters after the URL changed on its own, e.g. on
    /// back/forward navigation. Nothing is pushed.
    pub fn rebuild_from_location(&mut self, path: &str, query: &str) {
        let params = QueryParams::parse(query);
        self.path = path.to_string();
        self.current_filters = query_codec::parse_filters(&params, &self.config);
        self.non_filter_params = query_codec::parse_non_filter_params(&params);
    }

    /// Explicit values for `field`, falling back to its defaults.
    fn current_values(&self, field: &str) -> Option<Vec<String>> {
        match self.current_filters.get(field) {
            Some(values) => Some(values.clone()),
            None => {
                let defaults = self.config.defaults_for(field);
                if defaults.is_empty() { None } else { Some(defaults.to_vec()) }
            }
        }
    }

    fn store(&mut self, field: &str, values: Vec<String>) {
        if values.is_empty() {
            self.current_filters.remove(field);
        } else {
            self.current_filters.insert(field.to_string(), values);
        }
    }

    /// Adds `value` to `field`. When that leaves the field at its defaults the
    /// explicit entry is dropped. Values are split and cleaned the way the
    /// query reader does it, so `"a,b"` adds two values and `""` adds none.
    pub fn add_filter(&mut self, field: &str, value: impl Into<String>) {
        let added = query_codec::normalize_values(field, [value.into()]);
        let mut values = self.current_values(field).unwrap_or_default();
        for value in added {
            if !values.contains(&value) {
                values.push(value);
            }
        }
        if self.config.matches_defaults(field, &values) {
            self.current_filters.remove(field);
        } else {
            self.store(field, values);
        }
        self.push_current_filters_to_history();
    }

    pub fn remove_filter(&mut self, field: &str, value: &str) {
        let removed = query_codec::normalize_values(field, [value.to_string()]);
        if let Some(mut values) = self.current_values(field) {
            values.retain(|v| !removed.contains(v));
            self.store(field, values);
        }
        self.push_current_filters_to_history();
    }

    pub fn replace_filter(&mut self, field: &str, values: Vec<String>) {
        self.store(field, query_codec::normalize_values(field, values));
        self.push_current_filters_to_history();
    }

    pub fn toggle_filters<S: AsRef<str>>(&mut self, field: &str, values: &[S], add: bool) {
        for value in values {
            if add {
                self.add_filter(field, value.as_ref());
            } else {
                self.remove_filter(field, value.as_ref());
            }
        }
    }

    /// Turns off each of `statuses` that is on and turns on the rest, with a
    /// single history entry.
    pub fn toggle_result_statuses<S: AsRef<str>>(&mut self, statuses: &[S]) {
        let toggled = query_codec::normalize_values(
            RESULT_STATUS,
            statuses.iter().map(|s| s.as_ref().to_string()),
        );
        let current = self.result_statuses();
        let to_add: Vec<String> = toggled
            .iter()
            .filter(|s| !current.contains(s))
            .cloned()
            .collect();
        let mut values: Vec<String> = current
            .into_iter()
            .filter(|c| !toggled.contains(c))
            .collect();
        values.extend(to_add);
        self.store(RESULT_STATUS, values);
        self.push_current_filters_to_history();
    }

    pub fn toggle_in_progress(&mut self) {
        self.toggle_result_statuses(IN_PROGRESS_STATUSES);
    }

    pub fn toggle_classified_filter(&mut self, classified_state: &str) {
        if self.classified_states().iter().any(|s| s == classified_state) {
            self.remove_filter(CLASSIFIED_STATE, classified_state);
        } else {
            self.add_filter(CLASSIFIED_STATE, classified_state);
        }
    }

    pub fn toggle_unclassified_failures(&mut self) {
        if self.is_unclassified_failures() {
            self.reset_non_field_filters();
        } else {
            self.set_only_unclassified_failures();
        }
    }

    pub fn set_only_unclassified_failures(&mut self) {
        self.store(RESULT_STATUS, owned(FAILURE_RESULTS));
        self.store(CLASSIFIED_STATE, owned(&[UNCLASSIFIED]));
        self.push_current_filters_to_history();
    }

    pub fn set_only_superseded(&mut self) {
        let classified = self.config.defaults_for(CLASSIFIED_STATE).to_vec();
        self.store(RESULT_STATUS, owned(&[SUPERSEDED]));
        self.store(CLASSIFIED_STATE, classified);
        self.push_current_filters_to_history();
    }

    /// Puts result status and classification back to their defaults so the
    /// user sees everything again. Field filters are kept.
    pub fn reset_non_field_filters(&mut self) {
        self.current_filters.remove(RESULT_STATUS);
        self.current_filters.remove(CLASSIFIED_STATE);
        self.push_current_filters_to_history();
    }

    /// Drops every filter. Parameters that are not filters stay in the URL.
    pub fn clear_all_filters(&mut self) {
        self.current_filters.clear();
        self.push_current_filters_to_history();
    }

    /// Whether the view shows only unclassified failures.
    pub fn is_unclassified_failures(&self) -> bool {
        same_values(&self.result_statuses(), FAILURE_RESULTS)
            && same_values(&self.classified_states(), &[UNCLASSIFIED])
    }

    fn push_current_filters_to_history(&mut self) {
        let query = self.query_string();
        tracing::debug!("pushing filters to history: {}?{}", self.path, query);
        self.history.push(&self.path, &query);
    }

    /// Filters in effect: explicit values over the configured defaults.
    fn effective_filters(&self) -> FilterState {
        let mut filters = self.config.defaults.clone();
        filters.extend(self.current_filters.iter().map(|(f, v)| (f.clone(), v.clone())));
        filters
    }

    fn effective(&self, field: &str) -> Vec<String> {
        self.current_values(field).unwrap_or_default()
    }

    /// Field filters shown to the user. Result status, classification and
    /// the search string are left out.
    pub fn field_filters(&self) -> BTreeMap<String, Vec<String>> {
        let mut filters = self.effective_filters();
        for excluded in [RESULT_STATUS, CLASSIFIED_STATE, SEARCH_STR] {
            filters.remove(excluded);
        }
        filters
    }

    pub fn result_statuses(&self) -> Vec<String> {
        self.effective(RESULT_STATUS)
    }

    pub fn classified_states(&self) -> Vec<String> {
        self.effective(CLASSIFIED_STATE)
    }

    pub fn search_terms(&self) -> Vec<String> {
        self.effective(SEARCH_STR)
    }

    pub fn non_filter_params(&self) -> QueryParams {
        self.non_filter_params.clone()
    }

    /// Revision range, author and date bounds carried next to the filters.
    pub fn pass_through_params(&self) -> QueryParams {
        QueryParams(
            self.non_filter_params
                .0
                .iter()
                .filter(|(key, _)| NON_FIELD_FILTERS.contains(&key.as_str()))
                .cloned()
                .collect(),
        )
    }

    pub fn field_choices(&self) -> BTreeMap<String, FieldChoice> {
        self.config.catalog.field_choices()
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn query_string(&self) -> String {
        query_codec::serialize(&self.current_filters, &self.non_filter_params, &self.config)
    }

    pub fn url(&self) -> String {
        format!("{}?{}", self.path, self.query_string())
    }

    /// Snapshot of the current filters for evaluating many jobs.
    pub fn matcher(&self) -> JobMatcher {
        let mut filters = self.effective_filters();
        let result_statuses = filters.remove(RESULT_STATUS).unwrap_or_default();
        let classified_states = filters.remove(CLASSIFIED_STATE).unwrap_or_default();
        JobMatcher::new(&result_statuses, &classified_states, &filters, self.config.clone())
    }

    pub fn show_job(&self, job: &Job) -> bool {
        self.matcher().show_job(job)
    }

    pub fn is_job_unclassified_failure(&self, job: &Job) -> bool {
        FAILURE_RESULTS.contains(&job.result.as_str()) && !job.is_classified(&self.config)
    }
}
