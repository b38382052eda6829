//! Deciding whether a job is visible under a set of filters.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::field_catalog::MatchType;
use crate::filter_config::FilterConfig;
use crate::filter_const::{CLASSIFIED, RUNNABLE, UNCLASSIFIED};
use crate::job::Job;

#[derive(Debug, Clone, PartialEq)]
struct FieldFilter {
    field: String,
    match_type: MatchType,
    /// Lowercased.
    values: Vec<String>,
}

impl FieldFilter {
    fn accepts(&self, job_value: &str) -> bool {
        match self.match_type {
            MatchType::Substr => self.values.iter().any(|v| job_value.contains(v.as_str())),
            MatchType::SearchStr => self.values.iter().all(|v| job_value.contains(v.as_str())),
            MatchType::Exactstr | MatchType::Choice => self.values.iter().any(|v| v == job_value),
        }
    }
}

/// Snapshot of a filter set, detached from the model that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct JobMatcher {
    result_statuses: BTreeSet<String>,
    classified_states: BTreeSet<String>,
    field_filters: Vec<FieldFilter>,
    config: Arc<FilterConfig>,
}

impl JobMatcher {
    pub fn new<'a>(
        result_statuses: &[String],
        classified_states: &[String],
        field_filters: impl IntoIterator<Item = (&'a String, &'a Vec<String>)>,
        config: Arc<FilterConfig>,
    ) -> Self {
        let field_filters = field_filters
            .into_iter()
            .map(|(field, values)| FieldFilter {
                field: field.clone(),
                match_type: config.catalog.match_type(field),
                values: values.iter().map(|v| v.to_lowercase()).collect(),
            })
            .collect();
        Self {
            result_statuses: result_statuses.iter().cloned().collect(),
            classified_states: classified_states.iter().cloned().collect(),
            field_filters,
            config,
        }
    }

    /// Whether `job` passes every active filter.
    ///
    /// Runnable jobs have not run, so they skip the result status and
    /// classification checks; field filters still apply to them.
    pub fn show_job(&self, job: &Job) -> bool {
        if job.status() != RUNNABLE {
            if !self.result_statuses.contains(job.status()) {
                return false;
            }
            if !self.passes_classified_state(job) {
                return false;
            }
        }
        self.passes_field_filters(job)
    }

    fn passes_classified_state(&self, job: &Job) -> bool {
        let is_classified = job.is_classified(&self.config);
        if !is_classified && !self.classified_states.contains(UNCLASSIFIED) {
            return false;
        }
        !(is_classified && !self.classified_states.contains(CLASSIFIED))
    }

    fn passes_field_filters(&self, job: &Job) -> bool {
        self.field_filters.iter().all(|filter| {
            // a field the job doesn't have can't reject it
            match job.field_value(&filter.field, &self.config) {
                Some(value) => filter.accepts(&value.to_lowercase()),
                None => true,
            }
        })
    }
}
