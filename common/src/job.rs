//! Job records as delivered by the job data API.

use serde::{Deserialize, Serialize};

use crate::filter_config::FilterConfig;
use crate::filter_const::{PLATFORM, SEARCH_STR, TIER};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub id: u64,
    /// `pending`, `running`, `completed` or `runnable`.
    pub state: String,
    pub result: String,
    pub platform: String,
    pub platform_option: String,
    /// Runnable jobs carry no tier.
    pub tier: Option<u32>,
    pub failure_classification_id: u32,
    pub job_type_name: String,
    pub job_type_symbol: String,
    pub job_group_name: String,
    pub job_group_symbol: String,
    pub ref_data_name: String,
    pub build_system_type: String,
    pub machine_name: String,
    pub signature: String,
}

/// One page of the job list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobList {
    pub results: Vec<Job>,
}

impl Job {
    /// Result for completed jobs, otherwise the scheduling state.
    pub fn status(&self) -> &str {
        if self.state == "completed" {
            &self.result
        } else {
            &self.state
        }
    }

    pub fn platform_display(&self, config: &FilterConfig) -> String {
        format!(
            "{} {}",
            config.platform_display_name(&self.platform),
            self.platform_option
        )
        .trim()
        .to_string()
    }

    /// Text matched by free-text search. Built on demand rather than stored
    /// with every job.
    pub fn search_str(&self, config: &FilterConfig) -> String {
        let platform = self.platform_display(config);
        [
            platform.as_str(),
            self.job_group_name.as_str(),
            self.job_group_symbol.as_str(),
            self.job_type_name.as_str(),
            self.job_type_symbol.as_str(),
            self.ref_data_name.as_str(),
            self.signature.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Value of `field` as seen by the filters, or `None` when the job has
    /// nothing for it.
    pub fn field_value(&self, field: &str, config: &FilterConfig) -> Option<String> {
        let value = match field {
            PLATFORM => self.platform_display(config),
            SEARCH_STR => self.search_str(config),
            TIER => return self.tier.map(|t| t.to_string()),
            "failure_classification_id" => self.failure_classification_id.to_string(),
            "id" => self.id.to_string(),
            "state" => self.state.clone(),
            "result" => self.result.clone(),
            "platform_option" => self.platform_option.clone(),
            "job_type_name" => self.job_type_name.clone(),
            "job_type_symbol" => self.job_type_symbol.clone(),
            "job_group_name" => self.job_group_name.clone(),
            "job_group_symbol" => self.job_group_symbol.clone(),
            "ref_data_name" => self.ref_data_name.clone(),
            "build_system_type" => self.build_system_type.clone(),
            "machine_name" => self.machine_name.clone(),
            "signature" => self.signature.clone(),
            _ => return None,
        };
        if value.trim().is_empty() { None } else { Some(value) }
    }

    pub fn is_classified(&self, config: &FilterConfig) -> bool {
        !config.unclassified_ids.contains(&self.failure_classification_id)
    }
}
