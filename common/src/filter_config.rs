//! Tunable tables behind the filter model.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::field_catalog::FieldCatalog;
use crate::filter_const::{
    CLASSIFIED_STATE, DEFAULT_CLASSIFIED_STATES, DEFAULT_RESULT_STATUSES, PLATFORM_MAP,
    RESULT_STATUS, TIER, DEFAULT_TIERS, UNCLASSIFIED_IDS,
};
use crate::filter_error::FilterResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Values assumed for a field when the URL does not mention it.
    pub defaults: BTreeMap<String, Vec<String>>,
    /// Platform code to the name shown to users.
    pub platform_map: BTreeMap<String, String>,
    pub unclassified_ids: BTreeSet<u32>,
    pub catalog: FieldCatalog,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for FilterConfig {
    fn default() -> Self {
        let defaults = BTreeMap::from([
            (RESULT_STATUS.to_string(), owned(DEFAULT_RESULT_STATUSES)),
            (CLASSIFIED_STATE.to_string(), owned(DEFAULT_CLASSIFIED_STATES)),
            (TIER.to_string(), owned(DEFAULT_TIERS)),
        ]);
        let platform_map = PLATFORM_MAP
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        Self {
            defaults,
            platform_map,
            unclassified_ids: UNCLASSIFIED_IDS.iter().copied().collect(),
            catalog: FieldCatalog::default(),
        }
    }
}

impl FilterConfig {
    /// Loads a configuration, falling back to the built-in tables for every
    /// key the document leaves out.
    pub fn from_json(json: &str) -> FilterResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            tracing::warn!("rejected filter configuration: {e}");
            e.into()
        })
    }

    /// Default values for `field`; empty when the field has none.
    pub fn defaults_for(&self, field: &str) -> &[String] {
        self.defaults.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `values` holds exactly the default values of `field`, in any
    /// order.
    pub fn matches_defaults(&self, field: &str, values: &[String]) -> bool {
        let defaults: BTreeSet<&str> = self.defaults_for(field).iter().map(String::as_str).collect();
        let values: BTreeSet<&str> = values.iter().map(String::as_str).collect();
        defaults == values
    }

    pub fn platform_display_name<'a>(&'a self, platform: &'a str) -> &'a str {
        self.platform_map
            .get(platform)
            .map(String::as_str)
            .unwrap_or(platform)
    }
}
