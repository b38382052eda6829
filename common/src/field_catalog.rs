//! Catalog of the job fields a user can filter on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter_const::SEARCH_STR;
use crate::filter_error::{FilterError, FilterResult};

/// How a field filter's values are compared against a job's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    /// The job value must equal one of the filter values.
    Exactstr,
    /// At least one filter value must be a substring of the job value.
    Substr,
    /// Every filter value must be a substring of the job value.
    SearchStr,
    /// The job value must be one of the filter values.
    Choice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChoice {
    pub name: String,
    pub match_type: MatchType,
}

impl FieldChoice {
    fn new(name: &str, match_type: MatchType) -> Self {
        Self {
            name: name.to_string(),
            match_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    fields: BTreeMap<String, FieldChoice>,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        use MatchType::*;
        let fields = [
            ("ref_data_name", "buildername/jobname", Substr),
            ("build_system_type", "build system", Substr),
            ("job_type_name", "job name", Substr),
            ("job_type_symbol", "job symbol", Exactstr),
            ("job_group_name", "group name", Substr),
            ("job_group_symbol", "group symbol", Exactstr),
            ("machine_name", "machine name", Substr),
            ("platform", "platform", Substr),
            ("tier", "tier", Exactstr),
            ("failure_classification_id", "failure classification", Choice),
            // text search across multiple fields
            (SEARCH_STR, "search string", SearchStr),
        ]
        .into_iter()
        .map(|(field, name, match_type)| (field.to_string(), FieldChoice::new(name, match_type)))
        .collect();
        Self { fields }
    }
}

impl FieldCatalog {
    pub fn get(&self, field: &str) -> Option<&FieldChoice> {
        self.fields.get(field)
    }

    /// Match type used for `field`. Ad-hoc fields outside the catalog are
    /// compared by exact value.
    pub fn match_type(&self, field: &str) -> MatchType {
        self.get(field).map(|c| c.match_type).unwrap_or(MatchType::Exactstr)
    }

    /// Field choices offered to the user. The search string is handled as a
    /// field filter internally, but never listed.
    pub fn field_choices(&self) -> BTreeMap<String, FieldChoice> {
        self.fields
            .iter()
            .filter(|(field, _)| field.as_str() != SEARCH_STR)
            .map(|(field, choice)| (field.clone(), choice.clone()))
            .collect()
    }

    pub fn validate_field(&self, field: &str) -> FilterResult<&FieldChoice> {
        self.get(field)
            .ok_or_else(|| FilterError::UnknownField(field.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_string_is_not_a_public_choice() {
        let catalog = FieldCatalog::default();
        let choices = catalog.field_choices();
        assert!(!choices.contains_key(SEARCH_STR));
        assert_eq!(choices.len(), 10);
        assert_eq!(catalog.match_type(SEARCH_STR), MatchType::SearchStr);
    }

    #[test]
    fn unknown_fields_fail_strict_validation() {
        let catalog = FieldCatalog::default();
        assert_eq!(catalog.validate_field("tier").unwrap().name, "tier");
        assert!(matches!(
            catalog.validate_field("nope"),
            Err(FilterError::UnknownField(f)) if f == "nope"
        ));
        assert_eq!(catalog.match_type("nope"), MatchType::Exactstr);
    }

    #[test]
    fn unknown_match_type_is_rejected_when_loading() {
        let ok: FieldCatalog =
            serde_json::from_str(r#"{"tier": {"name": "tier", "matchType": "choice"}}"#).unwrap();
        assert_eq!(ok.match_type("tier"), MatchType::Choice);

        let bad = serde_json::from_str::<FieldCatalog>(
            r#"{"tier": {"name": "tier", "matchType": "regex"}}"#,
        );
        assert!(bad.is_err());
    }
}
