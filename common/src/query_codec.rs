//! Reading and writing filters in a URL query string.
//!
//! Every filter parameter is keyed `filter-<field>`. A field may be given
//! either as repeated keys (`filter-tier=1&filter-tier=3`) or as one
//! comma-joined value (`filter-tier=1,3`); both read the same. Written
//! queries always use repeated keys, since free-text search terms may
//! contain commas.

use std::collections::BTreeMap;

use url::form_urlencoded;
use url::Url;

use crate::filter_config::FilterConfig;
use crate::filter_const::{FILTER_PREFIX, SEARCH_STR};
use crate::filter_error::FilterResult;

/// Field name to its ordered filter values.
pub type FilterState = BTreeMap<String, Vec<String>>;

/// Decoded query string pairs, in the order they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(pub Vec<(String, String)>);

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self(form_urlencoded::parse(query.as_bytes()).into_owned().collect())
    }

    pub fn from_url(url: &str) -> FilterResult<Self> {
        let url = Url::parse(url)?;
        Ok(Self(url.query_pairs().into_owned().collect()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The pairs encoded back into a query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(self.iter());
        serializer.finish()
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(value: Vec<(String, String)>) -> Self {
        QueryParams(value)
    }
}

fn without_prefix(key: &str) -> Option<&str> {
    key.strip_prefix(FILTER_PREFIX)
}

/// Values for `field` the way they read back from a query string: split on
/// commas (except search terms), empty values dropped, first occurrence kept.
pub fn normalize_values(field: &str, values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for value in values {
        let parts: Vec<String> = if field == SEARCH_STR {
            vec![value]
        } else {
            value.split(',').map(str::to_string).collect()
        };
        for part in parts {
            if !part.is_empty() && !normalized.contains(&part) {
                normalized.push(part);
            }
        }
    }
    normalized
}

/// Filters named in the query, with the configured defaults underneath for
/// every field the query leaves out.
pub fn parse_filters(params: &QueryParams, config: &FilterConfig) -> FilterState {
    let mut grouped: FilterState = BTreeMap::new();
    for (key, value) in params.iter() {
        if let Some(field) = without_prefix(key) {
            grouped.entry(field.to_string()).or_default().push(value.to_string());
        }
    }

    let mut state: FilterState = config.defaults.clone();
    for (field, raw) in grouped {
        let values = normalize_values(&field, raw);
        if !values.is_empty() {
            state.insert(field, values);
        }
    }
    state
}

/// Every parameter that is not a filter, untouched.
pub fn parse_non_filter_params(params: &QueryParams) -> QueryParams {
    QueryParams(
        params
            .0
            .iter()
            .filter(|(key, _)| without_prefix(key).is_none())
            .cloned()
            .collect(),
    )
}

/// Canonical query string for `state`. Fields holding exactly their default
/// values are left out, so equal filter sets always produce equal URLs.
pub fn serialize(state: &FilterState, non_filter_params: &QueryParams, config: &FilterConfig) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(non_filter_params.iter());
    for (field, values) in state {
        if values.is_empty() || config.matches_defaults(field, values) {
            continue;
        }
        let key = format!("{FILTER_PREFIX}{field}");
        for value in values {
            serializer.append_pair(&key, value);
        }
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_const::{CLASSIFIED_STATE, RESULT_STATUS, TIER};
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn repeated_and_comma_joined_keys_read_the_same() {
        let config = FilterConfig::default();
        let repeated = parse_filters(
            &QueryParams::parse("?filter-resultStatus=busted&filter-resultStatus=exception"),
            &config,
        );
        let joined = parse_filters(&QueryParams::parse("filter-resultStatus=busted,exception"), &config);
        assert_eq!(repeated, joined);
        assert_eq!(repeated[RESULT_STATUS], strings(&["busted", "exception"]));
    }

    #[test]
    fn defaults_fill_fields_missing_from_the_query() {
        let config = FilterConfig::default();
        let state = parse_filters(&QueryParams::parse("repo=autoland&filter-tier=3"), &config);
        assert_eq!(state[TIER], strings(&["3"]));
        assert_eq!(state[CLASSIFIED_STATE], strings(&["classified", "unclassified"]));
        assert_eq!(state[RESULT_STATUS], config.defaults[RESULT_STATUS]);
        assert!(!state.contains_key("repo"));
    }

    #[test]
    fn search_terms_keep_their_commas() {
        let config = FilterConfig::default();
        let state = parse_filters(&QueryParams::parse("filter-searchStr=a%2Cb"), &config);
        assert_eq!(state[SEARCH_STR], strings(&["a,b"]));
    }

    #[test]
    fn empty_values_are_dropped() {
        let config = FilterConfig::default();
        let state = parse_filters(&QueryParams::parse("filter-job_type_symbol="), &config);
        assert!(!state.contains_key("job_type_symbol"));
    }

    #[test]
    fn repeated_values_collapse() {
        let config = FilterConfig::default();
        let state = parse_filters(
            &QueryParams::parse("filter-tier=3&filter-tier=1,3&filter-tier=&filter-searchStr=a,b&filter-searchStr=a,b"),
            &config,
        );
        assert_eq!(state[TIER], strings(&["3", "1"]));
        assert_eq!(state[SEARCH_STR], strings(&["a,b"]));
    }

    #[test]
    fn non_filter_params_pass_through_in_order() {
        let params = QueryParams::parse("repo=autoland&filter-tier=3&selectedJob=12&author=a%40b.c");
        let rest = parse_non_filter_params(&params);
        assert_eq!(
            rest.0,
            vec![
                ("repo".to_string(), "autoland".to_string()),
                ("selectedJob".to_string(), "12".to_string()),
                ("author".to_string(), "a@b.c".to_string()),
            ]
        );
        assert_eq!(rest.to_query_string(), "repo=autoland&selectedJob=12&author=a%40b.c");
    }

    #[test]
    fn defaults_are_omitted_whatever_their_encoding() {
        let config = FilterConfig::default();
        let a = parse_filters(&QueryParams::parse("filter-classifiedState=classified,unclassified"), &config);
        let b = parse_filters(
            &QueryParams::parse("filter-classifiedState=unclassified&filter-classifiedState=classified"),
            &config,
        );
        let rest = QueryParams::parse("repo=try");
        assert_eq!(serialize(&a, &rest, &config), "repo=try");
        assert_eq!(serialize(&b, &rest, &config), "repo=try");
    }

    #[test]
    fn writes_repeated_keys() {
        let config = FilterConfig::default();
        let mut state = config.defaults.clone();
        state.insert(TIER.to_string(), strings(&["1", "3"]));
        state.insert(SEARCH_STR.to_string(), strings(&["mochitest devtools"]));
        assert_eq!(
            serialize(&state, &QueryParams::default(), &config),
            "filter-searchStr=mochitest+devtools&filter-tier=1&filter-tier=3"
        );
    }

    #[test]
    fn absolute_urls_are_parsed() {
        let params = QueryParams::from_url("https://ci.example.org/jobs?repo=try&filter-tier=3").unwrap();
        assert_eq!(params.0.len(), 2);
        assert!(QueryParams::from_url("not a url").is_err());
    }
}
