//! Checkbox entries for the filter and tier menus.

use crate::filter_const::{
    ALL_RESULT_STATUSES, CLASSIFIED, FILTER_GROUPS, RESULT_STATUS, RUNNABLE, TIER, TIERS, UNCLASSIFIED,
};
use crate::filter_model::FilterModel;
use crate::history_sink::HistorySink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCheckbox {
    /// Value handed back to the filter model when toggled.
    pub value: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
    pub title: String,
}

impl MenuCheckbox {
    fn new(value: &str, label: String, checked: bool) -> Self {
        Self {
            value: value.to_string(),
            label,
            checked,
            disabled: false,
            title: String::new(),
        }
    }
}

/// One checkbox per result status. Runnable jobs are always shown, so they get
/// no checkbox.
pub fn result_status_items<H: HistorySink>(model: &FilterModel<H>) -> Vec<MenuCheckbox> {
    let active = model.result_statuses();
    ALL_RESULT_STATUSES
        .iter()
        .filter(|status| **status != RUNNABLE)
        .map(|status| MenuCheckbox::new(status, status.to_string(), active.iter().any(|a| a == status)))
        .collect()
}

pub fn classified_state_items<H: HistorySink>(model: &FilterModel<H>) -> Vec<MenuCheckbox> {
    let active = model.classified_states();
    [CLASSIFIED, UNCLASSIFIED]
        .into_iter()
        .map(|state| MenuCheckbox::new(state, state.to_string(), active.iter().any(|a| a == state)))
        .collect()
}

/// Tier checkboxes. The last shown tier cannot be unchecked.
pub fn tier_items<H: HistorySink>(model: &FilterModel<H>) -> Vec<MenuCheckbox> {
    let shown = model.field_filters().remove(TIER).unwrap_or_default();
    TIERS
        .iter()
        .map(|tier| {
            let checked = shown.iter().any(|s| s == tier);
            let mut item = MenuCheckbox::new(tier, format!("tier {tier}"), checked);
            if checked && shown.len() == 1 {
                item.disabled = true;
                item.title = "Must have at least one tier selected at all times".to_string();
            }
            item
        })
        .collect()
}

/// Flips one tier as the tier menu does.
pub fn toggle_tier<H: HistorySink>(model: &mut FilterModel<H>, tier: &str) {
    let shown = model.field_filters().remove(TIER).unwrap_or_default();
    let add = !shown.iter().any(|s| s == tier);
    model.toggle_filters(TIER, &[tier], add);
}

/// Checks or unchecks a whole group of result statuses. A partly checked
/// group gets completed.
pub fn toggle_result_status_group<H: HistorySink>(model: &mut FilterModel<H>, group: &str) {
    let Some((_, statuses)) = FILTER_GROUPS.iter().find(|(name, _)| *name == group) else {
        tracing::debug!("unknown result status group {group}");
        return;
    };
    let active = model.result_statuses();
    let all_on = statuses.iter().all(|s| active.iter().any(|a| a == s));
    model.toggle_filters(RESULT_STATUS, *statuses, !all_on);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history_sink::MemoryHistory;
    use pretty_assertions::assert_eq;

    fn model(query: &str) -> FilterModel<MemoryHistory> {
        FilterModel::from_query(query, MemoryHistory::default())
    }

    #[test]
    fn runnable_has_no_checkbox() {
        let items = result_status_items(&model(""));
        assert_eq!(items.len(), ALL_RESULT_STATUSES.len() - 1);
        assert!(items.iter().all(|i| i.value != RUNNABLE));
        let superseded = items.iter().find(|i| i.value == "superseded").unwrap();
        assert!(!superseded.checked);
    }

    #[test]
    fn only_tier_is_disabled() {
        let items = tier_items(&model("filter-tier=2"));
        let checked: Vec<_> = items.iter().map(|i| (i.checked, i.disabled)).collect();
        assert_eq!(checked, vec![(false, false), (true, true), (false, false)]);
        assert_eq!(items[1].label, "tier 2");
    }

    #[test]
    fn toggling_a_tier_round_trips() {
        let mut m = model("");
        toggle_tier(&mut m, "3");
        assert!(tier_items(&m)[2].checked);
        toggle_tier(&mut m, "3");
        assert_eq!(m.query_string(), "");
    }

    #[test]
    fn groups_toggle_as_a_whole() {
        let mut m = model("filter-resultStatus=busted,success");
        toggle_result_status_group(&mut m, "failures");
        let active = m.result_statuses();
        assert!(["testfailed", "busted", "exception"].iter().all(|s| active.iter().any(|a| a == s)));
        toggle_result_status_group(&mut m, "failures");
        assert_eq!(m.result_statuses(), vec!["success"]);
        toggle_result_status_group(&mut m, "no such group");
        assert_eq!(m.result_statuses(), vec!["success"]);
    }

    #[test]
    fn classified_items_follow_the_model() {
        let items = classified_state_items(&model("filter-classifiedState=unclassified"));
        assert_eq!(
            items.iter().map(|i| i.checked).collect::<Vec<_>>(),
            vec![false, true]
        );
    }
}
