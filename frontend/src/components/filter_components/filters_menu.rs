use common::filter_const::FILTER_GROUPS;
use common::filter_menu::{classified_state_items, result_status_items, toggle_result_status_group};
use dioxus::prelude::*;

use crate::components::filter_components::nav_dropdown::{MenuCheckboxRow, NavDropdown};
use crate::data_definitions::filter_context::FilterContext;

/// Result status and classification checkboxes.
#[component]
pub fn FiltersMenu() -> Element {
    let mut filter_model = use_context::<FilterContext>().filter_model;
    let status_items = use_memo(move || result_status_items(&*filter_model.read()));
    let classified_items = use_memo(move || classified_state_items(&*filter_model.read()));

    rsx! {
        NavDropdown {
            label: "Filters".to_string(),
            for (group, _) in FILTER_GROUPS.iter() {
                div {
                    key: "{group}",
                    class: "x-dropdown-item",
                    title: "Toggle all {group} statuses",
                    style: "cursor: pointer; padding: 2px; font-weight: 500;",
                    onclick: move |_| toggle_result_status_group(&mut *filter_model.write(), group),
                    "{group}"
                }
            }
            hr {}
            for item in status_items() {
                MenuCheckboxRow {
                    key: "{item.value}",
                    item: item.clone(),
                    on_toggle: move |status: String| filter_model.write().toggle_result_statuses(&[status]),
                }
            }
            hr {}
            for item in classified_items() {
                MenuCheckboxRow {
                    key: "{item.value}",
                    item: item.clone(),
                    on_toggle: move |state: String| filter_model.write().toggle_classified_filter(&state),
                }
            }
            hr {}
            div {
                class: "x-dropdown-item",
                title: "Show only superseded jobs",
                style: "cursor: pointer; padding: 2px;",
                onclick: move |_| filter_model.write().set_only_superseded(),
                "Superseded only"
            }
            div {
                class: "x-dropdown-item",
                title: "Reset to default status filters",
                style: "cursor: pointer; padding: 2px;",
                onclick: move |_| filter_model.write().reset_non_field_filters(),
                "Reset"
            }
        }
    }
}
