use common::filter_menu::{tier_items, toggle_tier};
use dioxus::prelude::*;

use crate::components::filter_components::nav_dropdown::{MenuCheckboxRow, NavDropdown};
use crate::data_definitions::filter_context::FilterContext;

/// Show/hide job tiers.
#[component]
pub fn TiersMenu() -> Element {
    let mut filter_model = use_context::<FilterContext>().filter_model;
    let items = use_memo(move || tier_items(&*filter_model.read()));

    rsx! {
        NavDropdown {
            label: "Tiers".to_string(),
            for item in items() {
                MenuCheckboxRow {
                    key: "{item.value}",
                    item: item.clone(),
                    on_toggle: move |tier: String| toggle_tier(&mut *filter_model.write(), &tier),
                }
            }
        }
    }
}
