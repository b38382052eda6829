//! Top navigation bar with the job filter menus.

use dioxus::prelude::*;

use crate::components::filter_components::filters_menu::FiltersMenu;
use crate::components::filter_components::tiers_menu::TiersMenu;
use crate::data_definitions::filter_context::FilterContext;

#[component]
pub fn PrimaryNavBar() -> Element {
    let mut filter_model = use_context::<FilterContext>().filter_model;
    let unclassified_only = use_memo(move || filter_model.read().is_unclassified_failures());

    rsx! {
        nav {
            id: "x-global-navbar",
            style: "
                display:flex;
                flex-direction: row;
                gap: 16px;
                align-items: center;
                width: 100%;
                padding: 8px 16px;
                background-color: #1C212D;
                color: white;
                box-sizing: border-box;
            ",

            span { style: "font-size: 20px;", "Jobs" }

            // empty space
            div { style: "flex-grow:1;" }

            button {
                title: "Toggle showing only unclassified failures",
                onclick: move |_| filter_model.write().toggle_unclassified_failures(),
                if unclassified_only() {
                    "Show all"
                } else {
                    "Unclassified failures"
                }
            }
            TiersMenu {}
            FiltersMenu {}
            button {
                title: "Remove every filter",
                onclick: move |_| filter_model.write().clear_all_filters(),
                "Clear filters"
            }
        }
    }
}
