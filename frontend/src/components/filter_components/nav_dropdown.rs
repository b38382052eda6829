use common::filter_menu::MenuCheckbox;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowDropDown;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};
use dioxus_free_icons::Icon;

#[component]
pub fn NavDropdown(label: ReadSignal<String>, children: Element) -> Element {
    let mut expanded = use_signal(|| false);
    rsx! {
        span {
            style: "position: relative;",
            button {
                style: "display: flex; align-items: center; gap: 4px; cursor: pointer;",
                onclick: move |_| {
                    let now = expanded();
                    expanded.set(!now);
                },
                "{label}"
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
            }
            if expanded() {
                div {
                    style: "
                        position: absolute;
                        right: 0px;
                        top: 32px;
                        min-width: 200px;
                        padding: 8px;
                        background-color: white;
                        color: black;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 5px;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        z-index: 1000;
                    ",
                    {children}
                }
            }
        }
    }
}

#[component]
pub fn MenuCheckboxRow(item: ReadSignal<MenuCheckbox>, on_toggle: EventHandler<String>) -> Element {
    let MenuCheckbox { value, label, checked, disabled, title } = item();
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    rsx! {
        div {
            class: "x-dropdown-item",
            title: "{title}",
            style: "display: flex; flex-direction: row; gap: 6px; align-items: center; padding: 2px; cursor: {cursor};",
            onclick: move |_| {
                if !disabled {
                    on_toggle.call(value.clone());
                }
            },
            if checked {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; flex-shrink: 0;" }
            }
            "{label}"
        }
    }
}
