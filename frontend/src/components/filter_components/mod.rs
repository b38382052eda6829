pub mod filters_menu;
pub mod nav_dropdown;
pub mod tiers_menu;
