//! Job filter model shared by the job views.

extern crate serde;


pub mod filter_const;
pub mod filter_error;
pub mod field_catalog;
pub mod filter_config;
pub mod query_codec;
pub mod job;
pub mod job_matcher;
pub mod history_sink;
pub mod filter_model;
pub mod filter_menu;
pub mod fetch_status;
