pub mod browser_history;
pub mod filter_context;
pub mod job_loader;
