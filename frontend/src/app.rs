use common::fetch_status::{FetchAction, FetchState};
use common::filter_model::FilterModel;
use common::job::Job;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::navbar::PrimaryNavBar;
use crate::data_definitions::browser_history::{current_path, current_query, BrowserHistory};
use crate::data_definitions::filter_context::FilterContext;
use crate::data_definitions::job_loader::{fetch_jobs, jobs_url};
use crate::pages::jobs_page::JobsPage;

#[component]
pub fn App() -> Element {
    let filter_model = use_signal(|| {
        let query = current_query().unwrap_or_else(|e| {
            error!("Starting without filters: {e:#}");
            String::new()
        });
        let path = current_path().unwrap_or_else(|_| "/".to_string());
        FilterModel::from_query(&query, BrowserHistory).with_path(&path)
    });
    let mut jobs = use_signal(FetchState::<Vec<Job>>::default);
    // only a change of repo/revision refetches; filters apply locally
    let url = use_memo(move || jobs_url(&filter_model.read().non_filter_params()));
    let loaded = use_resource(move || fetch_jobs(url()));
    use_effect(move || {
        let action = loaded.read().clone().unwrap_or(FetchAction::Requesting);
        let next = jobs.peek().clone().reduce(action);
        jobs.set(next);
    });
    use_context_provider(|| FilterContext { filter_model, jobs });
    use_hook(move || listen_for_navigation(filter_model));

    rsx! {
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            PrimaryNavBar {}
            JobsPage {}
        }
    }
}

/// Back/forward navigation changes the URL without going through the model,
/// so the filters are read again from the new location.
fn listen_for_navigation(mut filter_model: Signal<FilterModel<BrowserHistory>>) {
    let on_pop = Closure::<dyn FnMut()>::new(move || match (current_path(), current_query()) {
        (Ok(path), Ok(query)) => filter_model.write().rebuild_from_location(&path, &query),
        (Err(e), _) | (_, Err(e)) => error!("Failed to read the new location: {e:#}"),
    });
    let registered = web_sys::window()
        .map(|w| w.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref()));
    if let Some(Err(e)) = registered {
        error!("Failed to listen for navigation: {e:?}");
    }
    on_pop.forget();
}
