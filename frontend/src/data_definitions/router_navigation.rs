//! Router-backed navigation for the explore panel.

use common::{explore_panel::Navigation, query_params::QueryParams};
use dioxus::prelude::*;

use crate::routes::Route;

/// Reads the compliance page query from the route and writes it back with
/// `replace`, so filter changes do not pile up history entries.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterNavigation {
    project_id: u32,
    query: QueryParams,
}

impl RouterNavigation {
    pub fn new(project_id: u32, query: QueryParams) -> Self {
        Self { project_id, query }
    }

    /// Called when the router has finished a navigation.
    pub fn settle(&mut self, project_id: u32, query: QueryParams) {
        self.project_id = project_id;
        self.query = query;
    }
}

impl Navigation for RouterNavigation {
    fn current_query(&self) -> QueryParams {
        self.query.clone()
    }

    fn replace_query(&mut self, params: QueryParams) {
        self.query = params.clone();
        let route = Route::CompliancePage { id: self.project_id, query: params };
        if let Some(failure) = navigator().replace(route) {
            dioxus::logger::tracing::warn!("could not update filter url: {failure:?}");
        }
    }
}
