//! Lookups into the bundled project data for the pages.

use anyhow::Context;
use common::project_data::{PageType, ProjectDataService, ProjectPageData, ProjectSummary};

pub fn load_project(id: u32) -> anyhow::Result<&'static ProjectSummary> {
    ProjectDataService::bundled().project(id).with_context(|| format!("there is no project with id {id}"))
}

pub fn load_page(id: u32, page_type: PageType) -> anyhow::Result<&'static ProjectPageData> {
    ProjectDataService::bundled()
        .page(id, page_type)
        .with_context(|| format!("failed to load the {page_type} page of project {id}"))
}

/// Text and activities degrade to empty for pages without data.
pub fn page_text(id: u32, page_type: PageType) -> Vec<String> {
    ProjectDataService::bundled().text(id, page_type).to_vec()
}
