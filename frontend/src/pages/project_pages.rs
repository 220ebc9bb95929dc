//! Tab pages shown inside the project layout.

use common::{project_data::PageType, query_params::QueryParams};
use dioxus::prelude::*;

use crate::{
    api::project_api::{load_page, load_project, page_text},
    components::{
        document_components::document_browser::DocumentBrowser,
        error_boundary::ComponentErrorDisplay,
        project_components::{
            activity_feed::ActivityFeed, comment_period_badge::CommentPeriodBadge, text_section::TextSection,
        },
    },
};

#[component]
pub fn OverviewPage(id: u32) -> Element {
    let page = match load_page(id, PageType::Overview) {
        Ok(page) => page,
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{e:#}") } },
    };
    let periods = page.comment_periods.clone();
    let paragraphs = page.text.clone();
    rsx! {
        Title { "Overview" }
        CommentPeriodBadge { periods }
        TextSection { title: "Overview", paragraphs }
        ActivityFeed { project_id: id, page_type: PageType::Overview }
    }
}

#[component]
pub fn BackgroundPage(id: u32) -> Element {
    let paragraphs = match load_project(id) {
        Ok(project) => project.background.clone(),
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{e:#}") } },
    };
    rsx! {
        Title { "Background" }
        TextSection { title: "Background", paragraphs }
    }
}

#[component]
pub fn AuthorizationsPage(id: u32) -> Element {
    rsx! {
        Title { "Authorizations" }
        TextPage { id, page_type: PageType::Authorizations, title: "Authorizations" }
    }
}

#[component]
pub fn NationsPage(id: u32) -> Element {
    rsx! {
        Title { "Nations" }
        TextPage { id, page_type: PageType::Nations, title: "Nations" }
    }
}

#[component]
pub fn PlansPage(id: u32) -> Element {
    rsx! {
        Title { "Plans" }
        TextPage { id, page_type: PageType::Plans, title: "Plans" }
    }
}

#[component]
pub fn CompliancePage(id: u32, query: QueryParams) -> Element {
    let paragraphs = page_text(id, PageType::Compliance);
    rsx! {
        Title { "Compliance" }
        TextSection { title: "Compliance & Enforcement", paragraphs }
        DocumentBrowser { project_id: id, query }
    }
}

#[component]
pub fn MapPage(id: u32) -> Element {
    rsx! {
        Title { "Map" }
        div {
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                height: 400px;
                background: #E5E7EB;
                border-radius: 10px;
                color: #6B7280;
                font-size: 18px;
            ",
            "The project map is not available yet."
        }
    }
}

/// Page text followed by the page's activity feed.
#[component]
fn TextPage(id: u32, page_type: PageType, title: String) -> Element {
    let paragraphs = page_text(id, page_type);
    rsx! {
        TextSection { title, paragraphs }
        ActivityFeed { project_id: id, page_type }
    }
}
