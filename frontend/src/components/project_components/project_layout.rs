//! Project header and tab strip wrapped around every project page.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdBusiness};

use crate::{
    api::project_api::load_project,
    components::error_boundary::{ComponentErrorDisplay, GlobalErrorBoundary},
    routes::Route,
};

#[component]
pub fn ProjectLayout(id: u32) -> Element {
    let project = match load_project(id) {
        Ok(p) => p,
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{e:#}") } },
    };

    rsx! {
        div {
            id: "x-project-layout",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 14px;
                    padding: 24px 40px 8px 40px;
                ",
                Icon { icon: MdBusiness, style: "width: 36px; height: 36px; color:#003366;" }
                div {
                    h1 { style: "margin: 0; font-size: 32px; font-weight: 500;", "{project.name}" }
                    div { style: "color: #6B7280; font-size: 16px;", "{project.proponent} · {project.location}" }
                }
            }
            ProjectTabs { id }
            div {
                style: "padding: 20px 40px; flex-grow: 1;",
                GlobalErrorBoundary {
                    boundary_name: "Project".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn ProjectTabs(id: u32) -> Element {
    let tabs = [
        (Route::OverviewPage { id }, "Overview"),
        (Route::BackgroundPage { id }, "Background"),
        (Route::AuthorizationsPage { id }, "Authorizations"),
        (Route::compliance_page(id), "Compliance"),
        (Route::NationsPage { id }, "Nations"),
        (Route::PlansPage { id }, "Plans"),
        (Route::MapPage { id }, "Map"),
    ];
    let current = use_route::<Route>();
    let tabs = tabs.map(|(route, label)| {
        let is_active = std::mem::discriminant(&route) == std::mem::discriminant(&current);
        (route, label, if is_active { "x-project-tab active" } else { "x-project-tab" })
    });
    rsx! {
        nav {
            style: "
                display: flex;
                flex-direction: row;
                gap: 4px;
                padding: 0px 40px;
                border-bottom: 1px solid #D1D5DB;
                background: white;
            ",
            for (route, label, class) in tabs {
                Link {
                    key: "{label}",
                    class,
                    to: route,
                    "{label}"
                }
            }
        }
    }
}
