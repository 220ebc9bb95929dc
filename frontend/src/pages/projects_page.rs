use common::project_data::{ProjectDataService, ProjectSummary};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowForward};

use crate::routes::Route;

/// Landing page listing every project.
#[component]
pub fn ProjectsPage() -> Element {
    let home = ProjectDataService::bundled().home();
    let title = home.title.clone();
    let text = home.text.clone();
    let projects = home.projects.clone();

    rsx! {
        Title { "LNG Projects" }
        div {
            id: "x-projects-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            h1 {
                style: "color: #003366; font-size: 40px; font-weight: 500; margin: 0;",
                "{title}"
            }
            for (index, paragraph) in text.into_iter().enumerate() {
                p {
                    key: "{index}",
                    style: "font-size: 18px; color: #475569; margin: 0; max-width: 900px;",
                    "{paragraph}"
                }
            }

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                if projects.is_empty() {
                    div { style: "color: #6B7280;", "No projects are available." }
                }
                for project in projects {
                    ProjectCard { key: "{project.id}", project }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: ProjectSummary) -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 420px;
                background: white;
                border-radius: 14px;
                border: 1px solid #E5E7EB;
                padding: 24px;
                box-shadow: 0 1px 2px rgba(0,0,0,0.04);
            ",
            div {
                style: "font-size: 24px; font-weight: 500; color: #0F172A;",
                "{project.name}"
            }
            div {
                style: "font-size: 15px; color: #6B7280;",
                "{project.proponent} · {project.location}"
            }
            div {
                style: "font-size: 16px; color: #334155; line-height: 1.5; flex-grow: 1;",
                "{project.summary}"
            }
            Link {
                to: Route::OverviewPage { id: project.id },
                style: "
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    align-self: flex-start;
                    background: #003366;
                    color: white;
                    text-decoration: none;
                    padding: 10px 16px;
                    border-radius: 10px;
                    font-weight: 500;
                ",
                "View project"
                Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
            }
        }
    }
}
