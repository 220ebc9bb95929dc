//! Paginated activity updates for a project page.

use common::{
    constants::DEFAULT_ITEMS_PER_PAGE,
    document::Activity,
    paginator::Paginator,
    project_data::{PageType, ProjectDataService},
};
use dioxus::prelude::*;

use crate::components::pagination_controls::PaginationControls;

#[component]
pub fn ActivityFeed(project_id: ReadSignal<u32>, page_type: ReadSignal<PageType>) -> Element {
    let mut feed = use_signal(|| Paginator::<Activity>::new(Vec::new()));
    // reload whenever the project or page changes, starting again at page 1
    use_effect(move || {
        let activities = ProjectDataService::bundled().activities(project_id(), page_type()).to_vec();
        let mut feed = feed.write();
        feed.set_items(activities);
        feed.set_pagination(1, DEFAULT_ITEMS_PER_PAGE);
    });

    let current_page = feed.read().current_page();
    let page_count = feed.read().page_count();
    let first_index = feed.read().first_visible_index();
    let visible = feed
        .read()
        .visible_slice()
        .iter()
        .enumerate()
        .map(|(i, a)| (a.id.clone().unwrap_or_else(|| format!("activity-{}", first_index + i)), a.clone()))
        .collect::<Vec<_>>();

    rsx! {
        section {
            id: "x-activity-feed",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                margin-top: 24px;
            ",
            h2 { style: "font-size: 24px; font-weight: 500; margin: 0;", "Activity & Updates" }
            if visible.is_empty() {
                div { style: "color: #6B7280;", "No activity has been posted yet." }
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                for (key, activity) in visible {
                    li {
                        key: "{key}",
                        ActivityCard { activity }
                    }
                }
            }
            PaginationControls {
                current_page,
                page_count,
                on_step: move |step| {
                    feed.write().advance(step);
                },
                on_jump: move |page| {
                    feed.write().jump_to(page);
                },
            }
        }
    }
}

#[component]
fn ActivityCard(activity: Activity) -> Element {
    let date = activity.date.map(|d| d.format("%B %-d, %Y").to_string()).unwrap_or_default();
    let kind = activity.activity_type.clone().unwrap_or_default();
    let title = activity.title.clone().unwrap_or_else(|| "Untitled update".to_string());
    let description = activity.description.clone().unwrap_or_default();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                padding: 12px 16px;
                margin-bottom: 8px;
            ",
            div {
                style: "display: flex; flex-direction: row; gap: 12px; color: #6B7280; font-size: 14px;",
                span { "{date}" }
                if !kind.is_empty() {
                    span { style: "font-weight: 500; color: #003366;", "{kind}" }
                }
            }
            div { style: "font-size: 18px; font-weight: 500;", "{title}" }
            div { style: "font-size: 15px; color: #313132;", "{description}" }
        }
    }
}
