//! Filterable, sortable, paginated document list of the compliance page.

use anyhow::Context;
use common::{
    constants::DEFAULT_ITEMS_PER_PAGE,
    document::DocumentRecord,
    explore_panel::ExplorePanel,
    filter_criteria::FilterCriteria,
    paginator::Paginator,
    predicate::filter_documents,
    project_data::{PageType, ProjectDataService},
    query_params::QueryParams,
    sorting::{DocumentSort, sort_documents},
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_editor_icons::MdInsertLink}};
use gloo_timers::future::TimeoutFuture;

use crate::{
    components::{
        document_components::{document_table::DocumentTable, explore_side_panel::ExploreSidePanel},
        pagination_controls::PaginationControls,
    },
    data_definitions::router_navigation::RouterNavigation,
};

#[derive(Clone, Copy)]
pub struct ExploreContext {
    pub panel: Signal<ExplorePanel<RouterNavigation>>,
    pub is_visible: Signal<bool>,
}

#[component]
pub fn DocumentBrowser(project_id: ReadSignal<u32>, query: ReadSignal<QueryParams>) -> Element {
    let mut active_filters = use_signal(FilterCriteria::default);
    let mut panel = use_signal(move || {
        let navigation = RouterNavigation::new(*project_id.peek(), query.peek().clone());
        ExplorePanel::new(navigation, move |criteria: &FilterCriteria| active_filters.set(criteria.clone()))
    });
    let is_visible = use_signal(|| false);
    use_context_provider(move || ExploreContext { panel, is_visible });

    // every settled navigation hands the new query to the panel, which
    // notifies only when the filters in it actually changed
    use_effect(move || {
        let id = project_id();
        let q = query();
        let mut panel = panel.write();
        panel.navigation_mut().settle(id, q);
        panel.navigation_settled();
    });

    let mut sort = use_signal(DocumentSort::default);
    let mut pages = use_signal(|| {
        let mut pages = Paginator::<DocumentRecord>::new(Vec::new());
        pages.set_pagination(1, DEFAULT_ITEMS_PER_PAGE);
        pages
    });
    let mut is_recomputing = use_signal(|| true);

    use_effect(move || {
        let criteria = active_filters();
        let sort = sort();
        let id = project_id();
        is_recomputing.set(true);
        spawn(async move {
            // let a burst of filter changes settle before rebuilding the list
            TimeoutFuture::new(0).await;
            let mut filtered = filter_documents(ProjectDataService::bundled().documents(id, PageType::Compliance), &criteria);
            sort_documents(&mut filtered, &sort);
            tracing::debug!("document list recomputed: {} documents", filtered.len());
            pages.write().set_items(filtered);
            is_recomputing.set(false);
        });
    });

    let filter_count_label = panel.read().filter_count_label();
    let current_page = pages.read().current_page();
    let page_count = pages.read().page_count();
    let total = pages.read().total_items();
    let visible = pages.read().visible_slice().to_vec();

    rsx! {
        div {
            id: "x-document-browser",
            style: "
                display: flex;
                flex-direction: row;
                gap: 20px;
                width: 100%;
                margin-top: 20px;
            ",
            div {
                style: "flex-grow: 1; min-width: 0;",
                div {
                    id: "x-document-browser-title-row",
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 12px;
                        margin-bottom: 12px;
                    ",
                    h2 { style: "font-size: 24px; font-weight: 500; margin: 0;", "Documents" }
                    span { style: "color: #6B7280;", "{total} found" }
                    div { style: "flex-grow: 1;" }
                    ExploreToggleButton { filter_count_label }
                    CopyLinkButton {}
                }
                if is_recomputing() && visible.is_empty() {
                    div { style: "padding: 20px; color: #6B7280;", "Loading..." }
                } else {
                    DocumentTable {
                        documents: visible,
                        sort: sort(),
                        on_sort: move |column| sort.write().toggle(column),
                    }
                }
                PaginationControls {
                    current_page,
                    page_count,
                    on_step: move |step| {
                        pages.write().advance(step);
                    },
                    on_jump: move |page| {
                        pages.write().jump_to(page);
                    },
                }
            }
            if is_visible() {
                ExploreSidePanel {}
            }
        }
    }
}

#[component]
fn ExploreToggleButton(filter_count_label: String) -> Element {
    let mut explore = use_context::<ExploreContext>();
    let border_color = if filter_count_label.is_empty() { "rgba(0,0,0,0.5)" } else { "#1A5A96" };
    rsx! {
        button {
            class: "x-hover-shadow-background",
            style: "
                cursor: pointer;
                display: flex;
                align-items: center;
                gap: 6px;
                border: 2px solid {border_color};
                border-radius: 1000px;
                background-color: white;
                padding: 6px 14px;
                font-size: 15px;
            ",
            onclick: move |_| {
                let visible = *explore.is_visible.read();
                explore.is_visible.set(!visible);
            },
            Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
            "Explore"
            if !filter_count_label.is_empty() {
                span { style: "color: #1A5A96; font-weight: 500;", "({filter_count_label})" }
            }
        }
    }
}

#[component]
fn CopyLinkButton() -> Element {
    rsx! {
        button {
            class: "x-hover-shadow-background",
            title: "Copy a link to this filtered view",
            style: "
                cursor: pointer;
                display: flex;
                align-items: center;
                border: 1px solid rgba(0,0,0,0.5);
                border-radius: 8px;
                background-color: white;
                padding: 6px;
            ",
            onclick: move |_| {
                match copy_page_link() {
                    Ok(url) => tracing::info!("Link copied to clipboard: {url}"),
                    Err(e) => tracing::warn!("could not copy link: {e:#}"),
                }
            },
            Icon { icon: MdInsertLink, style: "width: 20px; height: 20px;" }
        }
    }
}

fn copy_page_link() -> anyhow::Result<String> {
    let window = web_sys::window().context("no browser window")?;
    let url = window.location().href().map_err(|e| anyhow::anyhow!("reading location failed: {e:?}"))?;
    let _promise = window.navigator().clipboard().write_text(&url);
    Ok(url)
}
