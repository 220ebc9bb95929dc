//! Side panel for editing the document filters before applying them.

use common::{
    constants::{
        AGENCIES, COMPLIANCE_DOCUMENT_TYPES, agency_keys, document_type_keys, max_filter_date, min_filter_date,
    },
    dates::{format_query_date, parse_date},
};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_navigation_icons::MdClose,
        md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
    },
};

use crate::components::document_components::document_browser::ExploreContext;

#[derive(Debug, Clone, Copy, PartialEq)]
enum TagGroup {
    Agency,
    DocumentType,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DateBound {
    From,
    To,
}

#[component]
pub fn ExploreSidePanel() -> Element {
    let explore = use_context::<ExploreContext>();
    let mut panel = explore.panel;
    let mut is_visible = explore.is_visible;
    let has_pending_changes = panel.read().has_pending_changes();

    rsx! {
        aside {
            id: "x-explore-side-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                width: 340px;
                flex-shrink: 0;
                background: white;
                border: 1px solid rgba(0,0,0,0.2);
                border-radius: 10px;
                padding: 16px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                align-self: flex-start;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                h3 { style: "margin: 0; font-size: 20px; font-weight: 500;", "Explore" }
                div { style: "flex-grow: 1;" }
                button {
                    style: "border: none; background: none; cursor: pointer;",
                    title: "Close",
                    onclick: move |_| is_visible.set(false),
                    Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                }
            }

            TagSection { title: "Agency", group: TagGroup::Agency }
            TagSection { title: "Document Type", group: TagGroup::DocumentType }
            DateRangeSection {}

            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                PanelButton {
                    label: "Apply",
                    primary: true,
                    disabled: !has_pending_changes,
                    onclick: move |_| {
                        panel.write().apply_all(true);
                        is_visible.set(false);
                    },
                }
                PanelButton {
                    label: "Cancel",
                    primary: false,
                    disabled: false,
                    onclick: move |_| {
                        panel.write().cancel();
                        is_visible.set(false);
                    },
                }
                div { style: "flex-grow: 1;" }
                PanelButton {
                    label: "Clear All",
                    primary: false,
                    disabled: false,
                    onclick: move |_| panel.write().clear_all(true),
                }
            }
        }
    }
}

#[component]
fn TagSection(title: String, group: TagGroup) -> Element {
    let (names, keys) = match group {
        TagGroup::Agency => (AGENCIES, agency_keys()),
        TagGroup::DocumentType => (COMPLIANCE_DOCUMENT_TYPES, document_type_keys()),
    };
    let options = names.iter().zip(keys).map(|(name, key)| (name.to_string(), key)).collect::<Vec<_>>();
    rsx! {
        div {
            h4 { style: "margin: 0 0 6px 0; font-size: 16px; font-weight: 500; color: #313132;", "{title}" }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                for (label, tag) in options {
                    li {
                        key: "{tag}",
                        TagCheckbox { group, tag, label }
                    }
                }
            }
        }
    }
}

#[component]
fn TagCheckbox(group: TagGroup, tag: String, label: String) -> Element {
    let mut panel = use_context::<ExploreContext>().panel;
    let draft_tag = tag.clone();
    let is_checked = use_memo(move || {
        let panel = panel.read();
        let draft = panel.draft();
        match group {
            TagGroup::Agency => draft.agencies.contains(&draft_tag),
            TagGroup::DocumentType => draft.document_types.contains(&draft_tag),
        }
    });
    rsx! {
        div {
            class: "x-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                align-items: center;
            ",
            onclick: move |_e| {
                let should_add = !is_checked();
                let mut panel = panel.write();
                match group {
                    TagGroup::Agency => panel.set_draft_agency(&tag, should_add),
                    TagGroup::DocumentType => panel.set_draft_document_type(&tag, should_add),
                }
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: #003366; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; color: black; flex-shrink: 0;" }
            }
            span { style: "font-size: 16px;", "{label}" }
        }
    }
}

#[component]
fn DateRangeSection() -> Element {
    let panel = use_context::<ExploreContext>().panel;
    let from = panel.read().draft().date_from.map(format_query_date).unwrap_or_default();
    let to = panel.read().draft().date_to.map(format_query_date).unwrap_or_default();
    rsx! {
        div {
            h4 { style: "margin: 0 0 6px 0; font-size: 16px; font-weight: 500; color: #313132;", "Date Range" }
            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                DateInput { label: "From", bound: DateBound::From, value: from }
                DateInput { label: "To", bound: DateBound::To, value: to }
            }
        }
    }
}

#[component]
fn DateInput(label: String, bound: DateBound, value: String) -> Element {
    let mut panel = use_context::<ExploreContext>().panel;
    let min = format_query_date(min_filter_date());
    let max = format_query_date(max_filter_date());
    rsx! {
        label {
            style: "display: flex; flex-direction: row; align-items: center; gap: 10px; font-size: 15px;",
            span { style: "width: 40px;", "{label}" }
            input {
                r#type: "date",
                min: "{min}",
                max: "{max}",
                value: "{value}",
                style: "flex-grow: 1; padding: 4px; font-size: 15px;",
                oninput: move |e: Event<FormData>| {
                    let date = parse_date(&e.value());
                    let mut panel = panel.write();
                    let (from, to) = (panel.draft().date_from, panel.draft().date_to);
                    match bound {
                        DateBound::From => panel.set_draft_date_range(date, to),
                        DateBound::To => panel.set_draft_date_range(from, date),
                    }
                },
            }
        }
    }
}

#[component]
fn PanelButton(label: String, primary: bool, disabled: bool, onclick: Callback<()>) -> Element {
    let (background, color) = if primary { ("#003366", "white") } else { ("white", "#003366") };
    let (opacity, cursor) = if disabled { ("0.5", "default") } else { ("1", "pointer") };
    rsx! {
        button {
            style: "
                height: 34px;
                padding: 0 14px;
                font-size: 14px;
                border-radius: 8px;
                background: {background};
                color: {color};
                border: 1px solid #003366;
                opacity: {opacity};
                cursor: {cursor};
            ",
            disabled,
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
