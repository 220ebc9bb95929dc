//! Previous / numbered / next page buttons.

use common::paginator::PageStep;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

#[component]
pub fn PaginationControls(
    current_page: ReadSignal<usize>,
    page_count: ReadSignal<usize>,
    on_step: Callback<PageStep>,
    on_jump: Callback<usize>,
) -> Element {
    let can_go_to_previous_page = use_memo(move || current_page() > 1);
    let can_go_to_next_page = use_memo(move || current_page() < page_count());

    if page_count() <= 1 {
        return rsx! {};
    }

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 12px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| on_step(PageStep::Previous)
            }
            for page in 1..=page_count() {
                PageNumberButton {
                    key: "{page}",
                    page,
                    selected: page == current_page(),
                    onclick: move |_| on_jump(page)
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| on_step(PageStep::Next)
            }
        }
    }
}

#[component]
fn PageNumberButton(page: usize, selected: bool, onclick: Callback<()>) -> Element {
    let background = if selected { "#003366" } else { "white" };
    let color = if selected { "white" } else { "#003366" };
    rsx! {
        button {
            style: "
                min-width: 32px;
                height: 32px;
                border-radius: 8px;
                border: 1px solid #003366;
                background: {background};
                color: {color};
                cursor: pointer;
                font-size: 15px;
            ",
            onclick: move |_| onclick(()),
            "{page}"
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 3px;
                border: none;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 26px; height: 26px; color: {btn_color};" }
        }
    }
}
