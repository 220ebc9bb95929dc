//! Badge showing whether the project is open for public comment.

use chrono::Local;
use common::comment_period::{self, CommentPeriod};
use dioxus::prelude::*;

#[component]
pub fn CommentPeriodBadge(periods: Vec<CommentPeriod>) -> Element {
    let today = Local::now().date_naive();
    let current = comment_period::current(&periods);
    let status = comment_period::status(current, today);
    let label = status.label();
    let code = status.code();
    let (background, color) = if status.is_open() { ("#E6F4EA", "#2E8540") } else { ("#F3F4F6", "#6B7280") };
    let window = current
        .and_then(|p| Some(format!("{} – {}", p.start_date?.format("%b %-d, %Y"), p.end_date?.format("%b %-d, %Y"))))
        .unwrap_or_default();

    rsx! {
        div {
            class: "x-comment-period-badge",
            "data-status": "{code}",
            style: "
                display: inline-flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                padding: 6px 14px;
                border-radius: 9999px;
                background: {background};
                color: {color};
                font-size: 15px;
                font-weight: 500;
                margin-bottom: 16px;
            ",
            "{label}"
            if !window.is_empty() {
                span { style: "font-weight: 400;", "{window}" }
            }
        }
    }
}
