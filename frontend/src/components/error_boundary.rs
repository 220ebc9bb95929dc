//! Error boundary components for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render failure in {boundary_name}: {err:?}");
                rsx! {
                    h1 {
                        style: "color:#A12622; font-size: 40px; padding: 10px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color:#A12622; font-size: 20px; padding: 10px; margin: 15px;",
                        "This part of the page ({boundary_name}) could not be displayed."
                    }
                    Link {
                        to: Route::ProjectsPage {},
                        style: "font-size: 20px; padding: 10px; margin: 15px;",
                        "Back to all projects"
                    }
                    pre {
                        style: "color:black; border: 1px solid #A12622; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Inline message for a section that failed to load.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "20px",

            h2 {
                style: "color:#A12622; font-size: 26px; margin: 5px;",
                "Unable to display this section",
            }

            pre {
                style: "color:#A12622; border: 1px solid #A12622; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 600px;",
                "{error_txt}"
            }
        }
    }
}
