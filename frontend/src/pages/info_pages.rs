//! Static information pages linked from the navbar.

use dioxus::prelude::*;

#[component]
pub fn ProcessPage() -> Element {
    rsx! {
        Title { "Process" }
        InfoPage {
            title: "The Review Process",
            paragraphs: vec![
                "Major projects are reviewed by provincial and federal agencies before construction may begin.".to_string(),
                "Once authorized, projects are inspected throughout construction and operation, and the results are published here.".to_string(),
            ],
        }
    }
}

#[component]
pub fn LngPage() -> Element {
    rsx! {
        Title { "LNG in BC" }
        InfoPage {
            title: "Liquefied Natural Gas",
            paragraphs: vec![
                "Natural gas is cooled to about -160 degrees Celsius to become a liquid that can be shipped overseas.".to_string(),
                "Each project combines a pipeline, a liquefaction facility and a marine terminal.".to_string(),
            ],
        }
    }
}

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Title { "About" }
        InfoPage {
            title: "About this site",
            paragraphs: vec![
                "This site discloses authorizations, compliance records and engagement activities for LNG projects.".to_string(),
            ],
        }
    }
}

#[component]
pub fn ConnectPage() -> Element {
    rsx! {
        Title { "Connect" }
        InfoPage {
            title: "Connect with us",
            paragraphs: vec![
                "Questions about a project can be sent to the agency listed on its documents.".to_string(),
            ],
        }
    }
}

#[component]
fn InfoPage(title: String, paragraphs: Vec<String>) -> Element {
    rsx! {
        div {
            style: "padding: 36px 40px; display: flex; flex-direction: column; gap: 14px; max-width: 900px;",
            h1 { style: "color: #003366; font-size: 36px; font-weight: 500; margin: 0;", "{title}" }
            for (index, paragraph) in paragraphs.into_iter().enumerate() {
                p {
                    key: "{index}",
                    style: "font-size: 18px; line-height: 1.6; margin: 0;",
                    "{paragraph}"
                }
            }
        }
    }
}
