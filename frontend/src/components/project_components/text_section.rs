use dioxus::prelude::*;

/// Paragraphs of page text from the project data.
#[component]
pub fn TextSection(title: String, paragraphs: Vec<String>) -> Element {
    rsx! {
        section {
            style: "display: flex; flex-direction: column; gap: 8px; max-width: 900px;",
            h2 { style: "font-size: 24px; font-weight: 500; margin: 0;", "{title}" }
            for (index, paragraph) in paragraphs.into_iter().enumerate() {
                p {
                    key: "{index}",
                    style: "font-size: 17px; line-height: 1.6; margin: 0;",
                    "{paragraph}"
                }
            }
        }
    }
}
