use common::{
    document::DocumentRecord,
    sorting::{DocumentSort, SortColumn},
};
use dioxus::prelude::*;

const COLUMNS: [(SortColumn, &str); 4] = [
    (SortColumn::Name, "Name"),
    (SortColumn::Agency, "Agency"),
    (SortColumn::DocumentType, "Document Type"),
    (SortColumn::Date, "Date"),
];

#[component]
pub fn DocumentTable(
    documents: ReadSignal<Vec<DocumentRecord>>,
    sort: ReadSignal<DocumentSort>,
    on_sort: Callback<SortColumn>,
) -> Element {
    let headers = COLUMNS.map(|(column, label)| (column, label, sort.read().indicator(column)));
    rsx! {
        table {
            class: "x-document-table",
            thead {
                tr {
                    for (column, label, indicator) in headers {
                        th {
                            key: "{label}",
                            title: "Sort by {label}",
                            onclick: move |_| on_sort.call(column),
                            "{label} {indicator}"
                        }
                    }
                }
            }
            tbody {
                if documents.read().is_empty() {
                    tr {
                        td { colspan: "4", class: "x-document-table-empty", "No documents match the current filters." }
                    }
                }
                for (i, doc) in documents.read().iter().enumerate() {
                    DocumentRow { key: "{i}", doc: doc.clone() }
                }
            }
        }
    }
}

#[component]
fn DocumentRow(doc: DocumentRecord) -> Element {
    let name = doc.display_name().to_string();
    let agency = doc.agency.clone().unwrap_or_default();
    let document_type = doc.document_type.clone().unwrap_or_default();
    let date = doc.date.map(|d| d.format("%B %d, %Y").to_string()).unwrap_or_default();
    rsx! {
        tr {
            td {
                if let Some(url) = doc.url.clone() {
                    a { href: "{url}", target: "_blank", rel: "noopener", "{name}" }
                } else {
                    "{name}"
                }
            }
            td { "{agency}" }
            td { "{document_type}" }
            td { "{date}" }
        }
    }
}
