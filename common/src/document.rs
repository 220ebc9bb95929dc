//! Document and activity records loaded from the bundled project data.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::lenient;

/// A published project document.
///
/// Every field is optional: absent, `null`, empty or wrongly typed values
/// all become `None` so a sloppy data file never breaks the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentRecord {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub file_name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub agency: Option<String>,
    #[serde(rename = "complianceDocumentType", deserialize_with = "lenient::string")]
    pub document_type: Option<String>,
    #[serde(rename = "complianceDocumentSubtype", deserialize_with = "lenient::string")]
    pub document_subtype: Option<String>,
    #[serde(deserialize_with = "lenient::date_time")]
    pub date: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub mime: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub nation: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub phase: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub section: Option<String>,
}

impl DocumentRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().or(self.file_name.as_deref()).unwrap_or("Untitled document")
    }
}

/// One entry of a project's activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub activity_type: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::date_time")]
    pub date: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_full_record() {
        let doc: DocumentRecord = serde_json::from_value(json!({
            "_id": "d1",
            "fileName": "order.pdf",
            "name": "Order 1",
            "agency": "BC Gov",
            "complianceDocumentType": "Enforcement Order",
            "date": "2019-01-01",
            "url": "https://example.org/order.pdf",
            "mime": "application/pdf"
        }))
        .unwrap();
        assert_eq!(doc.id.as_deref(), Some("d1"));
        assert_eq!(doc.document_type.as_deref(), Some("Enforcement Order"));
        assert_eq!(doc.date.map(|d| d.date()), chrono::NaiveDate::from_ymd_opt(2019, 1, 1));
        assert_eq!(doc.display_name(), "Order 1");
        assert_eq!(doc.nation, None);
    }

    #[test]
    fn bad_fields_become_none() {
        let doc: DocumentRecord = serde_json::from_value(json!({
            "name": "",
            "agency": null,
            "date": "someday",
            "mime": ["x"],
            "fileName": "a.pdf"
        }))
        .unwrap();
        assert_eq!(doc.name, None);
        assert_eq!(doc.agency, None);
        assert_eq!(doc.date, None);
        assert_eq!(doc.mime, None);
        assert_eq!(doc.display_name(), "a.pdf");
    }

    #[derive(Debug, Deserialize)]
    struct Listing {
        #[serde(default, deserialize_with = "lenient::list")]
        documents: Vec<DocumentRecord>,
    }

    #[test]
    fn non_object_entries_are_empty_records() {
        let listing: Listing = serde_json::from_value(json!({"documents": [null, 42, {"name": "x"}]})).unwrap();
        assert_eq!(listing.documents.len(), 3);
        assert_eq!(listing.documents[0], DocumentRecord::default());
        assert_eq!(listing.documents[1], DocumentRecord::default());
        assert_eq!(listing.documents[2].display_name(), "x");

        let listing: Listing = serde_json::from_value(json!({"documents": "none"})).unwrap();
        assert!(listing.documents.is_empty());
    }

    #[test]
    fn activity_type_key() {
        let activity: Activity = serde_json::from_value(json!({
            "type": "Update",
            "title": "Inspection complete",
            "date": "2020-05-06T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(activity.activity_type.as_deref(), Some("Update"));
        assert!(activity.date.is_some());
        assert_eq!(activity.id, None);
    }
}
