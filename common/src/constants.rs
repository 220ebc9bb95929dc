//! Compile-time configuration shared by the filter core and the UI.

use chrono::NaiveDate;

/// Agencies offered in the explore panel. Keys are stored upper-cased.
pub const AGENCIES: &[&str] = &[
    "BC Gov",
    "AB Gov",
    "ON Gov",
    "Canada",
];

/// Compliance document types offered in the explore panel.
pub const COMPLIANCE_DOCUMENT_TYPES: &[&str] = &[
    "Government Inspection",
    "Enforcement Order",
    "Company Self Report",
];

pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

pub const QUERY_KEY_AGENCIES: &str = "agencies";
pub const QUERY_KEY_DOCUMENT_TYPES: &str = "complianceDocumentTypes";
pub const QUERY_KEY_DATE_FROM: &str = "dateRangeFrom";
pub const QUERY_KEY_DATE_TO: &str = "dateRangeTo";

/// Separator for multi-valued query parameters.
pub const TAG_SEPARATOR: char = '|';

pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Lower bound offered by the date inputs.
pub fn min_filter_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Upper bound offered by the date inputs.
pub fn max_filter_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX)
}

pub fn agency_keys() -> Vec<String> {
    AGENCIES.iter().map(|a| a.to_uppercase()).collect()
}

pub fn document_type_keys() -> Vec<String> {
    COMPLIANCE_DOCUMENT_TYPES.iter().map(|t| t.to_uppercase()).collect()
}
