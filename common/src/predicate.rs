//! Inclusion predicates for the filtered document view.

use std::collections::BTreeSet;

use crate::{
    dates::{end_of_day, start_of_day},
    document::DocumentRecord,
    filter_criteria::FilterCriteria,
};

/// `true` when `doc` passes every active constraint of `criteria`.
pub fn is_included(doc: &DocumentRecord, criteria: &FilterCriteria) -> bool {
    matches_date(doc, criteria) && matches_agency(doc, criteria) && matches_document_type(doc, criteria)
}

/// Documents passing `criteria`, in their original order.
pub fn filter_documents(docs: &[DocumentRecord], criteria: &FilterCriteria) -> Vec<DocumentRecord> {
    docs.iter().filter(|doc| is_included(doc, criteria)).cloned().collect()
}

pub fn matches_date(doc: &DocumentRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.has_date_range() {
        return true;
    }
    let Some(date) = doc.date else {
        return false;
    };
    let after_start = criteria.date_from.is_none_or(|from| date >= start_of_day(from));
    let before_end = criteria.date_to.is_none_or(|to| date <= end_of_day(to));
    after_start && before_end
}

pub fn matches_agency(doc: &DocumentRecord, criteria: &FilterCriteria) -> bool {
    matches_tag(doc.agency.as_deref(), &criteria.agencies)
}

pub fn matches_document_type(doc: &DocumentRecord, criteria: &FilterCriteria) -> bool {
    matches_tag(doc.document_type.as_deref(), &criteria.document_types)
}

// an absent value never matches a non-empty selection
fn matches_tag(value: Option<&str>, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };
    let value = value.to_lowercase();
    selected.iter().any(|tag| tag.to_lowercase() == value)
}
