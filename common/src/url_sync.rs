//! Keeps filter criteria in step with the page's query parameters.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    constants::{
        QUERY_KEY_AGENCIES, QUERY_KEY_DATE_FROM, QUERY_KEY_DATE_TO, QUERY_KEY_DOCUMENT_TYPES, TAG_SEPARATOR,
        agency_keys, document_type_keys,
    },
    dates::{format_query_date, parse_date},
    filter_criteria::FilterCriteria,
    query_params::QueryParams,
};

/// Decodes criteria from the URL after each settled navigation and reports
/// whether they differ from the last ones seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlSynchronizer {
    snapshot: FilterCriteria,
}

impl UrlSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one "navigation settled" event. Returns the decoded criteria
    /// when they changed since the previous event.
    pub fn navigation_settled(&mut self, params: &QueryParams) -> Option<FilterCriteria> {
        let decoded = decode_criteria(params);
        if decoded == self.snapshot {
            return None;
        }
        tracing::debug!("filters changed externally: {decoded:?}");
        self.snapshot = decoded.clone();
        Some(decoded)
    }

    /// Records criteria we wrote ourselves, so the navigation they cause is
    /// not reported back as an external change.
    pub fn remember(&mut self, criteria: &FilterCriteria) {
        self.snapshot = criteria.clone();
    }

    pub fn save(params: &mut QueryParams, key: &str, value: Option<&str>) {
        params.set(key, value);
    }

    pub fn write_criteria(params: &mut QueryParams, criteria: &FilterCriteria) {
        Self::save(params, QUERY_KEY_AGENCIES, encode_tags(&criteria.agencies).as_deref());
        Self::save(params, QUERY_KEY_DOCUMENT_TYPES, encode_tags(&criteria.document_types).as_deref());
        Self::save(params, QUERY_KEY_DATE_FROM, criteria.date_from.map(format_query_date).as_deref());
        Self::save(params, QUERY_KEY_DATE_TO, criteria.date_to.map(format_query_date).as_deref());
    }
}

pub fn decode_criteria(params: &QueryParams) -> FilterCriteria {
    FilterCriteria {
        agencies: decode_known_tags(params, QUERY_KEY_AGENCIES, &agency_keys()),
        document_types: decode_known_tags(params, QUERY_KEY_DOCUMENT_TYPES, &document_type_keys()),
        date_from: decode_date(params, QUERY_KEY_DATE_FROM),
        date_to: decode_date(params, QUERY_KEY_DATE_TO),
    }
}

/// Joins tags with `|`; `None` for an empty set so the parameter is dropped.
pub fn encode_tags(tags: &BTreeSet<String>) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let separator = TAG_SEPARATOR.to_string();
    Some(tags.iter().map(String::as_str).collect::<Vec<_>>().join(&separator))
}

pub fn decode_tags(raw: Option<&str>) -> BTreeSet<String> {
    raw.unwrap_or_default()
        .split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tags of `key` that name one of the offered checkboxes, upper-cased to
/// the checkbox spelling. Anything else is dropped.
fn decode_known_tags(params: &QueryParams, key: &str, known: &[String]) -> BTreeSet<String> {
    decode_tags(params.get(key))
        .into_iter()
        .map(|tag| tag.to_uppercase())
        .filter(|tag| {
            let is_known = known.contains(tag);
            if !is_known {
                tracing::warn!("ignoring unknown {key} tag: {tag:?}");
            }
            is_known
        })
        .collect()
}

fn decode_date(params: &QueryParams, key: &str) -> Option<NaiveDate> {
    let raw = params.get(key)?;
    let date = parse_date(raw);
    if date.is_none() {
        tracing::warn!("ignoring malformed {key} query parameter: {raw:?}");
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tags(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tag_sets_ignore_insertion_order() {
        let mut a = BTreeSet::new();
        a.insert("BC".to_string());
        a.insert("AB".to_string());
        let encoded = encode_tags(&a);
        assert_eq!(decode_tags(encoded.as_deref()), tags(&["AB", "BC"]));
    }

    #[test]
    fn empty_set_omits_parameter() {
        let mut params: QueryParams = [("agencies", "BC")].into_iter().collect();
        UrlSynchronizer::write_criteria(&mut params, &FilterCriteria::default());
        assert_eq!(params.get(QUERY_KEY_AGENCIES), None);
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");
    }

    #[test]
    fn missing_or_blank_parameter_means_no_filter() {
        assert!(decode_tags(None).is_empty());
        assert!(decode_tags(Some("")).is_empty());
        assert_eq!(decode_tags(Some("|BC||")), tags(&["BC"]));
    }

    #[test]
    fn writes_dates_as_calendar_days() {
        let criteria = FilterCriteria {
            date_from: Some(ymd(2019, 1, 1)),
            date_to: Some(ymd(2019, 12, 31)),
            ..Default::default()
        };
        let mut params = QueryParams::new();
        UrlSynchronizer::write_criteria(&mut params, &criteria);
        assert_eq!(params.get(QUERY_KEY_DATE_FROM), Some("2019-01-01"));
        assert_eq!(params.get(QUERY_KEY_DATE_TO), Some("2019-12-31"));
        assert_eq!(decode_criteria(&params), criteria);
    }

    #[test]
    fn reads_dates_ignoring_time() {
        let params = QueryParams::parse("dateRangeFrom=2019-01-01T18%3A30%3A00Z&dateRangeTo=garbage");
        let criteria = decode_criteria(&params);
        assert_eq!(criteria.date_from, Some(ymd(2019, 1, 1)));
        assert_eq!(criteria.date_to, None);
    }

    #[test]
    fn reports_only_real_changes() {
        let mut sync = UrlSynchronizer::new();
        assert_eq!(sync.navigation_settled(&QueryParams::new()), None);

        let params = QueryParams::parse("agencies=BC+GOV%7CAB+GOV");
        let changed = sync.navigation_settled(&params).unwrap();
        assert_eq!(changed.agencies, tags(&["AB GOV", "BC GOV"]));

        // same set in a different order is not a change
        let reordered = QueryParams::parse("agencies=AB+GOV%7CBC+GOV");
        assert_eq!(sync.navigation_settled(&reordered), None);

        assert!(sync.navigation_settled(&QueryParams::new()).is_some());
    }

    #[test]
    fn only_offered_tags_are_decoded() {
        let params = QueryParams::parse(
            "agencies=NOT%20AN%20AGENCY%7Cbc%20gov&complianceDocumentTypes=Enforcement+Order%7CMemo",
        );
        let criteria = decode_criteria(&params);
        assert_eq!(criteria.agencies, tags(&["BC GOV"]));
        assert_eq!(criteria.document_types, tags(&["ENFORCEMENT ORDER"]));

        let unknown_only = QueryParams::parse("agencies=NOT%20AN%20AGENCY");
        assert!(decode_criteria(&unknown_only).is_unconstrained());
        let mut sync = UrlSynchronizer::new();
        assert_eq!(sync.navigation_settled(&unknown_only), None);
    }

    #[test]
    fn remembered_criteria_are_not_external() {
        let mut sync = UrlSynchronizer::new();
        let criteria = FilterCriteria { document_types: tags(&["ENFORCEMENT ORDER"]), ..Default::default() };
        let mut params = QueryParams::new();
        UrlSynchronizer::write_criteria(&mut params, &criteria);
        sync.remember(&criteria);
        assert_eq!(sync.navigation_settled(&params), None);
    }
}
