//! Filter criteria applied to the document list.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Committed (or draft) filter selection.
///
/// An empty set or an absent bound means "unconstrained", never "match
/// nothing".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub agencies: BTreeSet<String>,
    pub document_types: BTreeSet<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn has_date_range(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    /// Number of active constraints. The date range counts once no matter
    /// how many bounds are set.
    pub fn count(&self) -> usize {
        self.agencies.len() + self.document_types.len() + usize::from(self.has_date_range())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.count() == 0
    }

    pub fn set_agency(&mut self, tag: &str, selected: bool) {
        set_tag(&mut self.agencies, tag, selected);
    }

    pub fn set_document_type(&mut self, tag: &str, selected: bool) {
        set_tag(&mut self.document_types, tag, selected);
    }

    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.date_from = from;
        self.date_to = to;
    }
}

fn set_tag(tags: &mut BTreeSet<String>, tag: &str, selected: bool) {
    let tag = tag.trim();
    if tag.is_empty() {
        return;
    }
    if selected {
        tags.insert(tag.to_string());
    } else {
        tags.remove(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counts_zero() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.count(), 0);
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn date_range_counts_once() {
        let mut criteria = FilterCriteria::default();
        criteria.set_agency("BC GOV", true);
        criteria.set_agency("AB GOV", true);
        criteria.set_document_type("ENFORCEMENT ORDER", true);
        criteria.set_date_range(NaiveDate::from_ymd_opt(2019, 1, 1), NaiveDate::from_ymd_opt(2019, 12, 31));
        assert_eq!(criteria.count(), 4);

        criteria.set_date_range(None, NaiveDate::from_ymd_opt(2019, 12, 31));
        assert_eq!(criteria.count(), 4);
    }

    #[test]
    fn toggling_tags() {
        let mut criteria = FilterCriteria::default();
        criteria.set_agency("BC GOV", true);
        criteria.set_agency("BC GOV", true);
        assert_eq!(criteria.agencies.len(), 1);
        criteria.set_agency("BC GOV", false);
        assert!(criteria.agencies.is_empty());
        criteria.set_agency("  ", true);
        assert!(criteria.agencies.is_empty());
    }
}
