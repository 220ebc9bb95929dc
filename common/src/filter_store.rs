//! Draft and committed filter state.

use chrono::NaiveDate;

use crate::filter_criteria::FilterCriteria;

/// Holds the committed criteria and an editable draft of them.
///
/// The two are independent values; commit and cancel copy one into the
/// other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterStore {
    active: FilterCriteria,
    draft: FilterCriteria,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &FilterCriteria {
        &self.active
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn set_draft_agency(&mut self, tag: &str, selected: bool) {
        self.draft.set_agency(tag, selected);
    }

    pub fn set_draft_document_type(&mut self, tag: &str, selected: bool) {
        self.draft.set_document_type(tag, selected);
    }

    pub fn set_draft_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.draft.set_date_range(from, to);
    }

    /// Copies the draft into the committed criteria and returns them.
    pub fn commit(&mut self) -> FilterCriteria {
        self.active = self.draft.clone();
        self.active.clone()
    }

    /// Throws away draft edits.
    pub fn cancel(&mut self) {
        self.draft = self.active.clone();
    }

    /// Resets both draft and committed criteria. Returns `false` without
    /// touching anything when no filter is active.
    pub fn clear(&mut self) -> bool {
        if self.count() == 0 {
            return false;
        }
        self.draft = FilterCriteria::default();
        self.active = FilterCriteria::default();
        true
    }

    /// Takes criteria that changed outside the panel, e.g. from the URL.
    pub fn replace(&mut self, criteria: FilterCriteria) {
        self.draft = criteria.clone();
        self.active = criteria;
    }

    pub fn count(&self) -> usize {
        self.active.count()
    }

    pub fn has_pending_changes(&self) -> bool {
        self.draft != self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_edits_do_not_touch_active() {
        let mut store = FilterStore::new();
        store.set_draft_agency("BC GOV", true);
        store.set_draft_date_range(NaiveDate::from_ymd_opt(2019, 1, 1), None);
        assert!(store.active().is_unconstrained());
        assert_eq!(store.draft().count(), 2);
        assert!(store.has_pending_changes());
    }

    #[test]
    fn commit_copies_draft() {
        let mut store = FilterStore::new();
        store.set_draft_document_type("ENFORCEMENT ORDER", true);
        let committed = store.commit();
        assert_eq!(&committed, store.active());
        assert_eq!(store.count(), 1);
        assert!(!store.has_pending_changes());
    }

    #[test]
    fn commit_then_cancel_keeps_active() {
        let mut store = FilterStore::new();
        store.set_draft_agency("AB GOV", true);
        let committed = store.commit();
        store.cancel();
        assert_eq!(store.active(), &committed);
        assert_eq!(store.draft(), &committed);
    }

    #[test]
    fn cancel_discards_draft() {
        let mut store = FilterStore::new();
        store.set_draft_agency("AB GOV", true);
        store.commit();
        store.set_draft_agency("AB GOV", false);
        store.set_draft_agency("ON GOV", true);
        store.cancel();
        assert!(store.draft().agencies.contains("AB GOV"));
        assert!(!store.draft().agencies.contains("ON GOV"));
    }

    #[test]
    fn clear_is_noop_when_empty() {
        let mut store = FilterStore::new();
        store.set_draft_agency("AB GOV", true);
        // only the draft has something, the committed count is zero
        assert!(!store.clear());
        assert_eq!(store.draft().count(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut store = FilterStore::new();
        store.set_draft_agency("AB GOV", true);
        store.commit();
        assert!(store.clear());
        assert!(store.active().is_unconstrained());
        assert!(store.draft().is_unconstrained());
    }
}
