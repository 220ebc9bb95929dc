//! Explore panel: filter store, URL synchronizer and navigation wired
//! together.

use chrono::NaiveDate;

use crate::{
    filter_criteria::FilterCriteria, filter_store::FilterStore, query_params::QueryParams, url_sync::UrlSynchronizer,
};

/// Access to the page URL's query parameters.
pub trait Navigation {
    /// Query parameters of the last settled navigation.
    fn current_query(&self) -> QueryParams;

    /// Replaces the query without adding a history entry or reloading.
    fn replace_query(&mut self, params: QueryParams);
}

pub type FiltersListener = Box<dyn FnMut(&FilterCriteria)>;

pub struct ExplorePanel<N: Navigation> {
    store: FilterStore,
    sync: UrlSynchronizer,
    navigation: N,
    on_update: FiltersListener,
}

impl<N: Navigation> ExplorePanel<N> {
    pub fn new(navigation: N, on_update: impl FnMut(&FilterCriteria) + 'static) -> Self {
        Self { store: FilterStore::new(), sync: UrlSynchronizer::new(), navigation, on_update: Box::new(on_update) }
    }

    pub fn active(&self) -> &FilterCriteria {
        self.store.active()
    }

    pub fn draft(&self) -> &FilterCriteria {
        self.store.draft()
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut N {
        &mut self.navigation
    }

    /// Picks up criteria after a completed navigation. The listener fires
    /// only when the URL carries different filters than last time.
    pub fn navigation_settled(&mut self) {
        let params = self.navigation.current_query();
        if let Some(criteria) = self.sync.navigation_settled(&params) {
            self.store.replace(criteria);
            (self.on_update)(self.store.active());
        }
    }

    pub fn set_draft_agency(&mut self, tag: &str, selected: bool) {
        self.store.set_draft_agency(tag, selected);
    }

    pub fn set_draft_document_type(&mut self, tag: &str, selected: bool) {
        self.store.set_draft_document_type(tag, selected);
    }

    pub fn set_draft_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.store.set_draft_date_range(from, to);
    }

    /// Commits the draft, writes it to the URL and optionally notifies.
    pub fn apply_all(&mut self, notify: bool) -> FilterCriteria {
        let criteria = self.store.commit();
        self.persist(&criteria);
        if notify {
            (self.on_update)(&criteria);
        }
        criteria
    }

    pub fn cancel(&mut self) {
        self.store.cancel();
    }

    /// Drops every filter. Nothing happens, including notification, when
    /// no filter is active.
    pub fn clear_all(&mut self, notify: bool) {
        if !self.store.clear() {
            return;
        }
        let criteria = self.store.active().clone();
        self.persist(&criteria);
        if notify {
            (self.on_update)(&criteria);
        }
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Whether the draft differs from what is applied.
    pub fn has_pending_changes(&self) -> bool {
        self.store.has_pending_changes()
    }

    /// "1 filter", "3 filters", or empty when nothing is selected.
    pub fn filter_count_label(&self) -> String {
        match self.count() {
            0 => String::new(),
            1 => "1 filter".to_string(),
            n => format!("{n} filters"),
        }
    }

    fn persist(&mut self, criteria: &FilterCriteria) {
        self.sync.remember(criteria);
        let mut params = self.navigation.current_query();
        UrlSynchronizer::write_criteria(&mut params, criteria);
        tracing::debug!("saving filters to url: {params}");
        self.navigation.replace_query(params);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Default)]
    struct FakeNavigation {
        query: QueryParams,
        replaced: usize,
    }

    impl Navigation for FakeNavigation {
        fn current_query(&self) -> QueryParams {
            self.query.clone()
        }

        fn replace_query(&mut self, params: QueryParams) {
            self.query = params;
            self.replaced += 1;
        }
    }

    fn panel() -> (ExplorePanel<FakeNavigation>, Rc<RefCell<Vec<FilterCriteria>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let panel = ExplorePanel::new(FakeNavigation::default(), move |c: &FilterCriteria| sink.borrow_mut().push(c.clone()));
        (panel, seen)
    }

    #[test]
    fn apply_persists_and_notifies() {
        let (mut panel, seen) = panel();
        panel.set_draft_agency("BC GOV", true);
        panel.set_draft_agency("AB GOV", true);
        panel.apply_all(true);

        assert_eq!(panel.navigation().query.get("agencies"), Some("AB GOV|BC GOV"));
        assert_eq!(panel.navigation().replaced, 1);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(panel.filter_count_label(), "2 filters");

        // the navigation we caused settles without a second notification
        panel.navigation_settled();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn apply_without_notify_stays_quiet() {
        let (mut panel, seen) = panel();
        panel.set_draft_document_type("ENFORCEMENT ORDER", true);
        panel.apply_all(false);
        assert!(seen.borrow().is_empty());
        assert_eq!(panel.count(), 1);
    }

    #[test]
    fn clear_on_empty_does_not_notify() {
        let (mut panel, seen) = panel();
        panel.clear_all(true);
        assert!(seen.borrow().is_empty());
        assert_eq!(panel.navigation().replaced, 0);
    }

    #[test]
    fn clear_on_filters_notifies() {
        let (mut panel, seen) = panel();
        panel.set_draft_agency("BC GOV", true);
        panel.apply_all(false);
        panel.clear_all(true);
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].is_unconstrained());
        assert!(panel.navigation().query.get("agencies").is_none());
        assert_eq!(panel.filter_count_label(), "");
    }

    #[test]
    fn external_url_change_updates_store() {
        let (mut panel, seen) = panel();
        panel.navigation_mut().query = QueryParams::parse("complianceDocumentTypes=ENFORCEMENT+ORDER&dateRangeTo=2019-12-31");
        panel.navigation_settled();

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(panel.count(), 2);
        assert_eq!(panel.draft(), panel.active());
        assert_eq!(panel.filter_count_label(), "2 filters");

        panel.navigation_settled();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn cancel_restores_committed() {
        let (mut panel, _seen) = panel();
        panel.set_draft_agency("BC GOV", true);
        panel.apply_all(true);
        assert!(!panel.has_pending_changes());
        panel.set_draft_agency("ON GOV", true);
        assert!(panel.has_pending_changes());
        panel.cancel();
        assert!(!panel.has_pending_changes());
        assert_eq!(panel.draft(), panel.active());
        assert!(!panel.draft().agencies.contains("ON GOV"));
    }

    #[test]
    fn unrelated_params_survive_persist() {
        let (mut panel, _seen) = panel();
        panel.navigation_mut().query = QueryParams::parse("tab=documents");
        panel.set_draft_date_range(NaiveDate::from_ymd_opt(2019, 1, 1), None);
        panel.apply_all(true);
        assert_eq!(panel.navigation().query.get("tab"), Some("documents"));
        assert_eq!(panel.navigation().query.get("dateRangeFrom"), Some("2019-01-01"));
        assert_eq!(panel.filter_count_label(), "1 filter");
    }
}
