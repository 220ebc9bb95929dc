//! End-to-end behaviour of the document browser core over the bundled data.

use std::{cell::RefCell, rc::Rc};

use chrono::{NaiveDate, NaiveTime};
use common::{
    document::DocumentRecord,
    explore_panel::{ExplorePanel, Navigation},
    filter_criteria::FilterCriteria,
    paginator::{PageStep, Paginator},
    predicate::filter_documents,
    project_data::{PageType, ProjectDataService},
    query_params::QueryParams,
    sorting::{DocumentSort, SortColumn, sort_documents},
};

#[derive(Default)]
struct UrlBar {
    query: QueryParams,
}

impl Navigation for UrlBar {
    fn current_query(&self) -> QueryParams {
        self.query.clone()
    }

    fn replace_query(&mut self, params: QueryParams) {
        self.query = params;
    }
}

fn doc(agency: &str, document_type: &str, date: (i32, u32, u32)) -> DocumentRecord {
    DocumentRecord {
        agency: Some(agency.to_string()),
        document_type: Some(document_type.to_string()),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).map(|d| d.and_time(NaiveTime::MIN)),
        ..Default::default()
    }
}

#[test]
fn agency_filter_picks_matching_document() {
    let docs = vec![doc("BC", "Order", (2019, 1, 1)), doc("AB", "Report", (2020, 1, 1))];
    let criteria = FilterCriteria { agencies: ["BC".to_string()].into(), ..Default::default() };
    assert_eq!(filter_documents(&docs, &criteria), vec![docs[0].clone()]);
}

#[test]
fn filter_sort_paginate_bundled_compliance_documents() {
    let data = ProjectDataService::bundled();
    let docs = data.documents(1, PageType::Compliance);

    let latest = Rc::new(RefCell::new(FilterCriteria::default()));
    let sink = latest.clone();
    let mut panel = ExplorePanel::new(UrlBar::default(), move |c: &FilterCriteria| *sink.borrow_mut() = c.clone());
    panel.set_draft_agency("BC GOV", true);
    panel.apply_all(true);
    assert_eq!(panel.navigation().query.to_string(), "agencies=BC+GOV");

    let mut filtered = filter_documents(docs, &latest.borrow());
    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|d| d.agency.as_deref() == Some("BC Gov")));
    // the document without an agency never survives an agency filter
    assert!(filtered.iter().all(|d| d.name.as_deref() != Some("Site Photos")));

    let mut sort = DocumentSort::default();
    sort.toggle(SortColumn::Date);
    sort_documents(&mut filtered, &sort);
    assert!(filtered.windows(2).all(|w| w[0].date <= w[1].date));

    let mut pages = Paginator::new(filtered);
    pages.set_pagination(1, 2);
    assert_eq!(pages.visible_slice().len(), 2);
    while pages.advance(PageStep::Next) {}
    assert_eq!(pages.current_page(), pages.page_count());
}

#[test]
fn shared_link_restores_filters() {
    let bar = UrlBar {
        query: QueryParams::parse(
            "complianceDocumentTypes=ENFORCEMENT+ORDER%7CGOVERNMENT+INSPECTION&dateRangeFrom=2019-01-01&dateRangeTo=2019-12-31",
        ),
    };
    let hits = Rc::new(RefCell::new(0));
    let counter = hits.clone();
    let mut panel = ExplorePanel::new(bar, move |_: &FilterCriteria| *counter.borrow_mut() += 1);
    panel.navigation_settled();
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(panel.count(), 3);

    let docs = ProjectDataService::bundled().documents(2, PageType::Compliance);
    let filtered = filter_documents(docs, panel.active());
    let names: Vec<_> = filtered.iter().filter_map(|d| d.name.as_deref()).collect();
    assert_eq!(names, vec!["Order to Remediate Erosion", "Federal Fisheries Inspection", "Inspection Report Section 5"]);
}

#[test]
fn link_with_unknown_agency_shows_everything() {
    let bar = UrlBar { query: QueryParams::parse("agencies=NOT%20AN%20AGENCY") };
    let mut panel = ExplorePanel::new(bar, |_: &FilterCriteria| {});
    panel.navigation_settled();
    assert_eq!(panel.count(), 0);
    assert_eq!(panel.filter_count_label(), "");

    let docs = ProjectDataService::bundled().documents(1, PageType::Compliance);
    assert_eq!(docs.len(), 8);
    assert_eq!(filter_documents(docs, panel.active()).len(), 8);
}

#[test]
fn activity_feed_pages() {
    let activities = ProjectDataService::bundled().activities(1, PageType::Overview).to_vec();
    assert_eq!(activities.len(), 12);
    let mut feed = Paginator::new(activities);
    assert_eq!(feed.page_count(), 3);
    assert!(!feed.advance(PageStep::Previous));
    assert!(feed.jump_to(3));
    assert!(!feed.advance(PageStep::Next));
    assert_eq!(feed.visible_slice().len(), 2);
}
