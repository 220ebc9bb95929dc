//! Static project data bundled into the application.

use std::{collections::BTreeMap, fmt::Display};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    comment_period::CommentPeriod,
    document::{Activity, DocumentRecord},
    error::DataError,
    lenient,
};

/// Which data file of a project a page reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PageType {
    Home,
    Overview,
    Authorizations,
    Compliance,
    Plans,
    Nations,
}

impl PageType {
    pub const ALL: [PageType; 6] =
        [Self::Home, Self::Overview, Self::Authorizations, Self::Compliance, Self::Plans, Self::Nations];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Overview => "overview",
            Self::Authorizations => "authorizations",
            Self::Compliance => "compliance",
            Self::Plans => "plans",
            Self::Nations => "nations",
        }
    }
}

impl Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPageData {
    #[serde(deserialize_with = "lenient::list")]
    pub text: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub documents: Vec<DocumentRecord>,
    #[serde(deserialize_with = "lenient::list")]
    pub activities: Vec<Activity>,
    #[serde(deserialize_with = "lenient::list")]
    pub comment_periods: Vec<CommentPeriod>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSummary {
    pub id: u32,
    pub name: String,
    pub proponent: String,
    pub location: String,
    pub summary: String,
    pub background: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeData {
    pub title: String,
    pub text: Vec<String>,
    pub projects: Vec<ProjectSummary>,
}

/// One bundled data file.
pub struct DataSource {
    pub file: &'static str,
    pub project: u32,
    pub page: PageType,
    pub json: &'static str,
}

const HOME_FILE: &str = "general/home.json";
const HOME_JSON: &str = include_str!("../data/general/home.json");

macro_rules! bundled {
    ($($project:literal / $page:ident => $path:literal),* $(,)?) => {
        &[$(DataSource {
            file: $path,
            project: $project,
            page: PageType::$page,
            json: include_str!(concat!("../data/", $path)),
        }),*]
    };
}

const BUNDLED_SOURCES: &[DataSource] = bundled![
    1 / Overview => "project1/overview.json",
    1 / Authorizations => "project1/authorizations.json",
    1 / Compliance => "project1/compliance.json",
    1 / Plans => "project1/plans.json",
    1 / Nations => "project1/nations.json",
    2 / Overview => "project2/overview.json",
    2 / Authorizations => "project2/authorizations.json",
    2 / Compliance => "project2/compliance.json",
    2 / Plans => "project2/plans.json",
    2 / Nations => "project2/nations.json",
];

static BUNDLED: Lazy<ProjectDataService> = Lazy::new(|| ProjectDataService::from_sources(HOME_JSON, BUNDLED_SOURCES));

/// Read-only lookups over the project data. Every call returns references
/// into the same parsed data.
#[derive(Debug, Default)]
pub struct ProjectDataService {
    home: HomeData,
    pages: BTreeMap<(u32, PageType), ProjectPageData>,
}

impl ProjectDataService {
    pub fn bundled() -> &'static ProjectDataService {
        &BUNDLED
    }

    /// Parses every source. A file that cannot be read at all is logged and
    /// left out; the others still load.
    pub fn from_sources(home_json: &str, sources: &[DataSource]) -> Self {
        let home = serde_json::from_str(home_json).unwrap_or_else(|source| {
            tracing::error!("{}", DataError::Malformed { file: HOME_FILE, source });
            HomeData::default()
        });
        let mut pages = BTreeMap::new();
        for src in sources {
            let page: ProjectPageData = match serde_json::from_str(src.json) {
                Ok(page) => page,
                Err(source) => {
                    tracing::error!("skipping {}", DataError::Malformed { file: src.file, source });
                    continue;
                }
            };
            tracing::debug!(
                "loaded {}: {} documents, {} activities",
                src.file,
                page.documents.len(),
                page.activities.len()
            );
            pages.insert((src.project, src.page), page);
        }
        Self { home, pages }
    }

    pub fn home(&self) -> &HomeData {
        &self.home
    }

    pub fn projects(&self) -> &[ProjectSummary] {
        &self.home.projects
    }

    pub fn project(&self, id: u32) -> Option<&ProjectSummary> {
        self.home.projects.iter().find(|p| p.id == id)
    }

    pub fn page(&self, id: u32, page_type: PageType) -> Result<&ProjectPageData, DataError> {
        if !self.pages.keys().any(|(project, _)| *project == id) {
            return Err(DataError::UnknownProject(id));
        }
        self.pages.get(&(id, page_type)).ok_or(DataError::UnknownPage { project: id, page: page_type })
    }

    fn page_or_empty(&self, id: u32, page_type: PageType) -> Option<&ProjectPageData> {
        match self.page(id, page_type) {
            Ok(page) => Some(page),
            Err(e) => {
                tracing::debug!("no data: {e}");
                None
            }
        }
    }

    pub fn text(&self, id: u32, page_type: PageType) -> &[String] {
        self.page_or_empty(id, page_type).map(|p| p.text.as_slice()).unwrap_or_default()
    }

    pub fn documents(&self, id: u32, page_type: PageType) -> &[DocumentRecord] {
        self.page_or_empty(id, page_type).map(|p| p.documents.as_slice()).unwrap_or_default()
    }

    pub fn activities(&self, id: u32, page_type: PageType) -> &[Activity] {
        self.page_or_empty(id, page_type).map(|p| p.activities.as_slice()).unwrap_or_default()
    }

    pub fn comment_periods(&self, id: u32, page_type: PageType) -> &[CommentPeriod] {
        self.page_or_empty(id, page_type).map(|p| p.comment_periods.as_slice()).unwrap_or_default()
    }
}
