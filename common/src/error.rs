//! Errors raised while reading the bundled project data.

use crate::project_data::PageType;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("unknown project {0}")]
    UnknownProject(u32),
    #[error("project {project} has no {page} page")]
    UnknownPage { project: u32, page: PageType },
    #[error("malformed bundled data {file}: {source}")]
    Malformed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
