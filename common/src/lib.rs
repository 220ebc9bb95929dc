//! Data model and document filtering core shared by the web frontend.

pub mod constants;
pub mod dates;
pub mod error;
pub mod document;
mod lenient;
pub mod project_data;
pub mod comment_period;
pub mod filter_criteria;
pub mod filter_store;
pub mod query_params;
pub mod url_sync;
pub mod predicate;
pub mod sorting;
pub mod paginator;
pub mod explore_panel;
