pub mod project_api;
