pub mod navbar;
pub mod error_boundary;
pub mod pagination_controls;
pub mod project_components;
pub mod document_components;
