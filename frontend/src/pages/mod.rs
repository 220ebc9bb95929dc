pub mod info_pages;
pub mod not_found_page;
pub mod project_pages;
pub mod projects_page;
