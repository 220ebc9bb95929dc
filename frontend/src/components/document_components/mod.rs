pub mod document_browser;
pub mod explore_side_panel;
pub mod document_table;
