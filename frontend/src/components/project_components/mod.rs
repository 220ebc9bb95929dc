pub mod project_layout;
pub mod activity_feed;
pub mod text_section;
pub mod comment_period_badge;
