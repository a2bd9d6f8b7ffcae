pub mod analysis_status;
pub mod commands;
pub mod language;
pub mod result_poll;
pub mod suggestion;
pub mod suggestion_category;
