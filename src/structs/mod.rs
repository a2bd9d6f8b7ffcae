pub mod analysis_request;
pub mod analysis_result;
pub mod api_response;
pub mod category_stats;
pub mod cli;
pub mod config;
pub mod job_handle;
pub mod poll_state;
