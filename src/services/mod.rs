pub mod analysis_history;
pub mod http_api;
pub mod job_client;
pub mod response_parser;
