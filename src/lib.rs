//! Client for the AILinter code analysis service: submits code, polls for the
//! categorized suggestions and renders them in the terminal.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
