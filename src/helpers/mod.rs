pub mod config_helper;
pub mod source_reader;
