use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::language::Language;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration
    Validate,
    /// Submit code and wait for the analysis
    Analyze {
        /// Source files to analyse; each becomes its own job
        #[clap(short, long = "file")]
        files: Vec<PathBuf>,
        /// Inline code instead of files or stdin
        #[clap(short, long, conflicts_with = "files")]
        code: Option<String>,
        /// Language of the code; inferred from the file extension when omitted
        #[clap(short, long, value_enum)]
        language: Option<Language>,
        /// Label sent with inline or stdin code
        #[clap(long)]
        file_name: Option<String>,
    },
    /// Fetch a result once without waiting
    Result { analysis_id: String },
    /// Show the service-side status of an analysis
    Status { analysis_id: String },
    /// Check that the service is reachable and healthy
    Health,
    /// List supported languages
    Languages,
}
