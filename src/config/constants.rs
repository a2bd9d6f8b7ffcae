use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 60;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_FILE_NAME: &str = "code.txt";
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

pub const API_URL_ENV: &str = "AILINTER_API_URL";
pub const CONFIG_DIR_NAME: &str = "ailinter";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ANALYZE_SEGMENT: &str = "analyze";
pub const RESULT_SEGMENT: &str = "result";
pub const STATUS_SEGMENT: &str = "status";
pub const HEALTH_SEGMENT: &str = "health";

pub const SPINNER_FRAME_INTERVAL_MS: u64 = 150;

pub const SUPPORTED_FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("php", "php"),
    ("rb", "ruby"),
    ("go", "go"),
    ("rs", "rust"),
    ("swift", "swift"),
    ("kt", "kotlin"),
    ("scala", "scala"),
    ("html", "html"),
    ("css", "css"),
    ("sql", "sql"),
];

pub const fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub const fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
