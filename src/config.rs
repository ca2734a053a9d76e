//! Environment-driven configuration for the content tools.

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the HTTP content source fetches documents under.
    pub content_base_url: String,
    /// Local content checkout for the filesystem source.
    pub content_dir: String,
    pub default_locale: String,
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            content_base_url: std::env::var("CONTENT_BASE_URL")
                .unwrap_or_else(|_| "https://rwai.org/content/blueprints".to_string()),
            content_dir: std::env::var("CONTENT_DIR")
                .unwrap_or_else(|_| "./content/blueprints".to_string()),
            default_locale: std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string()),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
