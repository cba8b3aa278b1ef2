/// Connection settings for the festival backend API
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: std::env::var("FESTIVAL_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            user_agent: "FestivalScoreboard/1.0",
            timeout_secs: 30,
        }
    }
}

/// Settings for the live watch view and results browsing
#[derive(Debug, Clone)]
pub struct LiveSettings {
    /// Seconds between polls of the active-game set.
    pub refresh_interval_secs: u64,
    /// Completed results shown per page.
    pub results_page_size: usize,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 10,
            results_page_size: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub live: LiveSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
