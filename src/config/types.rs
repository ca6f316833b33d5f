use serde::Deserialize;

/// Root configuration container.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Search endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the search endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API key. The `PIXELROVER_API_KEY` environment variable takes
    /// precedence over this value.
    #[serde(default)]
    pub key: Option<String>,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Fixed content-type filter sent with every request.
    #[serde(default = "default_image_type")]
    pub image_type: String,
    /// Fixed orientation filter sent with every request.
    #[serde(default = "default_orientation")]
    pub orientation: String,
    /// Safe-search filter (default: enabled).
    #[serde(default = "default_safesearch")]
    pub safesearch: bool,
}

/// Pagination settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Hits requested per page. The API accepts 3..=200 (default: 40).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Interface tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Load-more fires when the gallery viewport bottom is within this
    /// many rows of the last rendered card (default: 3).
    #[serde(default = "default_scroll_threshold_rows")]
    pub scroll_threshold_rows: u16,
    /// How long a notification stays on screen, in milliseconds
    /// (default: 3000).
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
}

fn default_endpoint() -> String {
    "https://pixabay.com/api/".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_image_type() -> String {
    "photo".to_string()
}

fn default_orientation() -> String {
    "horizontal".to_string()
}

fn default_safesearch() -> bool {
    true
}

fn default_per_page() -> u32 {
    40
}

fn default_tick_ms() -> u64 {
    250
}

fn default_scroll_threshold_rows() -> u16 {
    3
}

fn default_notice_ttl_ms() -> u64 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            key: None,
            connect_timeout_seconds: default_connect_timeout(),
            image_type: default_image_type(),
            orientation: default_orientation(),
            safesearch: default_safesearch(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            scroll_threshold_rows: default_scroll_threshold_rows(),
            notice_ttl_ms: default_notice_ttl_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            search: SearchConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
