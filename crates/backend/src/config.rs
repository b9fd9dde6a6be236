//! Server configuration from environment variables (optionally via `.env`)

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_PROXY_URL: &str = "https://api.allorigins.win/get?url=";

#[derive(Debug, Clone)]
pub struct Config {
    /// Steam Web API key, live fetches are disabled without it
    pub steam_api_key: Option<String>,

    /// Generative-AI key, insights fall back to a fixed text without it
    pub gemini_api_key: Option<String>,

    pub gemini_model: String,

    pub bind_address: String,

    /// Route Steam requests through the CORS proxy
    pub use_proxy: bool,

    pub proxy_url: String,

    /// Timeout for outbound requests in seconds (default: 30)
    pub http_timeout_secs: u64,

    pub ai_requests_per_minute: usize,

    pub ai_requests_per_day: usize,

    /// Generation requests one client IP may make per minute
    pub ai_requests_per_ip_per_minute: usize,

    /// Minimum gap between two Steam requests in milliseconds
    pub steam_min_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steam_api_key: None,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            use_proxy: false,
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            http_timeout_secs: 30,
            ai_requests_per_minute: 5,
            ai_requests_per_day: 20,
            ai_requests_per_ip_per_minute: 10,
            steam_min_interval_ms: 250,
        }
    }
}

impl Config {
    /// Load config from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; unset or unparsable values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            steam_api_key: non_empty("STEAM_API_KEY"),
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            bind_address: non_empty("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            use_proxy: non_empty("STEAM_USE_PROXY")
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.use_proxy),
            proxy_url: non_empty("STEAM_PROXY_URL").unwrap_or(defaults.proxy_url),
            http_timeout_secs: non_empty("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout_secs),
            ai_requests_per_minute: non_empty("AI_REQUESTS_PER_MINUTE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ai_requests_per_minute),
            ai_requests_per_day: non_empty("AI_REQUESTS_PER_DAY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ai_requests_per_day),
            ai_requests_per_ip_per_minute: non_empty("AI_REQUESTS_PER_IP_PER_MINUTE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ai_requests_per_ip_per_minute),
            steam_min_interval_ms: non_empty("STEAM_MIN_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.steam_min_interval_ms),
        }
    }

    pub fn has_steam_credentials(&self) -> bool {
        self.steam_api_key.is_some()
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
