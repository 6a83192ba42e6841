/// Gateway configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | POS_HTTP_PORT | 8080 | Gateway HTTP port |
/// | API_BASE_URL | http://localhost:3000 | Commerce API base URL |
/// | API_TIMEOUT_SECS | 30 | Per-request timeout towards the commerce API |
/// | POS_API_TOKEN | (unset) | Bearer token forwarded to the commerce API |
/// | POS_STATION_ID | 1 | Till station identifier sent on scans |
/// | POS_USER_ID | 2 | Operator id used for fresh sessions |
/// | POS_SHOP_ID | 3 | Shop id used for fresh sessions |
/// | POS_SESSION_DIR | (unset) | Directory for persisted session files |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// API_BASE_URL=http://commerce:3000 POS_HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Gateway HTTP port
    pub http_port: u16,
    /// Commerce API base URL
    pub api_base_url: String,
    /// Per-request timeout towards the commerce API, in seconds
    pub api_timeout_secs: u64,
    /// Bearer token forwarded on commerce calls when sessions carry none
    pub api_token: Option<String>,
    /// Till station identifier included in scan requests
    pub station_id: i64,
    /// Operator id seeded into fresh sessions
    pub user_id: i64,
    /// Shop id seeded into fresh sessions
    pub shop_id: i64,
    /// Directory for persisted operator sessions; memory-only when unset
    pub session_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("POS_HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            api_timeout_secs: std::env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30),
            api_token: std::env::var("POS_API_TOKEN").ok().filter(|t| !t.is_empty()),
            station_id: std::env::var("POS_STATION_ID")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1),
            user_id: std::env::var("POS_USER_ID")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2),
            shop_id: std::env::var("POS_SHOP_ID")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3),
            session_dir: std::env::var("POS_SESSION_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the commerce endpoint and port, keeping everything else
    /// from the environment. Used by tests.
    pub fn with_overrides(api_base_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.api_base_url = api_base_url.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
