use serde::Deserialize;

impl Config {

    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("MOVIEHOOK_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            // Add in config toml, if present
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of MOVIEHOOK)
            .add_source(
                config::Environment::with_prefix("MOVIEHOOK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Plain variables used by existing deployments win over everything else
            .set_override_option("tmdb.bearer_token", std::env::var("TMDB_BEARER_TOKEN").ok())?
            .set_override_option("webhook.url", std::env::var("WEBHOOK_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logs: LogsConfig,
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub tmdb: TmdbConfig,
    pub weather: WeatherConfig,
    pub webhook: WebhookConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    pub level: String,
    pub enable_reqwest_logging: bool,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_reqwest_logging: false,
        }
    }
}

// ===============================================================================
// Server
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Directory mounted under `/static` (landing page lives here)
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

// ===============================================================================
// Outbound HTTP
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout for every outbound call. 0 disables it.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl HttpConfig {
    pub fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if self.timeout_secs > 0 {
            builder = builder.timeout(std::time::Duration::from_secs(self.timeout_secs));
        }
        builder.build()
    }
}

// ===============================================================================
// TMDB
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    pub base_url: String,
    /// Not validated at startup; an empty token is simply rejected upstream.
    pub bearer_token: String,
    pub language: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            bearer_token: String::new(),
            language: "en-US".to_string(),
        }
    }
}

// ===============================================================================
// Weather archive
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        // Medellín
        Self {
            base_url: "https://archive-api.open-meteo.com/v1/archive".to_string(),
            latitude: 6.2442,
            longitude: -75.5812,
            timezone: "America/Bogota".to_string(),
        }
    }
}

// ===============================================================================
// Webhook
// ===============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: String,
}
