use std::net::SocketAddr;

use serde::Deserialize;

/// Environment variables override file values, e.g. `DAILY_HOT__API__BIND`.
const ENV_PREFIX: &str = "DAILY_HOT";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `info` or `daily_hot=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

/// Outgoing client settings. Upstream base URL and timeout are not set here,
/// they come from the host credentials on every call.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn default_user_agent() -> String {
    concat!("daily-hot/", env!("CARGO_PKG_VERSION")).into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: default_level(),
            api: ApiConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Reads `config.yaml` (optional) from the working directory, then the
    /// environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::File::with_name("config").required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }
}
