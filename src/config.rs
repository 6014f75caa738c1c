use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SHARE_BASE_URL: &str = "https://senkyocar-labo.com/simulation";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub pricing: PricingConfig,
    pub cache: CacheConfig,
    pub share: ShareConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let price_table_path = env::var("PRICE_TABLE_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let capacity = parse_positive("QUOTE_CACHE_CAPACITY", CacheConfig::DEFAULT_CAPACITY)?;
        let ttl_secs = parse_positive("QUOTE_CACHE_TTL_SECS", CacheConfig::DEFAULT_TTL_SECS)?;

        let base_url =
            env::var("SHARE_BASE_URL").unwrap_or_else(|_| DEFAULT_SHARE_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidShareBaseUrl(base_url));
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            pricing: PricingConfig { price_table_path },
            cache: CacheConfig {
                capacity,
                ttl: Duration::from_secs(ttl_secs),
            },
            share: ShareConfig { base_url },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: AppEnvironment::Development,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            pricing: PricingConfig::default(),
            cache: CacheConfig::default(),
            share: ShareConfig {
                base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            },
        }
    }
}

fn parse_positive(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(ConfigError::InvalidNumber { var, value }),
        },
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the price tables come from. `None` uses the tables built into the binary.
#[derive(Debug, Clone, Default)]
pub struct PricingConfig {
    pub price_table_path: Option<PathBuf>,
}

/// Quote cache sizing.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub capacity: u64,
    pub ttl: Duration,
}

impl CacheConfig {
    pub const DEFAULT_CAPACITY: u64 = 1000;
    pub const DEFAULT_TTL_SECS: u64 = 600;
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            ttl: Duration::from_secs(Self::DEFAULT_TTL_SECS),
        }
    }
}

/// Share link settings.
#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,

    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("SHARE_BASE_URL must be an http(s) URL, got '{0}'")]
    InvalidShareBaseUrl(String),
}
