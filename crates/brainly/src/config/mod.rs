use chrono::Duration;
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const ENV_STAGE: &str = "APP_ENV";
const ENV_HOST: &str = "APP_HOST";
const ENV_PORT: &str = "APP_PORT";
const ENV_LOG_LEVEL: &str = "APP_LOG_LEVEL";
const ENV_CATALOG_PATH: &str = "APP_CATALOG_PATH";
const ENV_DRAFT_TTL: &str = "APP_DRAFT_TTL_MINUTES";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_DRAFT_TTL_MINUTES: i64 = 60;

/// Deployment stage the service believes it runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    /// Unknown stage names fall back to development.
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Everything the assessment service reads from its environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    /// Reads `.env` (when present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = var(ENV_STAGE)
            .map(|stage| AppEnvironment::parse(&stage))
            .unwrap_or(AppEnvironment::Development);

        let port = match var(ENV_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let draft_ttl_minutes = match var(ENV_DRAFT_TTL) {
            Some(raw) => match raw.parse::<i64>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => return Err(ConfigError::InvalidDraftTtl(raw)),
            },
            None => DEFAULT_DRAFT_TTL_MINUTES,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host: var(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: var(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
            assessment: AssessmentConfig {
                catalog_path: var(ENV_CATALOG_PATH).map(PathBuf::from),
                draft_ttl_minutes,
            },
        })
    }
}

/// Trimmed value of an environment variable; blank counts as unset.
fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost {
                    value: self.host.clone(),
                    source,
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

/// Questionnaire source and draft retention.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// JSON catalog to serve instead of the built-in questionnaire.
    pub catalog_path: Option<PathBuf>,
    pub draft_ttl_minutes: i64,
}

impl AssessmentConfig {
    pub fn draft_ttl(&self) -> Duration {
        Duration::minutes(self.draft_ttl_minutes)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
    InvalidDraftTtl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(raw) => {
                write!(f, "{ENV_PORT} must be a port number, got '{raw}'")
            }
            ConfigError::InvalidHost { value, .. } => {
                write!(f, "{ENV_HOST} '{value}' is not an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDraftTtl(raw) => {
                write!(f, "{ENV_DRAFT_TTL} must be a positive number of minutes, got '{raw}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source, .. } => Some(source),
            ConfigError::InvalidPort(_) | ConfigError::InvalidDraftTtl(_) => None,
        }
    }
}
