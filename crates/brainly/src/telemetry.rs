use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { directive: String, source: ParseError },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directive, .. } => {
                write!(f, "log filter '{directive}' could not be parsed")
            }
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "tracing subscriber could not be installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(err.as_ref()),
        }
    }
}

/// Installs the global fmt subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(config)?)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

fn filter_for(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidFilter {
            directive: config.log_level.clone(),
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_used_without_rust_log() {
        std::env::remove_var("RUST_LOG");
        let config = TelemetryConfig {
            log_level: "brainly=debug,info".to_string(),
        };

        let filter = filter_for(&config).expect("directive parses");
        assert!(filter.to_string().contains("brainly=debug"));
    }

    #[test]
    fn rejects_unparseable_log_level() {
        std::env::remove_var("RUST_LOG");
        let config = TelemetryConfig {
            log_level: "brainly=loud".to_string(),
        };

        match filter_for(&config) {
            Err(TelemetryError::InvalidFilter { directive, .. }) => {
                assert_eq!(directive, "brainly=loud")
            }
            other => panic!("expected filter error, got {other:?}"),
        }
    }
}
