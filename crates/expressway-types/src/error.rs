//! Error types for expressway-route

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown waypoint: {0}")]
    UnknownWaypoint(String),

    #[error("No waypoint matches \"{0}\"")]
    NoWaypointMatch(String),

    #[error("Invalid corridor: {0}")]
    InvalidCorridor(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_waypoint_message() {
        let err = Error::UnknownWaypoint("nowhere".to_string());
        assert_eq!(err.to_string(), "Unknown waypoint: nowhere");
    }

    #[test]
    fn test_config_error_wraps() {
        let err: Error = ConfigError::NotFound.into();
        assert!(matches!(err, Error::Config(ConfigError::NotFound)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Configuration directory not found"
        );
    }
}
