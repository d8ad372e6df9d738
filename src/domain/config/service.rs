use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;
pub const DEFAULT_SERVER_ID: &str = "options-check";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be a valid number, got '{1}'")]
    InvalidNumber(&'static str, String),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub server_id: String,
    pub port: u16,
    pub max_upload_size: usize,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub service_secret: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server_id: DEFAULT_SERVER_ID.to_string(),
            port: DEFAULT_PORT,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            cors_allowed_origins: None,
            service_secret: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_id = match lookup("SERVER_ID") {
            Some(id) if id.trim().is_empty() => return Err(ConfigError::Empty("SERVER_ID")),
            Some(id) => id.trim().to_string(),
            None => defaults.server_id,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber("PORT", raw))?,
            None => defaults.port,
        };

        let max_upload_size = match lookup("MAX_UPLOAD_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidNumber("MAX_UPLOAD_SIZE", raw))?,
            None => defaults.max_upload_size,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        });

        let service_secret = lookup("SERVICE_SECRET").filter(|s| !s.is_empty());

        Ok(Self {
            server_id,
            port,
            max_upload_size,
            cors_allowed_origins,
            service_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServiceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server_id, DEFAULT_SERVER_ID);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_upload_size, DEFAULT_MAX_UPLOAD_SIZE);
        assert!(config.cors_allowed_origins.is_none());
        assert!(config.service_secret.is_none());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("SERVER_ID", "webhost-1"),
            ("PORT", "9000"),
            ("MAX_UPLOAD_SIZE", "2048"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("SERVICE_SECRET", "hunter2"),
        ]))
        .unwrap();

        assert_eq!(config.server_id, "webhost-1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.max_upload_size, 2048);
        assert_eq!(
            config.cors_allowed_origins,
            Some(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
        assert_eq!(config.service_secret.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        let err = ServiceConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidNumber("PORT", "eighty".to_string()));

        let err =
            ServiceConfig::from_lookup(lookup_from(&[("MAX_UPLOAD_SIZE", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber("MAX_UPLOAD_SIZE", _)));
    }

    #[test]
    fn test_blank_server_id_is_an_error() {
        let err = ServiceConfig::from_lookup(lookup_from(&[("SERVER_ID", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty("SERVER_ID"));
    }

    #[test]
    fn test_empty_secret_means_unguarded() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("SERVICE_SECRET", "")])).unwrap();
        assert!(config.service_secret.is_none());
    }
}
