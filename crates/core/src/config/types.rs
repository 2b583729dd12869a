use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::catalog::{TmdbConfig, TrendingWindow};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Movie catalog client settings (API token is required).
    pub catalog: TmdbConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration (session store)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("explorer.db")
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub catalog: SanitizedCatalogConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

/// Sanitized catalog config (API token hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub api_token_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub trending_window: TrendingWindow,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            catalog: SanitizedCatalogConfig {
                api_token_configured: !config.catalog.api_token.is_empty(),
                base_url: config.catalog.base_url.clone(),
                trending_window: config.catalog.trending_window,
            },
            server: config.server.clone(),
            database: config.database.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_valid_config() {
        let toml = r#"
[catalog]
api_token = "test-token"

[server]
host = "127.0.0.1"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.api_token, "test-token");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.catalog.trending_window, TrendingWindow::Day);
    }

    #[test]
    fn test_deserialize_with_default_server_and_database() {
        let toml = r#"
[catalog]
api_token = "test-token"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.database.path.to_str().unwrap(), "explorer.db");
    }

    #[test]
    fn test_deserialize_missing_catalog_fails() {
        let toml = r#"
[server]
port = 8080
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_trending_window() {
        let toml = r#"
[catalog]
api_token = "test-token"
trending_window = "week"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.trending_window, TrendingWindow::Week);
    }

    #[test]
    fn test_sanitized_config_redacts_token() {
        let toml = r#"
[catalog]
api_token = "very-secret"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let sanitized = SanitizedConfig::from(&config);
        assert!(sanitized.catalog.api_token_configured);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("very-secret"));
    }
}
