use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog API token is present
/// - Catalog base URL, when set, is an HTTP(S) URL
/// - Server port is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.catalog.api_token.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.api_token cannot be empty".to_string(),
        ));
    }

    if let Some(ref base_url) = config.catalog.base_url {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "catalog.base_url must be an HTTP(S) URL, got: {}",
                base_url
            )));
        }
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    Ok(())
}
