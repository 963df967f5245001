use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog cache capacity is not 0
/// - Local index CSV path is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.catalog.cache_capacity == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.cache_capacity cannot be 0".to_string(),
        ));
    }

    if config.local_index.csv_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "local_index.csv_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
