use crate::config::types::{Config, HttpConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(
            "user-agent cannot contain control characters".to_string(),
        ));
    }

    if config.page_timeout_secs < 1 || config.page_timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "page-timeout-secs must be between 1 and 120, got {}",
            config.page_timeout_secs
        )));
    }

    if config.auxiliary_timeout_secs < 1 || config.auxiliary_timeout_secs > 60 {
        return Err(ConfigError::Validation(format!(
            "auxiliary-timeout-secs must be between 1 and 60, got {}",
            config.auxiliary_timeout_secs
        )));
    }

    if config.max_redirects < 1 || config.max_redirects > 20 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be between 1 and 20, got {}",
            config.max_redirects
        )));
    }

    Ok(())
}
