//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and the endpoint
//! URL. Every problem is reported, not just the first.

use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoint.url '{url}' is not a valid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("endpoint.url scheme '{0}' is not supported (expected http or https)")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Render a list of validation errors on one line.
pub fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate a parsed configuration.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.endpoint.url) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUrl {
            url: config.endpoint.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.endpoint.timeout_secs == 0 {
        errors.push(ValidationError::Zero("endpoint.timeout_secs"));
    }
    if config.polling.interval_ms == 0 {
        errors.push(ValidationError::Zero("polling.interval_ms"));
    }
    if config.polling.unavailable_threshold == 0 {
        errors.push(ValidationError::Zero("polling.unavailable_threshold"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
