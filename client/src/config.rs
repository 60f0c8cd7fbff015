//! Client configuration.
//!
//! Connection settings the facade requires at construction. Values can be
//! supplied directly or loaded from environment variables:
//! - `APPSIGHT_CONTROLLER_URL`: controller base URL (e.g. `http://localhost:8090`)
//! - `APPSIGHT_USERNAME`: user making the requests (e.g. `user@customer1`)
//! - `APPSIGHT_PASSWORD`: that user's password
//! - `APPSIGHT_EXTRA_PARAMS`: optional parameter suffix appended to every
//!   request (default: empty)

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Connection settings for one controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller base URL, without a trailing path.
    pub base_url: String,

    /// Username for basic authentication.
    pub username: String,

    /// Password for basic authentication.
    pub password: String,

    /// Extra query-parameter string appended verbatim to every request.
    ///
    /// An escape hatch for controller-specific flags; empty by default.
    pub extra_params: String,
}

impl ControllerConfig {
    /// Creates a configuration with no extra parameters.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            extra_params: String::new(),
        }
    }

    /// Sets the extra query-parameter suffix.
    #[must_use]
    pub fn with_extra_params(mut self, extra_params: impl Into<String>) -> Self {
        self.extra_params = extra_params.into();
        self
    }

    /// Loads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `APPSIGHT_CONTROLLER_URL`, `APPSIGHT_USERNAME` or
    /// `APPSIGHT_PASSWORD` is unset. `APPSIGHT_EXTRA_PARAMS` defaults to
    /// empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        fn required(name: &'static str) -> Result<String, ConfigError> {
            std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
        }

        Ok(Self {
            base_url: required("APPSIGHT_CONTROLLER_URL")?,
            username: required("APPSIGHT_USERNAME")?,
            password: required("APPSIGHT_PASSWORD")?,
            extra_params: std::env::var("APPSIGHT_EXTRA_PARAMS").unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_empty_extra_params() {
        let config = ControllerConfig::new("http://localhost:8090", "user@customer1", "secret");

        assert_eq!(config.base_url, "http://localhost:8090");
        assert_eq!(config.extra_params, "");
    }

    #[test]
    fn test_with_extra_params() {
        let config = ControllerConfig::new("http://localhost:8090", "user@customer1", "secret")
            .with_extra_params("custom=1");

        assert_eq!(config.extra_params, "custom=1");
    }
}
