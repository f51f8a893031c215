//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `IAF_DASHBOARD` prefix and nested
//! values are separated by double underscores. Every value has a default, so
//! an empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use iaf_dashboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Filter span limit: {} days", config.rules.max_range_span_days);
//! ```

mod error;
mod logging;
mod rules;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use rules::RulesConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Date filter limits and action plan policies
    #[serde(default)]
    pub rules: RulesConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `IAF_DASHBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `IAF_DASHBOARD__RULES__MAX_RANGE_SPAN_DAYS=180` -> `rules.max_range_span_days = 180`
    /// - `IAF_DASHBOARD__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("IAF_DASHBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.rules.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action_plan::ProgressPolicy;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "IAF_DASHBOARD__RULES__MAX_RANGE_SPAN_DAYS",
        "IAF_DASHBOARD__RULES__DEFAULT_WINDOW_DAYS",
        "IAF_DASHBOARD__RULES__PROGRESS_ON_EDIT",
        "IAF_DASHBOARD__LOGGING__FILTER",
        "IAF_DASHBOARD__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.rules, RulesConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_rules_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("IAF_DASHBOARD__RULES__MAX_RANGE_SPAN_DAYS", "180");
        env::set_var("IAF_DASHBOARD__RULES__PROGRESS_ON_EDIT", "complete_sets_full");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.rules.max_range_span_days, 180);
        assert_eq!(config.rules.default_window_days, 30);
        assert_eq!(config.rules.progress_on_edit, ProgressPolicy::CompleteSetsFull);
    }

    #[test]
    fn test_load_logging_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("IAF_DASHBOARD__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_validated_rejects_inconsistent_rules() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("IAF_DASHBOARD__RULES__MAX_RANGE_SPAN_DAYS", "20");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("IAF_DASHBOARD__RULES__DEFAULT_WINDOW_DAYS", "thirty");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
