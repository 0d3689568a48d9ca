use tracing::Level;

use crate::error::RuntimeError;

/// Marker in the name of log groups written by Lambda functions.
pub const DEFAULT_FUNCTION_LOG_PREFIX: &str = "/aws/lambda/";

/// Marker in the name of REST API execution log groups.
/// API Gateway names them `API-Gateway-Execution-Logs_{rest-api-id}/{stage}`.
pub const DEFAULT_API_EXECUTION_LOG_PREFIX: &str = "API-Gateway-Execution-Logs_";

/// Settings for a cleanup run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Marker identifying function log groups
    pub function_log_prefix: String,
    /// Marker identifying REST API execution log groups
    pub api_execution_log_prefix: String,
    /// Log the candidates without deleting them
    pub dry_run: bool,
    /// Delete candidates even when the live resource listing was incomplete
    pub delete_on_partial_inventory: bool,
    /// Most verbose level emitted by the subscriber
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            function_log_prefix: DEFAULT_FUNCTION_LOG_PREFIX.into(),
            api_execution_log_prefix: DEFAULT_API_EXECUTION_LOG_PREFIX.into(),
            dry_run: false,
            delete_on_partial_inventory: false,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Config, RuntimeError> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    /// Unset variables keep their default value.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, RuntimeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(prefix) = lookup("FUNCTION_LOG_PREFIX") {
            config.function_log_prefix = non_empty("FUNCTION_LOG_PREFIX", prefix)?;
        }
        if let Some(prefix) = lookup("API_EXECUTION_LOG_PREFIX") {
            config.api_execution_log_prefix = non_empty("API_EXECUTION_LOG_PREFIX", prefix)?;
        }
        if let Some(value) = lookup("DRY_RUN") {
            config.dry_run = parse_bool("DRY_RUN", value)?;
        }
        if let Some(value) = lookup("DELETE_ON_PARTIAL_INVENTORY") {
            config.delete_on_partial_inventory = parse_bool("DELETE_ON_PARTIAL_INVENTORY", value)?;
        }
        if let Some(value) = lookup("LOG_LEVEL") {
            config.log_level = value.trim().parse().map_err(|_| invalid("LOG_LEVEL", &value))?;
        }

        Ok(config)
    }
}

// An empty marker would classify every log group as a match.
fn non_empty(name: &str, value: String) -> Result<String, RuntimeError> {
    if value.is_empty() {
        return Err(invalid(name, &value));
    }
    Ok(value)
}

fn parse_bool(name: &str, value: String) -> Result<bool, RuntimeError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, &value)),
    }
}

fn invalid(name: &str, value: &str) -> RuntimeError {
    RuntimeError::InvalidConfig {
        name: name.into(),
        value: value.into(),
    }
}
