//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DeliveryAlertsConfig;
use crate::domain::errors::DeliveryAlertsError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "DELIVERY_ALERTS";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DeliveryAlertsConfig
/// 4. Applies environment variable overrides (DELIVERY_ALERTS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use delivery_alerts::config::loader::load_config;
///
/// let config = load_config("delivery-alerts.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DeliveryAlertsConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DeliveryAlertsError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DeliveryAlertsError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Parses configuration from TOML text, applying substitution, overrides and validation
pub fn load_config_from_str(contents: &str) -> Result<DeliveryAlertsConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: DeliveryAlertsConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        DeliveryAlertsError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| {
        DeliveryAlertsError::Configuration(format!("Invalid substitution pattern: {e}"))
    })?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Placeholders in comments are left alone
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DeliveryAlertsError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Reads `DELIVERY_ALERTS_<KEY>` if set
fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

/// Applies environment variable overrides using DELIVERY_ALERTS_* prefix
///
/// Environment variables follow the pattern: DELIVERY_ALERTS_<SECTION>_<KEY>
/// For example: DELIVERY_ALERTS_API_URLS_ORDERS_API
fn apply_env_overrides(config: &mut DeliveryAlertsConfig) -> Result<()> {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("API_URLS_ORDERS_API") {
        config.api_urls.orders_api = val;
    }
    if let Some(val) = env_override("API_URLS_ALERT_API") {
        config.api_urls.alert_api = val;
    }
    if let Some(val) = env_override("API_URLS_UPDATE_API") {
        config.api_urls.update_api = val;
    }

    if let Some(val) = env_override("HTTP_TIMEOUT_SECONDS") {
        config.http.timeout_seconds = val.parse().map_err(|_| {
            DeliveryAlertsError::Configuration(format!(
                "{ENV_PREFIX}_HTTP_TIMEOUT_SECONDS must be a number, got '{val}'"
            ))
        })?;
    }
    if let Some(val) = env_override("HTTP_CONNECT_TIMEOUT_SECONDS") {
        config.http.connect_timeout_seconds = val.parse().map_err(|_| {
            DeliveryAlertsError::Configuration(format!(
                "{ENV_PREFIX}_HTTP_CONNECT_TIMEOUT_SECONDS must be a number, got '{val}'"
            ))
        })?;
    }

    if let Some(val) = env_override("PROCESSING_ON_ORDER_ERROR") {
        config.processing.on_order_error = val.parse().map_err(DeliveryAlertsError::Configuration)?;
    }

    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("DA_LOADER_TEST_VAR", "test_value");
        let input = "orders_api = \"${DA_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "orders_api = \"test_value\"\n");
        std::env::remove_var("DA_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("DA_LOADER_MISSING_VAR");
        let input = "alert_api = \"${DA_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("DA_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("DA_LOADER_COMMENTED_VAR");
        let input = "# update_api = \"${DA_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${DA_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(DeliveryAlertsError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[api_urls]
orders_api = "https://orders-api.com/orders"
alert_api = "https://alert-api.com/alerts"
update_api = "https://update-api.com/update"

[http]
timeout_seconds = 15
connect_timeout_seconds = 5
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.api_urls.alert_api, "https://alert-api.com/alerts");
        assert_eq!(config.http.timeout_seconds, 15);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let result = load_config_from_str(
            r#"
[http]
timeout_seconds = 0
"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }

    #[test]
    fn test_load_config_malformed_toml() {
        let result = load_config_from_str("[api_urls\norders_api = ");
        let err = result.unwrap_err();
        assert!(matches!(err, DeliveryAlertsError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
