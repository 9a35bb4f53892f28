//! Configuration module for the journal engine.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates calculator limits before the server starts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("HTTP port: {}", config.server.http_port);
//! ```

mod calculators;
mod observability;
mod server;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use calculators::{ConsistencyConfig, ExpectancyConfig, SimulationConfig};
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use server::ServerConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// Whether the error means the config file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ReadError { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Monte Carlo defaults and limits.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Expectancy limits.
    #[serde(default)]
    pub expectancy: ExpectancyConfig,
    /// Consistency rule.
    #[serde(default)]
    pub consistency: ConsistencyConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is a constant pattern
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.http_port == 0 {
        return Err(ConfigError::ValidationError(
            "server.http_port must be non-zero".to_string(),
        ));
    }

    let sim = &config.simulation;
    if sim.histogram_bins == 0 {
        return Err(ConfigError::ValidationError(
            "simulation.histogram_bins must be at least 1".to_string(),
        ));
    }
    if sim.default_path_count > sim.max_path_count {
        return Err(ConfigError::ValidationError(
            "simulation.default_path_count must not exceed max_path_count".to_string(),
        ));
    }
    if sim.default_steps_per_path > sim.max_steps_per_path {
        return Err(ConfigError::ValidationError(
            "simulation.default_steps_per_path must not exceed max_steps_per_path".to_string(),
        ));
    }
    if sim.default_curves_to_retain > sim.max_curves_to_retain {
        return Err(ConfigError::ValidationError(
            "simulation.default_curves_to_retain must not exceed max_curves_to_retain"
                .to_string(),
        ));
    }

    let threshold = config.consistency.threshold;
    if threshold <= Decimal::ZERO || threshold >= Decimal::ONE {
        return Err(ConfigError::ValidationError(
            "consistency.threshold must be between 0 and 1 (exclusive)".to_string(),
        ));
    }

    let valid_formats = ["json", "pretty"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.simulation.default_path_count, 500);
        assert_eq!(config.simulation.default_steps_per_path, 100);
        assert_eq!(config.simulation.default_curves_to_retain, 20);
        assert_eq!(config.simulation.histogram_bins, 30);
        assert_eq!(config.simulation.max_curves_to_retain, 100);
        assert_eq!(config.expectancy.max_trade_count, 10_000);
        assert_eq!(config.consistency.threshold, dec!(0.35));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_empty_document_uses_defaults() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.observability.logging.format, "json");
        assert_eq!(config.simulation.max_path_count, 5000);
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "level: ${JOURNAL_CONFIG_TEST_NONEXISTENT_VAR:-debug}";
        assert_eq!(interpolate_env_vars(input), "level: debug");
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "bind: ${JOURNAL_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "bind: ");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax
    fn test_env_var_with_default_uses_existing() {
        let result = interpolate_env_vars("path: ${PATH:-default}");
        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_validation_zero_port() {
        let yaml = r"
server:
  http_port: 0
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero port");
        };
        assert!(err.to_string().contains("http_port"));
    }

    #[test]
    fn test_validation_default_paths_above_max() {
        let yaml = r"
simulation:
  default_path_count: 100
  max_path_count: 10
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for default above max");
        };
        assert!(err.to_string().contains("default_path_count"));
    }

    #[test]
    fn test_validation_default_curves_above_max() {
        let yaml = r"
simulation:
  default_curves_to_retain: 50
  max_curves_to_retain: 10
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for default curves above max");
        };
        assert!(err.to_string().contains("default_curves_to_retain"));
    }

    #[test]
    fn test_validation_threshold_out_of_range() {
        let yaml = r#"
consistency:
  threshold: "1.5"
"#;
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for threshold");
        };
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for log format");
        };
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
server:
  http_port: 9090
  bind_address: "127.0.0.1"

observability:
  logging:
    level: "debug"
    format: "pretty"

simulation:
  default_path_count: 200
  default_steps_per_path: 50
  default_curves_to_retain: 5
  histogram_bins: 10
  max_path_count: 1000
  max_steps_per_path: 500
  max_curves_to_retain: 8

expectancy:
  max_trade_count: 250

consistency:
  threshold: "0.40"
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.server.socket_addr(), "127.0.0.1:9090");
        assert_eq!(config.observability.logging.level, "debug");
        assert_eq!(config.simulation.default_path_count, 200);
        assert_eq!(config.simulation.histogram_bins, 10);
        assert_eq!(config.simulation.max_curves_to_retain, 8);
        assert_eq!(config.expectancy.max_trade_count, 250);
        assert_eq!(config.consistency.threshold, dec!(0.4));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  http_port: 7000").unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.server.http_port, 7000);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let Err(err) = load_config(path.to_str()) else {
            panic!("expected read error");
        };
        assert!(err.is_not_found());
    }
}
