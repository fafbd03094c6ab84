// src/config/loader.rs

use crate::config::{ConfigValidator, RawConfig, ValidatedConfig};
use crate::error::{AppError, ConfigError, Result};
use serde_json::Value;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Load and validate the configuration file in one step.
pub fn load_config(config_path: &Path) -> Result<ValidatedConfig> {
    let raw = load_raw(config_path)?;
    let config = ConfigValidator::validate(&raw)?;

    debug!("Configuration loaded and validated successfully");
    Ok(config)
}

/// Read the file at `config_path` and return its root JSON object.
///
/// The file is read completely and closed before parsing starts.
pub fn load_raw(config_path: &Path) -> Result<RawConfig> {
    let path_display = config_path.display().to_string();

    if !config_path.exists() {
        return Err(ConfigError::NotFound { path: path_display }.into());
    }

    info!(config.path = %path_display, "Loading configuration from file");
    let content = std::fs::read_to_string(config_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::from(ConfigError::NotFound {
            path: path_display.clone(),
        }),
        _ => AppError::io("read_config", format!("{path_display}: {e}")),
    })?;

    parse_raw(&content).map_err(AppError::from)
}

/// Parse configuration text into its root JSON object.
pub fn parse_raw(content: &str) -> std::result::Result<RawConfig, ConfigError> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => {
            debug!(config.keys = map.len(), "Parsed configuration object");
            Ok(map)
        }
        other => Err(ConfigError::Shape {
            found: json_type_name(&other),
        }),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
