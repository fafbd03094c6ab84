// src/output.rs

use crate::config::ValidatedConfig;
use crate::error::{AppError, Result};
use std::io::Write;

/// Render the config as `key=value` lines, one per field, in field order.
pub fn render(config: &ValidatedConfig) -> String {
    config
        .entries()
        .iter()
        .map(|(key, value)| format!("{key}={value}\n"))
        .collect()
}

/// Write the rendered config to `out`.
pub fn print_kv<W: Write>(config: &ValidatedConfig, out: &mut W) -> Result<()> {
    out.write_all(render(config).as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| AppError::Output {
            message: e.to_string(),
        })
}
