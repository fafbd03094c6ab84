// src/config/validation.rs

use crate::config::schema::{
    FieldKind, FieldSpec, EXPECTED_FIELDS, MAX_DEPTH, PACKAGE_NAME, REPO, TEST_MODE, VERSION,
};
use crate::config::{RawConfig, ValidatedConfig};
use crate::error::ConfigError;
use serde_json::{Number, Value};
use tracing::debug;

type Result<T> = std::result::Result<T, ConfigError>;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Check `raw` against the expected fields and build the normalized config.
    ///
    /// Presence of every field is verified before any field is inspected, so
    /// a missing key always wins over a malformed one.
    pub fn validate(raw: &RawConfig) -> Result<ValidatedConfig> {
        debug!("Starting configuration validation");

        Self::check_presence(raw)?;
        debug!("Presence check passed");

        let package_name = Self::require_text(raw, &PACKAGE_NAME)?;
        let repo = Self::require_text(raw, &REPO)?;
        let test_mode = Self::require_flag(raw, &TEST_MODE)?;
        let version = Self::require_text(raw, &VERSION)?;
        let max_depth = Self::require_integer(raw, &MAX_DEPTH)?;

        debug!("Configuration validation completed successfully");
        Ok(ValidatedConfig::new(
            package_name,
            repo,
            test_mode,
            version,
            max_depth,
        ))
    }

    fn check_presence(raw: &RawConfig) -> Result<()> {
        match EXPECTED_FIELDS.iter().find(|spec| !raw.contains_key(spec.name)) {
            Some(spec) => Err(ConfigError::MissingField {
                key: spec.name.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn field<'a>(raw: &'a RawConfig, spec: &FieldSpec) -> Result<&'a Value> {
        raw.get(spec.name).ok_or_else(|| ConfigError::MissingField {
            key: spec.name.to_string(),
        })
    }

    fn require_text(raw: &RawConfig, spec: &FieldSpec) -> Result<String> {
        let Value::String(text) = Self::field(raw, spec)? else {
            return Err(ConfigError::Type {
                field: spec.name.to_string(),
                expectation: spec.expectation,
            });
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyValue {
                field: spec.name.to_string(),
                expectation: spec.expectation,
            });
        }

        debug!(config.field = spec.name, "Text field accepted");
        Ok(trimmed.to_string())
    }

    fn require_flag(raw: &RawConfig, spec: &FieldSpec) -> Result<bool> {
        let value = Self::field(raw, spec)?;
        let flag = coerce_bool(value).ok_or_else(|| ConfigError::Coercion {
            field: spec.name.to_string(),
            value: display_value(value),
        })?;

        debug!(config.field = spec.name, value = flag, "Flag field accepted");
        Ok(flag)
    }

    fn require_integer(raw: &RawConfig, spec: &FieldSpec) -> Result<u64> {
        let FieldKind::Integer { min } = spec.kind else {
            return Err(ConfigError::Type {
                field: spec.name.to_string(),
                expectation: spec.expectation,
            });
        };

        let value = coerce_integer(Self::field(raw, spec)?).ok_or_else(|| ConfigError::Type {
            field: spec.name.to_string(),
            expectation: spec.expectation,
        })?;

        let out_of_range = || ConfigError::Range {
            field: spec.name.to_string(),
            min,
            actual: value,
        };
        if value < min {
            return Err(out_of_range());
        }
        let value = u64::try_from(value).map_err(|_| out_of_range())?;

        debug!(config.field = spec.name, value, "Integer field accepted");
        Ok(value)
    }
}

/// Render a rejected value for an error message: strings in single quotes,
/// `None` for null, `True`/`False` for booleans.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<_> = items.iter().map(display_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<_> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), display_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn quote(s: &str) -> String {
    // Double quotes only when that avoids escaping a single quote.
    let delim = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Coerce a JSON value to a boolean.
///
/// Accepts booleans, any number (zero is `false`), and the tokens
/// `true`/`yes`/`1` and `false`/`no`/`0` in any case, surrounded by whitespace.
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Coerce a JSON value to an integer.
///
/// Accepts numbers with an integral value (`3`, `3.0`) and strings made of
/// ASCII digits only once trimmed. No bound is applied here.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => integral_number(n),
        Value::String(s) => {
            let digits = s.trim();
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.parse().ok()
        }
        _ => None,
    }
}

fn integral_number(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.is_u64() {
        // Above i64::MAX.
        return None;
    }
    let f = n.as_f64()?;
    // 2^63 is exactly representable; anything at or above it overflows i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.fract() == 0.0 && f >= -LIMIT && f < LIMIT {
        Some(f as i64)
    } else {
        None
    }
}
