//! Error handling for the configuration stage
//!
//! Two layers:
//! - [`ConfigError`]: everything that is wrong with the configuration itself
//!   (missing file, malformed JSON, missing or invalid fields)
//! - [`AppError`]: the crate-level error; wraps [`ConfigError`] and adds the
//!   failures that are not the user's configuration (I/O, output)
//!
//! Each [`AppError`] knows its process exit code and the prefix of the line
//! printed to stderr.

pub mod types;

use thiserror::Error;
use tracing::{debug, warn};

/// Exit code for a successful run.
pub const EXIT_OK: u8 = 0;
/// Exit code for any configuration error.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for any other failure.
pub const EXIT_UNEXPECTED: u8 = 3;

/// Configuration error taxonomy. Messages are user-facing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Файл конфигурации не найден: {path}")]
    NotFound { path: String },

    #[error("Ошибка разбора JSON: {message}")]
    Parse {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("Ожидается JSON-объект (словарь) в корне файла конфигурации.")]
    Shape { found: &'static str },

    #[error("Отсутствует обязательный параметр: '{key}'")]
    MissingField { key: String },

    #[error("{field} должен быть {expectation}.")]
    Type {
        field: String,
        expectation: &'static str,
    },

    #[error("{field} должен быть {expectation}.")]
    EmptyValue {
        field: String,
        expectation: &'static str,
    },

    #[error("{field}: Невозможно привести к булеву типу: {value}")]
    Coercion { field: String, value: String },

    #[error("{field} должен быть >= {min}.")]
    Range { field: String, min: i64, actual: i64 },
}

impl ConfigError {
    /// Name of the field this error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { key } => Some(key),
            Self::Type { field, .. }
            | Self::EmptyValue { field, .. }
            | Self::Coercion { field, .. }
            | Self::Range { field, .. } => Some(field),
            Self::NotFound { .. } | Self::Parse { .. } | Self::Shape { .. } => None,
        }
    }

    /// Short machine-friendly kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Parse { .. } => "parse",
            Self::Shape { .. } => "shape",
            Self::MissingField { .. } => "missing_field",
            Self::Type { .. } => "type",
            Self::EmptyValue { .. } => "empty_value",
            Self::Coercion { .. } => "coercion",
            Self::Range { .. } => "range",
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Ошибка ввода-вывода ({operation}): {message}")]
    Io { operation: String, message: String },

    #[error("Ошибка вывода: {message}")]
    Output { message: String },
}

impl AppError {
    /// Create a new I/O error for the given operation
    pub fn io(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_CONFIG,
            Self::Io { .. } | Self::Output { .. } => EXIT_UNEXPECTED,
        }
    }

    /// Prefix of the stderr line for this error's category
    pub fn category_prefix(&self) -> &'static str {
        match self {
            Self::Config(_) => "Ошибка конфигурации: ",
            Self::Io { .. } | Self::Output { .. } => "Неожиданная ошибка: ",
        }
    }

    /// The single line printed to stderr before exiting.
    pub fn report_line(&self) -> String {
        format!("{}{}", self.category_prefix(), self)
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            Self::Config(e) => {
                debug!(
                    error = %e,
                    error.kind = e.kind(),
                    config.field = e.field(),
                    "Configuration rejected"
                );
            }
            _ => {
                warn!(error = %self, exit_code = self.exit_code(), "Unexpected failure");
            }
        }
    }
}

/// Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
