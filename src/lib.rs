// src/lib.rs

// --- Модули ---
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

// --- Зависимости и пере-экспорты ---
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

// Пере-экспорт ключевых типов для удобства использования
pub use cli::Cli;
pub use config::{RawConfig, ValidatedConfig};
pub use error::{AppError, ConfigError, Result};

/// Инициализирует tracing. Все записи идут в stderr, stdout остаётся для данных.
pub fn init_tracing(filter: &str, json: bool) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("error"));
    let fmt_layer = if json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    // Повторная инициализация (например, в тестах) не является ошибкой.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

/// Загружает и валидирует конфигурацию: этап загрузчика, затем этап валидатора.
pub fn run(config_path: &Path) -> Result<ValidatedConfig> {
    let config_path_display = config_path.display().to_string();
    info!(config.path = %config_path_display, "Starting configuration stage");

    let validated = config::load_config(config_path).map_err(|e| {
        e.log();
        e
    })?;

    info!(
        config.path = %config_path_display,
        config.package_name = validated.package_name(),
        config.max_depth = validated.max_depth(),
        "Configuration loaded and validated successfully."
    );
    Ok(validated)
}

/// Полный цикл CLI без завершения процесса: возвращает код выхода.
///
/// Нормализованная конфигурация пишется в `out`, строка ошибки — в `err`.
pub fn execute<O, E>(config_path: &Path, out: &mut O, err: &mut E) -> u8
where
    O: std::io::Write,
    E: std::io::Write,
{
    let result = run(config_path).and_then(|cfg| {
        output::print_kv(&cfg, out).map_err(|e| {
            e.log();
            e
        })
    });
    match result {
        Ok(()) => error::EXIT_OK,
        Err(e) => {
            if let Err(write_err) = writeln!(err, "{}", e.report_line()) {
                error!(error = %write_err, "Failed to write error report");
            }
            e.exit_code()
        }
    }
}
