// tests/main_tests.rs

mod common;

use common::{config_with, config_without, valid_config, TestConfigDir};
use depgraph_config::{execute, run};
use serde_json::json;

fn execute_to_strings(path: &std::path::Path) -> (u8, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = execute(path, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_run_with_valid_config() {
    let dir = TestConfigDir::new();
    let path = dir.write_json("config.json", &valid_config());

    let result = run(&path);
    assert!(result.is_ok(), "Run should succeed with valid config");
}

#[test]
fn test_run_with_invalid_config() {
    let dir = TestConfigDir::new();
    let path = dir.write_json("config.json", &config_with("max_depth", json!("deep")));

    let result = run(&path);
    assert!(result.is_err(), "Run should fail with invalid config");
}

#[test]
fn test_execute_prints_normalized_config() {
    let dir = TestConfigDir::new();
    let path = dir.write_json(
        "config.json",
        &json!({
            "package_name": "  tokio ",
            "repo": "/srv/repos/tokio",
            "test_mode": 0,
            "version": "1.38",
            "max_depth": 2.0
        }),
    );

    let (code, out, err) = execute_to_strings(&path);
    assert_eq!(code, 0);
    assert_eq!(
        out,
        "package_name=tokio\nrepo=/srv/repos/tokio\ntest_mode=False\nversion=1.38\nmax_depth=2\n"
    );
    assert!(err.is_empty());
}

#[test]
fn test_execute_reports_config_error() {
    let dir = TestConfigDir::new();
    let path = dir.write_json("config.json", &config_without("repo"));

    let (code, out, err) = execute_to_strings(&path);
    assert_eq!(code, 2);
    assert!(out.is_empty(), "nothing is printed on failure");
    assert_eq!(
        err,
        "Ошибка конфигурации: Отсутствует обязательный параметр: 'repo'\n"
    );
}

#[test]
fn test_execute_reports_unexpected_error() {
    let dir = TestConfigDir::new();

    let (code, out, err) = execute_to_strings(&dir.path());
    assert_eq!(code, 3);
    assert!(out.is_empty());
    assert!(err.starts_with("Неожиданная ошибка: "), "got {err:?}");
    assert_eq!(err.lines().count(), 1);
}

#[test]
fn test_execute_is_idempotent() {
    let dir = TestConfigDir::new();
    let path = dir.write_json("config.json", &config_with("test_mode", json!(" No ")));

    let first = execute_to_strings(&path);
    let second = execute_to_strings(&path);
    assert_eq!(first, second);
    assert!(first.1.contains("test_mode=False\n"));
}
