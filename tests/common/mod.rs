//! Common test utilities and fixtures

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A valid configuration object with every required field.
pub fn valid_config() -> Value {
    json!({
        "package_name": "serde",
        "repo": "https://github.com/serde-rs/serde",
        "test_mode": false,
        "version": "1.0.200",
        "max_depth": 3
    })
}

/// Valid configuration with one field replaced.
pub fn config_with(key: &str, value: Value) -> Value {
    let mut cfg = valid_config();
    cfg[key] = value;
    cfg
}

/// Valid configuration with one field removed.
pub fn config_without(key: &str) -> Value {
    let mut cfg = valid_config();
    if let Some(map) = cfg.as_object_mut() {
        map.remove(key);
    }
    cfg
}

/// Temporary directory holding configuration files for one test.
pub struct TestConfigDir {
    dir: TempDir,
}

impl TestConfigDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write raw text to `name` inside the directory.
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Serialize `value` as JSON into `name` inside the directory.
    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write_raw(name, &value.to_string())
    }
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}
