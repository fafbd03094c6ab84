// src/config/model.rs

use std::fmt;

use crate::config::schema::{MAX_DEPTH, PACKAGE_NAME, REPO, TEST_MODE, VERSION};

/// Untyped configuration as parsed from the file.
pub type RawConfig = serde_json::Map<String, serde_json::Value>;

/// Normalized configuration with all five fields checked and coerced.
///
/// Only the validator can build one, so holding a `ValidatedConfig` means
/// every check has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    package_name: String,
    repo: String,
    test_mode: bool,
    version: String,
    max_depth: u64,
}

impl ValidatedConfig {
    pub(crate) fn new(
        package_name: String,
        repo: String,
        test_mode: bool,
        version: String,
        max_depth: u64,
    ) -> Self {
        Self {
            package_name,
            repo,
            test_mode,
            version,
            max_depth,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Repository URL or filesystem path, as written in the file (trimmed).
    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn max_depth(&self) -> u64 {
        self.max_depth
    }

    /// Entries in output order.
    pub fn entries(&self) -> [(&'static str, ConfigValue<'_>); 5] {
        [
            (PACKAGE_NAME.name, ConfigValue::Text(&self.package_name)),
            (REPO.name, ConfigValue::Text(&self.repo)),
            (TEST_MODE.name, ConfigValue::Flag(self.test_mode)),
            (VERSION.name, ConfigValue::Text(&self.version)),
            (MAX_DEPTH.name, ConfigValue::Integer(self.max_depth)),
        ]
    }
}

/// Borrowed view of a single validated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValue<'a> {
    Text(&'a str),
    Flag(bool),
    Integer(u64),
}

impl fmt::Display for ConfigValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(true) => f.write_str("True"),
            Self::Flag(false) => f.write_str("False"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}
