// src/config/schema.rs

//! The fixed set of fields every configuration file must carry.
//!
//! Order matters: presence is checked in this order first, and then each
//! field is validated in the same order, so the first failing entry decides
//! which error the user sees.

/// Target type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty string, stored trimmed.
    Text,
    /// Boolean, coerced from booleans, numbers and textual tokens.
    Flag,
    /// Integer with a lower bound, coerced from integral numbers and digit strings.
    Integer { min: i64 },
}

/// One expected field of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Completes the sentence "`<name>` должен быть ..." in error messages.
    pub expectation: &'static str,
}

pub const PACKAGE_NAME: FieldSpec = FieldSpec {
    name: "package_name",
    kind: FieldKind::Text,
    expectation: "непустой строкой",
};

pub const REPO: FieldSpec = FieldSpec {
    name: "repo",
    kind: FieldKind::Text,
    expectation: "непустой строкой (URL или путь к тестовому репозиторию)",
};

pub const TEST_MODE: FieldSpec = FieldSpec {
    name: "test_mode",
    kind: FieldKind::Flag,
    expectation: "булевым значением",
};

pub const VERSION: FieldSpec = FieldSpec {
    name: "version",
    kind: FieldKind::Text,
    expectation: "непустой строкой",
};

pub const MAX_DEPTH: FieldSpec = FieldSpec {
    name: "max_depth",
    kind: FieldKind::Integer { min: 1 },
    expectation: "целым числом >= 1",
};

/// All expected fields, in check and output order.
pub const EXPECTED_FIELDS: [FieldSpec; 5] = [PACKAGE_NAME, REPO, TEST_MODE, VERSION, MAX_DEPTH];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_is_fixed() {
        let names: Vec<_> = EXPECTED_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["package_name", "repo", "test_mode", "version", "max_depth"]
        );
    }

    #[test]
    fn max_depth_is_bounded_at_one() {
        assert_eq!(MAX_DEPTH.kind, FieldKind::Integer { min: 1 });
    }
}
