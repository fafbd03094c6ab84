// src/config/mod.rs

pub mod loader;
pub mod model;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_raw, parse_raw};
pub use model::{ConfigValue, RawConfig, ValidatedConfig};
pub use schema::{FieldKind, FieldSpec, EXPECTED_FIELDS};
pub use validation::{coerce_bool, coerce_integer, ConfigValidator};
