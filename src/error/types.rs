//! Error type conversions

use super::ConfigError;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = if err.line() > 0 {
            (Some(err.line()), Some(err.column()))
        } else {
            (None, None)
        };
        Self::Parse {
            message: err.to_string(),
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_syntax_error_keeps_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": ,\n}").unwrap_err();
        match ConfigError::from(err) {
            ConfigError::Parse { line, message, .. } => {
                assert_eq!(line, Some(2));
                assert!(message.contains("line 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn eof_error_keeps_position() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        match ConfigError::from(err) {
            ConfigError::Parse { line, column, .. } => {
                assert_eq!(line, Some(1));
                assert!(column.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
