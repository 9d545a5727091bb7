//! Error types for Mirrorstep

use thiserror::Error;

/// The main error type for Mirrorstep operations
#[derive(Debug, Error)]
pub enum MirrorstepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Level error: {0}")]
    Level(String),
}

/// Result type alias for Mirrorstep operations
pub type Result<T> = std::result::Result<T, MirrorstepError>;

impl From<toml::de::Error> for MirrorstepError {
    fn from(err: toml::de::Error) -> Self {
        MirrorstepError::TomlParse(err.to_string())
    }
}

impl From<toml::ser::Error> for MirrorstepError {
    fn from(err: toml::ser::Error) -> Self {
        MirrorstepError::TomlSer(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = MirrorstepError::ValueOutOfRange {
            field: "move_speed".into(),
            min: 0.0,
            max: f64::MAX,
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("move_speed"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("not = = toml");
        let err: MirrorstepError = parsed.unwrap_err().into();
        assert!(matches!(err, MirrorstepError::TomlParse(_)));
    }
}
