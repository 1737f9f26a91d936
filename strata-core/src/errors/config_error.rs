//! Configuration errors.

/// Errors that can occur while loading layer-rule configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Invalid YAML in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid glob pattern '{pattern}' in layer '{layer}': {message}")]
    InvalidPattern {
        layer: String,
        pattern: String,
        message: String,
    },

    #[error("Duplicate layer name '{0}'")]
    DuplicateLayer(String),
}
