//! Layer rule configuration loaded from a YAML file.

use std::path::Path;

use globset::GlobBuilder;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ConfigError;
use crate::types::collections::FxHashSet;
use crate::types::LayerRule;

/// Ordered layer rules for classification and violation checking.
///
/// Declaration order is load-bearing: classification is first-match-wins,
/// so the rules stay in a `Vec` exactly as they appear in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerConfig {
    #[serde(default)]
    pub layers: Vec<LayerRule>,
}

impl LayerConfig {
    /// Load and validate layer rules from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&raw, &path.display().to_string())
    }

    /// Load and validate layer rules from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, "<string>")
    }

    fn parse(yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate rule names and glob patterns.
    ///
    /// Duplicate layer names and malformed globs are hard errors. An
    /// `allowed_dependencies` entry naming an undefined layer is only a
    /// warning: the engine treats such entries as inert, so the rule set
    /// still loads (permissive misconfiguration handling).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names: FxHashSet<&str> = FxHashSet::default();
        for rule in &self.layers {
            if !names.insert(rule.name.as_str()) {
                return Err(ConfigError::DuplicateLayer(rule.name.clone()));
            }
            for pattern in &rule.patterns {
                GlobBuilder::new(pattern)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| ConfigError::InvalidPattern {
                        layer: rule.name.clone(),
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })?;
            }
        }

        for rule in &self.layers {
            for dep in &rule.allowed_dependencies {
                if !names.contains(dep.as_str()) {
                    warn!(
                        layer = %rule.name,
                        dependency = %dep,
                        "allowed_dependencies names an undefined layer; entry is inert"
                    );
                }
            }
        }
        Ok(())
    }
}
