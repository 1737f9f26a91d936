//! Architectural layer rules and cross-layer violations.

use serde::{Deserialize, Serialize};

/// A named architectural layer with glob patterns and a dependency whitelist.
///
/// Rules are always held in an ordered `Vec`, never a map: a file matching
/// patterns from several layers resolves to the first layer in declaration
/// order (first-match-wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRule {
    /// Unique layer name.
    pub name: String,
    /// Glob patterns (`**`, `*`, literal segments) selecting files into
    /// this layer.
    pub patterns: Vec<String>,
    /// Names of layers this layer may depend on. An entry naming a layer
    /// that is not defined is inert (permissive).
    #[serde(default)]
    pub allowed_dependencies: Vec<String>,
}

impl LayerRule {
    /// Create a rule with no allowed dependencies.
    pub fn new(name: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            patterns,
            allowed_dependencies: Vec::new(),
        }
    }
}

/// A graph edge that crosses layers against the source layer's whitelist.
///
/// Exists iff both endpoints classify to (different) layers and the target
/// layer is absent from the source layer's `allowed_dependencies`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerViolation {
    pub source_file: String,
    pub target_file: String,
    pub source_layer: String,
    pub target_layer: String,
}
