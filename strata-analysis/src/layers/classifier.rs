//! Glob-based file-to-layer classification, first-match-wins.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use strata_core::types::collections::FxHashSet;
use strata_core::types::LayerRule;
use tracing::warn;

/// Compiled layer rules for repeated classification.
///
/// Rules stay in declaration order; a file matching globs from several
/// layers resolves to the first declared one. Build once per run, then
/// classify per file path.
pub struct LayerMatcher {
    layers: Vec<CompiledLayer>,
}

struct CompiledLayer {
    name: String,
    allowed: FxHashSet<String>,
    globs: GlobSet,
}

impl LayerMatcher {
    /// Compile the rule set. A malformed glob is skipped with a warning
    /// rather than failing the run; config loading already validates
    /// patterns, so this path only fires for rules bypassing the loader.
    pub fn new(rules: &[LayerRule]) -> Self {
        let layers = rules
            .iter()
            .map(|rule| CompiledLayer {
                name: rule.name.clone(),
                allowed: rule.allowed_dependencies.iter().cloned().collect(),
                globs: compile_globs(&rule.name, &rule.patterns),
            })
            .collect();
        Self { layers }
    }

    /// Layer name for a file, or `None` when no pattern matches.
    pub fn classify(&self, file_path: &str) -> Option<&str> {
        self.layers
            .iter()
            .find(|layer| layer.globs.is_match(file_path))
            .map(|layer| layer.name.as_str())
    }

    /// Whether `source_layer` may depend on `target_layer`.
    pub fn allows(&self, source_layer: &str, target_layer: &str) -> bool {
        self.layers
            .iter()
            .find(|layer| layer.name == source_layer)
            .is_some_and(|layer| layer.allowed.contains(target_layer))
    }
}

/// One-shot classification against an ordered rule list.
///
/// Compiles the globs on every call; use [`LayerMatcher`] when classifying
/// many paths against the same rules.
pub fn classify(file_path: &str, rules: &[LayerRule]) -> Option<String> {
    LayerMatcher::new(rules)
        .classify(file_path)
        .map(String::from)
}

fn compile_globs(layer: &str, patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match GlobBuilder::new(pattern).literal_separator(true).build() {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => {
                warn!(layer, pattern = %pattern, error = %e, "skipping malformed glob");
            }
        }
    }
    builder.build().unwrap_or_else(|e| {
        warn!(layer, error = %e, "glob set failed to compile; layer matches nothing");
        GlobSet::empty()
    })
}
