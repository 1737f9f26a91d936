//! Cross-layer edge checking against each layer's dependency whitelist.

use strata_core::types::{DependencyGraph, LayerRule, LayerViolation};

use super::classifier::LayerMatcher;

/// Check every graph edge against the layer rules.
///
/// An edge violates iff both endpoints classify to different layers and
/// the target layer is absent from the source layer's whitelist. Edges
/// with an unclassified endpoint produce nothing — unclassified files are
/// outside governance scope. A whitelist entry naming an undefined layer
/// is inert. Linear scan over edges × layers; layer counts are single
/// digits in practice, so nothing fancier is warranted.
pub fn check_violations(graph: &DependencyGraph, rules: &[LayerRule]) -> Vec<LayerViolation> {
    let matcher = LayerMatcher::new(rules);
    let mut violations = Vec::new();

    for node in graph.nodes() {
        let Some(source_layer) = matcher.classify(&node.file_path) else {
            continue;
        };
        for target in &node.imports {
            let Some(target_layer) = matcher.classify(target) else {
                continue;
            };
            if target_layer == source_layer || matcher.allows(source_layer, target_layer) {
                continue;
            }
            violations.push(LayerViolation {
                source_file: node.file_path.clone(),
                target_file: target.clone(),
                source_layer: source_layer.to_string(),
                target_layer: target_layer.to_string(),
            });
        }
    }

    violations
}
