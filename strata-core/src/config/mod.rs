//! Configuration for the drift engine.
//! YAML-based layer rules; loaded once per run by the host.

pub mod layer_config;

pub use layer_config::LayerConfig;
