//! Error handling for Strata.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The engine itself is infallible by design: incomplete or noisy input
//! produces a best-effort result, never an abort. Configuration loading is
//! the only fallible subsystem.

pub mod config_error;

pub use config_error::ConfigError;
