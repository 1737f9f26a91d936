//! Core types, errors, configuration, and traits for the Strata
//! architecture drift engine.

pub mod config;
pub mod errors;
pub mod traits;
pub mod types;
