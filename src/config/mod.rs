//! Configuration loading and management for the time-record rules engine.
//!
//! This module provides functionality to load rule settings from YAML
//! files: the classification tolerance thresholds and the shift duration
//! limits, system-wide with optional per-client overrides.
//!
//! # Example
//!
//! ```no_run
//! use ponto_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/embu").unwrap();
//! let settings = loader.settings_for_client(Some("mercado_central"));
//! println!("tolerance: {} min", settings.tolerances.tolerance_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DurationLimits, RulesSettings, ToleranceConfig};
