//! Configuration types for the time-record rules.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from YAML configuration files. Threshold values always
//! reach the rules as explicit parameters taken from these structures;
//! the engine reads no ambient global state.

use serde::Deserialize;

use crate::rules::{DEFAULT_MAX_SHIFT_HOURS, DEFAULT_MIN_SHIFT_MINUTES};

/// The two thresholds separating on-time, minor and major deviations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToleranceConfig {
    /// Deviations up to this many minutes are on time (VERDE).
    #[serde(default = "default_tolerance_minutes")]
    pub tolerance_minutes: i64,
    /// Deviations up to this many minutes are minor (AMARELO); anything
    /// past it is major (VERMELHO).
    #[serde(default = "default_severe_minutes")]
    pub severe_minutes: i64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            tolerance_minutes: default_tolerance_minutes(),
            severe_minutes: default_severe_minutes(),
        }
    }
}

/// Minimum and maximum accepted shift durations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DurationLimits {
    /// A closed shift shorter than this many minutes is rejected.
    #[serde(default = "default_min_shift_minutes")]
    pub min_shift_minutes: i64,
    /// A closed shift longer than this many hours is rejected.
    #[serde(default = "default_max_shift_hours")]
    pub max_shift_hours: i64,
}

impl Default for DurationLimits {
    fn default() -> Self {
        Self {
            min_shift_minutes: default_min_shift_minutes(),
            max_shift_hours: default_max_shift_hours(),
        }
    }
}

/// The complete rule settings applied when evaluating a record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct RulesSettings {
    /// Classification thresholds.
    #[serde(default)]
    pub tolerances: ToleranceConfig,
    /// Duration limits.
    #[serde(default)]
    pub duration: DurationLimits,
}

fn default_tolerance_minutes() -> i64 {
    10
}

fn default_severe_minutes() -> i64 {
    30
}

fn default_min_shift_minutes() -> i64 {
    DEFAULT_MIN_SHIFT_MINUTES
}

fn default_max_shift_hours() -> i64 {
    DEFAULT_MAX_SHIFT_HOURS
}
