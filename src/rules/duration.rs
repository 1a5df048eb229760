//! Shift duration validation.
//!
//! This module enforces the minimum and maximum shift durations. The two
//! checks are independent pure functions; violations are structured
//! results the caller can block on or merely surface as warnings, never
//! errors.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::DurationLimits;

/// Minimum shift duration in minutes when none is configured.
pub const DEFAULT_MIN_SHIFT_MINUTES: i64 = 1;

/// Maximum shift duration in hours when none is configured.
pub const DEFAULT_MAX_SHIFT_HOURS: i64 = 16;

/// A duration rule the shift failed, with the measured and limit values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DurationViolation {
    /// The closed shift is shorter than the minimum duration.
    ShiftTooShort {
        /// Elapsed minutes between entry and exit.
        actual_minutes: i64,
        /// The configured minimum in minutes.
        min_minutes: i64,
    },
    /// The closed shift is longer than the maximum duration.
    ShiftTooLong {
        /// Elapsed minutes between entry and exit.
        actual_minutes: i64,
        /// The configured maximum in hours.
        max_hours: i64,
    },
}

impl std::fmt::Display for DurationViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationViolation::ShiftTooShort {
                actual_minutes,
                min_minutes,
            } => write!(
                f,
                "Turno com duração de {actual_minutes} min é inferior ao mínimo de {min_minutes} min"
            ),
            DurationViolation::ShiftTooLong {
                actual_minutes,
                max_hours,
            } => write!(
                f,
                "Turno com duração de {actual_minutes} min excede o máximo de {max_hours} horas"
            ),
        }
    }
}

/// The aggregated outcome of running every duration check over a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DurationReport {
    /// Every rule the shift failed, in check order.
    pub violations: Vec<DurationViolation>,
}

impl DurationReport {
    /// Returns true when no duration rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the user-facing message of each violation.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }
}

/// Checks the minimum shift duration.
///
/// Returns a [`DurationViolation::ShiftTooShort`] when `end` is present
/// and the elapsed time is under `min_minutes`. An open shift (`end` is
/// `None`) always passes; it is not validated on duration until it
/// closes.
///
/// # Examples
///
/// ```
/// use ponto_engine::rules::validate_min_duration;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// assert!(validate_min_duration(start, Some(start), 1).is_some());
/// assert!(validate_min_duration(start, None, 1).is_none());
/// ```
pub fn validate_min_duration(
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    min_minutes: i64,
) -> Option<DurationViolation> {
    let end = end?;
    let actual_minutes = (end - start).num_minutes();
    if actual_minutes < min_minutes {
        Some(DurationViolation::ShiftTooShort {
            actual_minutes,
            min_minutes,
        })
    } else {
        None
    }
}

/// Checks the maximum shift duration.
///
/// Returns a [`DurationViolation::ShiftTooLong`] when `end` is present and
/// the elapsed time strictly exceeds `max_hours`; a shift of exactly
/// `max_hours` passes. The comparison is done in minutes so that a shift
/// of 16h59m cannot truncate down to the 16-hour limit.
///
/// # Examples
///
/// ```
/// use ponto_engine::rules::validate_max_duration;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let start = day.and_hms_opt(6, 0, 0).unwrap();
/// // Exactly 16 hours is allowed
/// assert!(validate_max_duration(start, Some(day.and_hms_opt(22, 0, 0).unwrap()), 16).is_none());
/// // 17 hours is not
/// assert!(validate_max_duration(start, Some(day.and_hms_opt(23, 0, 0).unwrap()), 16).is_some());
/// ```
pub fn validate_max_duration(
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    max_hours: i64,
) -> Option<DurationViolation> {
    let end = end?;
    let actual_minutes = (end - start).num_minutes();
    if actual_minutes > max_hours * 60 {
        Some(DurationViolation::ShiftTooLong {
            actual_minutes,
            max_hours,
        })
    } else {
        None
    }
}

/// Runs every duration check and aggregates all violations.
///
/// The checks do not short-circuit: a caller showing validation feedback
/// gets every applicable message at once.
pub fn check_duration(
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    limits: &DurationLimits,
) -> DurationReport {
    let violations = [
        validate_min_duration(start, end, limits.min_shift_minutes),
        validate_max_duration(start, end, limits.max_shift_hours),
    ]
    .into_iter()
    .flatten()
    .collect();

    DurationReport { violations }
}
