//! Shift timestamp resolution.
//!
//! This module combines a reference date with entry/exit times of day to
//! build the absolute timestamps of a shift, advancing the exit by one
//! calendar day when the shift runs across midnight.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The absolute timestamps of a resolved shift.
///
/// Times are local wall-clock values; the surrounding system attaches the
/// operation's UTC offset when persisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedShift {
    /// When the shift starts.
    pub entry: NaiveDateTime,
    /// When the shift ends, or `None` for an open shift.
    pub exit: Option<NaiveDateTime>,
}

/// Resolves a shift's absolute timestamps from a reference date and
/// entry/exit times of day.
///
/// The entry timestamp is the reference date combined with `entry_time`.
/// When `exit_time` is given and the resulting exit would fall strictly
/// before the entry, the exit date is advanced by exactly one calendar day
/// (a shift crossing midnight). There is no multi-day rollover: a shift
/// longer than 24 hours is not representable here and is caught by the
/// duration validator instead.
///
/// # Examples
///
/// ```
/// use ponto_engine::rules::resolve_shift;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let entry = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let exit = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
///
/// let resolved = resolve_shift(date, entry, Some(exit));
/// // Exit rolled over to the next day
/// assert_eq!(resolved.exit.unwrap().date(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
/// ```
pub fn resolve_shift(
    reference_date: NaiveDate,
    entry_time: NaiveTime,
    exit_time: Option<NaiveTime>,
) -> ResolvedShift {
    let entry = reference_date.and_time(entry_time);

    let exit = exit_time.map(|time| {
        let same_day = reference_date.and_time(time);
        if same_day < entry {
            same_day + Duration::days(1)
        } else {
            same_day
        }
    });

    ResolvedShift { entry, exit }
}

/// Parses a `YYYY-MM-DD` reference date from the wire format.
pub fn parse_reference_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses an `HH:mm` clock time from the wire format.
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::InvalidTime {
        value: value.to_string(),
    })
}

/// Resolves a shift from the wire-format strings the surrounding system
/// exchanges: a `YYYY-MM-DD` reference date and `HH:mm` times.
///
/// # Examples
///
/// ```
/// use ponto_engine::rules::resolve_shift_str;
///
/// let resolved = resolve_shift_str("2024-03-10", "08:00", Some("17:30")).unwrap();
/// assert_eq!(resolved.entry.to_string(), "2024-03-10 08:00:00");
/// assert_eq!(resolved.exit.unwrap().to_string(), "2024-03-10 17:30:00");
/// ```
pub fn resolve_shift_str(
    reference_date: &str,
    entry_time: &str,
    exit_time: Option<&str>,
) -> EngineResult<ResolvedShift> {
    let date = parse_reference_date(reference_date)?;
    let entry = parse_clock_time(entry_time)?;
    let exit = exit_time.map(parse_clock_time).transpose()?;
    Ok(resolve_shift(date, entry, exit))
}
