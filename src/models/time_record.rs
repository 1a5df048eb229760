//! Time record model and related types.
//!
//! This module defines the TimeRecord and Punch structs for representing
//! a collaborator's daily clock-in/clock-out record.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A geographic coordinate captured at punch time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A single clock event: the timestamp plus whatever the courier's device
/// captured alongside it.
///
/// The timestamp, geolocation and odometer reading of one punch travel
/// together; a record either has a complete punch on a side or none at
/// all, never a partial one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Punch {
    /// The absolute moment of the punch (ISO-8601 with offset on the wire).
    pub timestamp: DateTime<FixedOffset>,
    /// Where the punch happened, if the device reported a fix.
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// The motorcycle odometer reading in kilometers, if captured.
    #[serde(default)]
    pub odometer: Option<Decimal>,
}

/// One collaborator's time record for a reference date.
///
/// At most one open record exists per collaborator per day; that
/// uniqueness is enforced by the surrounding system. The status fields are
/// derived by [`crate::rules::evaluate_record`] and are never set
/// independently of the punches they describe.
///
/// # Examples
///
/// ```
/// use ponto_engine::models::{Punch, TimeRecord};
/// use chrono::{DateTime, NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let entry: DateTime<chrono::FixedOffset> =
///     "2024-03-10T08:02:00-03:00".parse().unwrap();
/// let record = TimeRecord {
///     id: Uuid::new_v4(),
///     collaborator_id: Uuid::new_v4(),
///     reference_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     entry: Some(Punch { timestamp: entry, location: None, odometer: None }),
///     exit: None,
///     entry_status: None,
///     exit_status: None,
///     note: None,
///     created_by: Uuid::new_v4(),
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// assert!(record.is_open());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The collaborator this record belongs to.
    pub collaborator_id: Uuid,
    /// The reference date of the shift (the day the entry belongs to).
    pub reference_date: NaiveDate,
    /// The entry punch, if the collaborator has clocked in.
    #[serde(default)]
    pub entry: Option<Punch>,
    /// The exit punch, if the collaborator has clocked out.
    #[serde(default)]
    pub exit: Option<Punch>,
    /// Derived status of the entry punch.
    #[serde(default)]
    pub entry_status: Option<super::StatusCode>,
    /// Derived status of the exit punch.
    #[serde(default)]
    pub exit_status: Option<super::StatusCode>,
    /// Optional free-text note left by a supervisor.
    #[serde(default)]
    pub note: Option<String>,
    /// Who created the record.
    pub created_by: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl TimeRecord {
    /// Returns true while the shift is in progress: an entry punch exists
    /// but no exit punch does.
    pub fn is_open(&self) -> bool {
        self.entry.is_some() && self.exit.is_none()
    }

    /// Returns the elapsed minutes between the entry and exit punches,
    /// or `None` while either punch is missing.
    pub fn punched_minutes(&self) -> Option<i64> {
        let entry = self.entry.as_ref()?;
        let exit = self.exit.as_ref()?;
        Some((exit.timestamp - entry.timestamp).num_minutes())
    }
}
