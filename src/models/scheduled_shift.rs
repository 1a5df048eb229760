//! Scheduled shift model.
//!
//! A scheduled shift defines the expected start and end time-of-day for a
//! collaborator, optionally tied to a specific client assignment.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A collaborator's scheduled shift: expected start/end times with no date.
///
/// A collaborator may have several shifts (one per client assignment). The
/// rules engine receives the shift already chosen as the base for
/// comparison; picking the nearest-matching shift is the caller's job.
///
/// # Examples
///
/// ```
/// use ponto_engine::models::ScheduledShift;
/// use chrono::NaiveTime;
/// use uuid::Uuid;
///
/// let shift = ScheduledShift {
///     id: Uuid::new_v4(),
///     collaborator_id: Uuid::new_v4(),
///     client_id: Some("mercado_central".to_string()),
///     starts_at: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     ends_at: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     label: Some("noturno".to_string()),
/// };
/// assert!(shift.crosses_midnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledShift {
    /// Unique identifier for the shift.
    pub id: Uuid,
    /// The collaborator this shift belongs to.
    pub collaborator_id: Uuid,
    /// The client assignment this shift covers, if any.
    #[serde(default)]
    pub client_id: Option<String>,
    /// Expected clock-in time of day.
    pub starts_at: NaiveTime,
    /// Expected clock-out time of day.
    pub ends_at: NaiveTime,
    /// Optional human-readable label (e.g. "noturno").
    #[serde(default)]
    pub label: Option<String>,
}

impl ScheduledShift {
    /// Returns true when the expected end time-of-day falls before the
    /// expected start, meaning the shift runs across midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.ends_at < self.starts_at
    }
}
