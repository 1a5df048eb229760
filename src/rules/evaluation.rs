//! Record evaluation orchestration.
//!
//! This module is the single entry point the surrounding system calls to
//! derive a record's statuses: it classifies the entry and exit punches
//! against the chosen scheduled shift and runs every duration check,
//! returning the aggregated outcome. Statuses are derived here and nowhere
//! else; callers recompute whenever a timestamp or schedule changes.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::RulesSettings;
use crate::models::{ScheduledShift, StatusCode, TimeRecord};

use super::classifier::{StatusAssessment, assess_entry, assess_exit};
use super::duration::{DurationReport, check_duration};

/// The full derived outcome for one time record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordEvaluation {
    /// Assessment of the entry punch, when one exists.
    pub entry: Option<StatusAssessment>,
    /// Assessment of the exit punch. Always present: an open shift is
    /// assessed as [`StatusCode::EmAndamento`].
    pub exit: StatusAssessment,
    /// Outcome of the duration checks over the punch pair.
    pub duration: DurationReport,
}

impl RecordEvaluation {
    /// The derived status of the entry punch, if one was assessed.
    pub fn entry_status(&self) -> Option<StatusCode> {
        self.entry.as_ref().map(|a| a.status)
    }

    /// The derived status of the exit punch.
    pub fn exit_status(&self) -> StatusCode {
        self.exit.status
    }
}

/// Evaluates a time record against its base scheduled shift.
///
/// `base_shift` is the shift already selected as the comparison basis for
/// this record; when the collaborator has no resolvable schedule, pass
/// `None` and both punches classify as [`StatusCode::Cinza`] (entry) /
/// [`StatusCode::Cinza`] or [`StatusCode::EmAndamento`] (exit).
///
/// Classification reads each punch in its own local wall-clock frame;
/// duration is measured over the true elapsed time between the punches,
/// so records whose punches carry different UTC offsets are still
/// measured correctly.
///
/// # Examples
///
/// ```no_run
/// use ponto_engine::config::ConfigLoader;
/// use ponto_engine::rules::evaluate_record;
/// # fn get_record() -> ponto_engine::models::TimeRecord { unimplemented!() }
/// # fn get_shift() -> ponto_engine::models::ScheduledShift { unimplemented!() }
///
/// let loader = ConfigLoader::load("./config/embu").unwrap();
/// let record = get_record();
/// let shift = get_shift();
///
/// let evaluation = evaluate_record(&record, Some(&shift), loader.settings_for_client(None));
/// println!("entry: {:?}, exit: {}", evaluation.entry_status(), evaluation.exit_status());
/// ```
pub fn evaluate_record(
    record: &TimeRecord,
    base_shift: Option<&ScheduledShift>,
    settings: &RulesSettings,
) -> RecordEvaluation {
    let entry_local: Option<NaiveDateTime> =
        record.entry.as_ref().map(|p| p.timestamp.naive_local());
    let exit_local: Option<NaiveDateTime> =
        record.exit.as_ref().map(|p| p.timestamp.naive_local());

    let entry = entry_local.map(|actual| {
        let assessment = assess_entry(actual, base_shift.map(|s| s.starts_at), &settings.tolerances);
        debug!(
            record_id = %record.id,
            status = %assessment.status,
            deviation = ?assessment.deviation_minutes,
            "classified entry punch"
        );
        assessment
    });

    let exit = assess_exit(
        exit_local,
        base_shift.map(|s| s.ends_at),
        &settings.tolerances,
    );
    debug!(
        record_id = %record.id,
        status = %exit.status,
        deviation = ?exit.deviation_minutes,
        "classified exit punch"
    );

    // Duration is measured on the real elapsed time: normalize the exit
    // into the entry's offset before comparing wall-clock values.
    let exit_for_duration = match (record.entry.as_ref(), record.exit.as_ref()) {
        (Some(entry_punch), Some(exit_punch)) => Some(
            exit_punch
                .timestamp
                .with_timezone(entry_punch.timestamp.offset())
                .naive_local(),
        ),
        _ => None,
    };

    let duration = entry_local
        .map(|start| check_duration(start, exit_for_duration, &settings.duration))
        .unwrap_or_default();

    for violation in &duration.violations {
        warn!(record_id = %record.id, %violation, "shift duration violation");
    }

    RecordEvaluation {
        entry,
        exit,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DurationLimits, ToleranceConfig};
    use crate::models::{Punch, StatusCode};
    use chrono::{NaiveDate, NaiveTime, Utc};
    use uuid::Uuid;

    fn punch(ts: &str) -> Punch {
        Punch {
            timestamp: ts.parse().unwrap(),
            location: None,
            odometer: None,
        }
    }

    fn make_record(entry: Option<Punch>, exit: Option<Punch>) -> TimeRecord {
        TimeRecord {
            id: Uuid::new_v4(),
            collaborator_id: Uuid::new_v4(),
            reference_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            entry,
            exit,
            entry_status: None,
            exit_status: None,
            note: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_shift(start: (u32, u32), end: (u32, u32)) -> ScheduledShift {
        ScheduledShift {
            id: Uuid::new_v4(),
            collaborator_id: Uuid::new_v4(),
            client_id: None,
            starts_at: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            ends_at: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            label: None,
        }
    }

    fn settings() -> RulesSettings {
        RulesSettings {
            tolerances: ToleranceConfig {
                tolerance_minutes: 10,
                severe_minutes: 30,
            },
            duration: DurationLimits {
                min_shift_minutes: 1,
                max_shift_hours: 16,
            },
        }
    }

    #[test]
    fn test_closed_record_derives_both_statuses() {
        let record = make_record(
            Some(punch("2024-03-10T08:05:00-03:00")),
            Some(punch("2024-03-10T17:02:00-03:00")),
        );
        let shift = make_shift((8, 0), (17, 0));

        let evaluation = evaluate_record(&record, Some(&shift), &settings());

        assert_eq!(evaluation.entry_status(), Some(StatusCode::Verde));
        assert_eq!(evaluation.exit_status(), StatusCode::Verde);
        assert!(evaluation.duration.is_valid());
    }

    #[test]
    fn test_open_record_exit_is_em_andamento() {
        let record = make_record(Some(punch("2024-03-10T08:05:00-03:00")), None);
        let shift = make_shift((8, 0), (17, 0));

        let evaluation = evaluate_record(&record, Some(&shift), &settings());

        assert_eq!(evaluation.exit_status(), StatusCode::EmAndamento);
        assert!(evaluation.duration.is_valid());
    }

    #[test]
    fn test_no_schedule_yields_cinza() {
        let record = make_record(
            Some(punch("2024-03-10T08:05:00-03:00")),
            Some(punch("2024-03-10T17:02:00-03:00")),
        );

        let evaluation = evaluate_record(&record, None, &settings());

        assert_eq!(evaluation.entry_status(), Some(StatusCode::Cinza));
        assert_eq!(evaluation.exit_status(), StatusCode::Cinza);
    }

    #[test]
    fn test_late_entry_and_overtime_exit() {
        let record = make_record(
            Some(punch("2024-03-10T09:00:00-03:00")),
            Some(punch("2024-03-10T17:20:00-03:00")),
        );
        let shift = make_shift((8, 0), (17, 0));

        let evaluation = evaluate_record(&record, Some(&shift), &settings());

        assert_eq!(evaluation.entry_status(), Some(StatusCode::Vermelho));
        assert_eq!(evaluation.exit_status(), StatusCode::Amarelo);
    }

    #[test]
    fn test_zero_length_record_reports_too_short() {
        let record = make_record(
            Some(punch("2024-03-10T08:00:00-03:00")),
            Some(punch("2024-03-10T08:00:00-03:00")),
        );
        let shift = make_shift((8, 0), (17, 0));

        let evaluation = evaluate_record(&record, Some(&shift), &settings());

        assert!(!evaluation.duration.is_valid());
        assert_eq!(evaluation.duration.violations.len(), 1);
    }

    #[test]
    fn test_duration_uses_true_elapsed_across_offsets() {
        // 08:00-03:00 to 20:01Z is 9h1m of real elapsed time, not 12h1m
        let record = make_record(
            Some(punch("2024-03-10T08:00:00-03:00")),
            Some(punch("2024-03-10T20:01:00+00:00")),
        );
        let shift = make_shift((8, 0), (17, 0));

        let evaluation = evaluate_record(&record, Some(&shift), &settings());

        assert!(evaluation.duration.is_valid());
    }

    #[test]
    fn test_record_without_entry_has_no_entry_assessment() {
        let record = make_record(None, None);
        let shift = make_shift((8, 0), (17, 0));

        let evaluation = evaluate_record(&record, Some(&shift), &settings());

        assert_eq!(evaluation.entry, None);
        assert_eq!(evaluation.exit_status(), StatusCode::EmAndamento);
        assert!(evaluation.duration.is_valid());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let record = make_record(
            Some(punch("2024-03-10T08:25:00-03:00")),
            Some(punch("2024-03-10T18:00:00-03:00")),
        );
        let shift = make_shift((8, 0), (17, 0));

        let first = evaluate_record(&record, Some(&shift), &settings());
        let second = evaluate_record(&record, Some(&shift), &settings());
        assert_eq!(first, second);
    }
}
