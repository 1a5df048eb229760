//! Punch status classification.
//!
//! This module maps the measured deviation between an actual punch and the
//! scheduled boundary into a status code. Classification is a total
//! function: every input combination maps to exactly one status, including
//! [`StatusCode::Cinza`] when no scheduled boundary is resolvable and
//! [`StatusCode::EmAndamento`] for an exit that has not happened yet.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::ToleranceConfig;
use crate::models::StatusCode;

/// Which punch of the record an assessment refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchEvent {
    /// The clock-in punch.
    Entry,
    /// The clock-out punch.
    Exit,
}

impl std::fmt::Display for PunchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PunchEvent::Entry => write!(f, "entry"),
            PunchEvent::Exit => write!(f, "exit"),
        }
    }
}

/// A classification together with the evidence behind it.
///
/// Carries the measured deviation and the boundary the punch was compared
/// against, so callers can show or log how a status was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusAssessment {
    /// The punch this assessment refers to.
    pub event: PunchEvent,
    /// The derived status code.
    pub status: StatusCode,
    /// Signed deviation from the boundary in minutes. `None` when there
    /// was no boundary or no punch to measure.
    pub deviation_minutes: Option<i64>,
    /// The resolved scheduled boundary. `None` when no schedule applies.
    pub boundary: Option<NaiveDateTime>,
    /// One line describing how the status was reached.
    pub reasoning: String,
}

/// Signed minutes between the actual punch and the scheduled boundary
/// placed on the actual punch's calendar day.
fn deviation_minutes(actual: NaiveDateTime, scheduled: NaiveTime) -> (NaiveDateTime, i64) {
    let boundary = actual.date().and_time(scheduled);
    (boundary, (actual - boundary).num_minutes())
}

/// Three-way split of a deviation against the tolerance window.
fn classify_deviation(diff: i64, tolerances: &ToleranceConfig) -> StatusCode {
    if diff <= tolerances.tolerance_minutes {
        StatusCode::Verde
    } else if diff <= tolerances.severe_minutes {
        StatusCode::Amarelo
    } else {
        StatusCode::Vermelho
    }
}

/// Classifies an entry punch against the scheduled start of shift.
///
/// Within tolerance (or early) is [`StatusCode::Verde`], past tolerance
/// but within the severe threshold is [`StatusCode::Amarelo`], and past
/// the severe threshold is [`StatusCode::Vermelho`]. With no resolvable
/// schedule the result is [`StatusCode::Cinza`].
///
/// # Examples
///
/// ```
/// use ponto_engine::config::ToleranceConfig;
/// use ponto_engine::models::StatusCode;
/// use ponto_engine::rules::classify_entry;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let tolerances = ToleranceConfig { tolerance_minutes: 10, severe_minutes: 30 };
/// let actual = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(8, 25, 0).unwrap();
/// let scheduled = NaiveTime::from_hms_opt(8, 0, 0);
///
/// assert_eq!(classify_entry(actual, scheduled, &tolerances), StatusCode::Amarelo);
/// ```
pub fn classify_entry(
    actual: NaiveDateTime,
    scheduled: Option<NaiveTime>,
    tolerances: &ToleranceConfig,
) -> StatusCode {
    match scheduled {
        Some(scheduled) => {
            let (_, diff) = deviation_minutes(actual, scheduled);
            classify_deviation(diff, tolerances)
        }
        None => StatusCode::Cinza,
    }
}

/// Classifies an exit punch against the scheduled end of shift.
///
/// An absent exit is [`StatusCode::EmAndamento`] regardless of schedule:
/// the shift is simply still open, which is not a violation. Otherwise the
/// same three-way split as entries applies, reading on-time finish,
/// moderate overtime and excessive overtime; with no resolvable schedule
/// the result is [`StatusCode::Cinza`].
pub fn classify_exit(
    actual: Option<NaiveDateTime>,
    scheduled: Option<NaiveTime>,
    tolerances: &ToleranceConfig,
) -> StatusCode {
    let Some(actual) = actual else {
        return StatusCode::EmAndamento;
    };

    match scheduled {
        Some(scheduled) => {
            let (_, diff) = deviation_minutes(actual, scheduled);
            classify_deviation(diff, tolerances)
        }
        None => StatusCode::Cinza,
    }
}

/// Classifies an entry punch and records the evidence.
pub fn assess_entry(
    actual: NaiveDateTime,
    scheduled: Option<NaiveTime>,
    tolerances: &ToleranceConfig,
) -> StatusAssessment {
    match scheduled {
        Some(scheduled) => {
            let (boundary, diff) = deviation_minutes(actual, scheduled);
            let status = classify_deviation(diff, tolerances);
            StatusAssessment {
                event: PunchEvent::Entry,
                status,
                deviation_minutes: Some(diff),
                boundary: Some(boundary),
                reasoning: format!(
                    "Entry at {} is {} min from the {} boundary (tolerance {}, severe {})",
                    actual.time(),
                    diff,
                    boundary.time(),
                    tolerances.tolerance_minutes,
                    tolerances.severe_minutes
                ),
            }
        }
        None => StatusAssessment {
            event: PunchEvent::Entry,
            status: StatusCode::Cinza,
            deviation_minutes: None,
            boundary: None,
            reasoning: "No scheduled shift resolvable for the collaborator".to_string(),
        },
    }
}

/// Classifies an exit punch and records the evidence.
pub fn assess_exit(
    actual: Option<NaiveDateTime>,
    scheduled: Option<NaiveTime>,
    tolerances: &ToleranceConfig,
) -> StatusAssessment {
    let Some(actual) = actual else {
        return StatusAssessment {
            event: PunchEvent::Exit,
            status: StatusCode::EmAndamento,
            deviation_minutes: None,
            boundary: None,
            reasoning: "Shift is still open: no exit punch yet".to_string(),
        };
    };

    match scheduled {
        Some(scheduled) => {
            let (boundary, diff) = deviation_minutes(actual, scheduled);
            let status = classify_deviation(diff, tolerances);
            StatusAssessment {
                event: PunchEvent::Exit,
                status,
                deviation_minutes: Some(diff),
                boundary: Some(boundary),
                reasoning: format!(
                    "Exit at {} is {} min from the {} boundary (tolerance {}, severe {})",
                    actual.time(),
                    diff,
                    boundary.time(),
                    tolerances.tolerance_minutes,
                    tolerances.severe_minutes
                ),
            }
        }
        None => StatusAssessment {
            event: PunchEvent::Exit,
            status: StatusCode::Cinza,
            deviation_minutes: None,
            boundary: None,
            reasoning: "No scheduled shift resolvable for the collaborator".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn tolerances() -> ToleranceConfig {
        ToleranceConfig {
            tolerance_minutes: 10,
            severe_minutes: 30,
        }
    }

    // ==========================================================================
    // Entry classification
    // ==========================================================================
    #[test]
    fn test_entry_on_the_boundary_is_verde() {
        let status = classify_entry(dt(8, 0), Some(time(8, 0)), &tolerances());
        assert_eq!(status, StatusCode::Verde);
    }

    #[test]
    fn test_entry_within_tolerance_is_verde() {
        let status = classify_entry(dt(8, 10), Some(time(8, 0)), &tolerances());
        assert_eq!(status, StatusCode::Verde);
    }

    #[test]
    fn test_early_entry_is_verde() {
        let status = classify_entry(dt(7, 15), Some(time(8, 0)), &tolerances());
        assert_eq!(status, StatusCode::Verde);
    }

    #[test]
    fn test_entry_past_tolerance_is_amarelo() {
        let status = classify_entry(dt(8, 25), Some(time(8, 0)), &tolerances());
        assert_eq!(status, StatusCode::Amarelo);
    }

    #[test]
    fn test_entry_on_severe_boundary_is_amarelo() {
        let status = classify_entry(dt(8, 30), Some(time(8, 0)), &tolerances());
        assert_eq!(status, StatusCode::Amarelo);
    }

    #[test]
    fn test_entry_past_severe_is_vermelho() {
        let status = classify_entry(dt(9, 0), Some(time(8, 0)), &tolerances());
        assert_eq!(status, StatusCode::Vermelho);
    }

    #[test]
    fn test_entry_without_schedule_is_cinza() {
        let status = classify_entry(dt(8, 0), None, &tolerances());
        assert_eq!(status, StatusCode::Cinza);
    }

    // ==========================================================================
    // Exit classification
    // ==========================================================================
    #[test]
    fn test_missing_exit_is_em_andamento() {
        let status = classify_exit(None, Some(time(17, 0)), &tolerances());
        assert_eq!(status, StatusCode::EmAndamento);
    }

    #[test]
    fn test_missing_exit_without_schedule_is_still_em_andamento() {
        // The open-shift marker wins over the missing-schedule state
        let status = classify_exit(None, None, &tolerances());
        assert_eq!(status, StatusCode::EmAndamento);
    }

    #[test]
    fn test_on_time_exit_is_verde() {
        let status = classify_exit(Some(dt(17, 5)), Some(time(17, 0)), &tolerances());
        assert_eq!(status, StatusCode::Verde);
    }

    #[test]
    fn test_early_exit_is_verde() {
        let status = classify_exit(Some(dt(16, 30)), Some(time(17, 0)), &tolerances());
        assert_eq!(status, StatusCode::Verde);
    }

    #[test]
    fn test_moderate_overtime_is_amarelo() {
        let status = classify_exit(Some(dt(17, 20)), Some(time(17, 0)), &tolerances());
        assert_eq!(status, StatusCode::Amarelo);
    }

    #[test]
    fn test_excessive_overtime_is_vermelho() {
        let status = classify_exit(Some(dt(18, 0)), Some(time(17, 0)), &tolerances());
        assert_eq!(status, StatusCode::Vermelho);
    }

    #[test]
    fn test_exit_without_schedule_is_cinza() {
        let status = classify_exit(Some(dt(17, 0)), None, &tolerances());
        assert_eq!(status, StatusCode::Cinza);
    }

    // ==========================================================================
    // Purity and thresholds
    // ==========================================================================
    #[test]
    fn test_classifier_is_idempotent() {
        let first = classify_entry(dt(8, 25), Some(time(8, 0)), &tolerances());
        let second = classify_entry(dt(8, 25), Some(time(8, 0)), &tolerances());
        assert_eq!(first, second);
    }

    #[test]
    fn test_thresholds_come_from_configuration() {
        let strict = ToleranceConfig {
            tolerance_minutes: 0,
            severe_minutes: 5,
        };
        assert_eq!(
            classify_entry(dt(8, 1), Some(time(8, 0)), &strict),
            StatusCode::Amarelo
        );
        assert_eq!(
            classify_entry(dt(8, 6), Some(time(8, 0)), &strict),
            StatusCode::Vermelho
        );
    }

    // ==========================================================================
    // Assessments
    // ==========================================================================
    #[test]
    fn test_entry_assessment_carries_evidence() {
        let assessment = assess_entry(dt(8, 25), Some(time(8, 0)), &tolerances());

        assert_eq!(assessment.event, PunchEvent::Entry);
        assert_eq!(assessment.status, StatusCode::Amarelo);
        assert_eq!(assessment.deviation_minutes, Some(25));
        assert_eq!(assessment.boundary, Some(dt(8, 0)));
        assert!(assessment.reasoning.contains("25 min"));
    }

    #[test]
    fn test_early_entry_assessment_has_negative_deviation() {
        let assessment = assess_entry(dt(7, 40), Some(time(8, 0)), &tolerances());

        assert_eq!(assessment.status, StatusCode::Verde);
        assert_eq!(assessment.deviation_minutes, Some(-20));
    }

    #[test]
    fn test_open_exit_assessment_has_no_evidence() {
        let assessment = assess_exit(None, Some(time(17, 0)), &tolerances());

        assert_eq!(assessment.status, StatusCode::EmAndamento);
        assert_eq!(assessment.deviation_minutes, None);
        assert_eq!(assessment.boundary, None);
    }

    #[test]
    fn test_unscheduled_assessment_is_cinza_with_no_boundary() {
        let assessment = assess_exit(Some(dt(17, 0)), None, &tolerances());

        assert_eq!(assessment.status, StatusCode::Cinza);
        assert_eq!(assessment.boundary, None);
        assert!(assessment.reasoning.contains("No scheduled shift"));
    }

    #[test]
    fn test_assessment_agrees_with_classifier() {
        for minute in [0, 5, 10, 11, 25, 30, 31, 59] {
            let actual = dt(8, minute);
            let assessment = assess_entry(actual, Some(time(8, 0)), &tolerances());
            let status = classify_entry(actual, Some(time(8, 0)), &tolerances());
            assert_eq!(assessment.status, status);
        }
    }
}
