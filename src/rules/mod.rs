//! Rules for time-record status computation and validation.
//!
//! This module contains the rules engine proper: shift timestamp
//! resolution with midnight rollover, minimum/maximum duration
//! validation, punch status classification against a scheduled shift,
//! status presentation mapping, and the record evaluation entry point
//! that ties them together.

mod classifier;
mod duration;
mod evaluation;
mod presentation;
mod shift_resolver;

pub use classifier::{
    PunchEvent, StatusAssessment, assess_entry, assess_exit, classify_entry, classify_exit,
};
pub use duration::{
    DEFAULT_MAX_SHIFT_HOURS, DEFAULT_MIN_SHIFT_MINUTES, DurationReport, DurationViolation,
    check_duration, validate_max_duration, validate_min_duration,
};
pub use evaluation::{RecordEvaluation, evaluate_record};
pub use presentation::{StatusPresentation, StatusStyle, presentation_for};
pub use shift_resolver::{
    ResolvedShift, parse_clock_time, parse_reference_date, resolve_shift, resolve_shift_str,
};
