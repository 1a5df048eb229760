//! Core data models for the time-record rules engine.
//!
//! This module contains all the domain models used throughout the engine.

mod scheduled_shift;
mod status;
mod time_record;

pub use scheduled_shift::ScheduledShift;
pub use status::StatusCode;
pub use time_record::{GeoPoint, Punch, TimeRecord};
