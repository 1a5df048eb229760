//! Time-record rules engine for the Embu Express courier operation
//!
//! This crate provides the status computation and validation rules for
//! motoboy clock-in/clock-out records: resolving entry/exit timestamps
//! across midnight, validating shift durations, and classifying punches
//! against a collaborator's scheduled shift.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod rules;
