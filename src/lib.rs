//! Timecard Reconciliation Engine
//!
//! This crate reconciles employees' clock-in/clock-out punches against a
//! configured weekly work schedule, producing per-day worked, regular,
//! overtime, absence, lateness and night premium minutes, plus filtered
//! period totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
