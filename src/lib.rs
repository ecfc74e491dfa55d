//! Shift Earnings Engine
//!
//! This crate turns a worked shift (date, start time, end time) and a job's rate
//! configuration into a categorized pay breakdown under Israeli pay rules:
//! overtime after a daily threshold, a Shabbat rate, a night-shift bonus and a
//! daily transport allowance.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
