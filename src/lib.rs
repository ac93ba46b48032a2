//! EasyCal client core.
//!
//! Tracks a user's daily food consumption against nutrition goals.
//! The [`day::DayView`] owns the in-memory record of what was eaten on
//! the selected day, derives per-meal and per-day totals on every
//! read, and keeps the record consistent with the EasyCal API server:
//! every mutation goes to the server first and the local store only
//! changes after the server confirms it.

pub mod api;
pub mod commands;
pub mod config;
pub mod day;
pub mod models;
