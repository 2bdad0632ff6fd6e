//! Domain layer for the presence analyzer.
//!
//! Pure types and calculations shared by the ingestion and presentation
//! crates: the attendance data model, time-of-day conversions, the mean
//! with its zero-for-empty contract, typed errors and CLI settings.

pub mod calculations;
pub mod error;
pub mod models;
pub mod settings;
pub mod time_utils;
