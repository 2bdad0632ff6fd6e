//! Data ingestion and aggregation layer for the presence analyzer.
//!
//! Responsible for reading the attendance CSV into a [`PresenceDataset`]
//! and for the weekday-bucketed reductions consumed by the presentation
//! layer.
//!
//! [`PresenceDataset`]: presence_core::models::PresenceDataset

pub mod aggregator;
pub mod reader;

pub use presence_core as core;
