//! Input record types for the per-day JSON documents written by the study timer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day's study-time snapshot, keyed by date.
///
/// The `date` field doubles as the sort key for the whole pipeline; a value
/// that does not parse as `YYYY-MM-DD` fails deserialization of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub summary: DaySummary,
    /// Per-category timers. Category sets may differ from day to day.
    pub timers: BTreeMap<String, TimerStats>,
}

/// Whole-day aggregate figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub total_possible_hours: f64,
    pub total_studied_hours: f64,
    /// Percentage in 0..=100 (expected, not enforced).
    pub overall_completion: f64,
}

/// One category's figures for a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStats {
    pub studied_hours: f64,
    pub completion_percentage: f64,
}
