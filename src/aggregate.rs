//! Pure transformations from the sorted record list into the derived views
//! consumed by the reporter: the daily summary table, the per-category time
//! series, and the date-indexed reshape behind the stacked bar chart.

use crate::record::DailyRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the daily summary table, copied straight from a record's
/// `summary` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummaryRow {
    pub date: NaiveDate,
    pub possible_hours: f64,
    pub studied_hours: f64,
    pub completion: f64,
}

/// A single category's chronological series, restricted to the dates where
/// the category appeared. The three vectors are parallel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategorySeries {
    pub dates: Vec<NaiveDate>,
    pub studied_hours: Vec<f64>,
    pub completion: Vec<f64>,
}

impl CategorySeries {
    fn push(&mut self, date: NaiveDate, studied_hours: f64, completion: f64) {
        self.dates.push(date);
        self.studied_hours.push(studied_hours);
        self.completion.push(completion);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.dates.len()
    }
}

/// Studied hours reshaped into a date-indexed table for the stacked bar
/// chart: `hours[date_idx][category_idx]`, zero where a category did not
/// appear on a date.
#[derive(Debug, Clone)]
pub struct StackedHours {
    pub dates: Vec<NaiveDate>,
    pub categories: Vec<String>,
    pub hours: Vec<Vec<f64>>,
}

/// One summary row per input record, in input (chronological) order.
pub fn daily_summary(records: &[DailyRecord]) -> Vec<DailySummaryRow> {
    records
        .iter()
        .map(|record| DailySummaryRow {
            date: record.date,
            possible_hours: record.summary.total_possible_hours,
            studied_hours: record.summary.total_studied_hours,
            completion: record.summary.overall_completion,
        })
        .collect()
}

/// Accumulate every category's `(date, studiedHours, completionPercentage)`
/// entries across the record list. A category absent on a given day simply
/// contributes no entry for that date.
pub fn category_series(records: &[DailyRecord]) -> BTreeMap<String, CategorySeries> {
    let mut series: BTreeMap<String, CategorySeries> = BTreeMap::new();
    for record in records {
        for (category, stats) in &record.timers {
            series.entry(category.clone()).or_default().push(
                record.date,
                stats.studied_hours,
                stats.completion_percentage,
            );
        }
    }
    series
}

/// Reshape the series map by date. Duplicate dates (two records claiming the
/// same day) merge additively into a single column.
pub fn stacked_by_date(series: &BTreeMap<String, CategorySeries>) -> StackedHours {
    let categories: Vec<String> = series.keys().cloned().collect();

    let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for (idx, cat_series) in series.values().enumerate() {
        for (date, hours) in cat_series.dates.iter().zip(&cat_series.studied_hours) {
            let row = by_date
                .entry(*date)
                .or_insert_with(|| vec![0.0; categories.len()]);
            row[idx] += hours;
        }
    }

    let (dates, hours) = by_date.into_iter().unzip();
    StackedHours {
        dates,
        categories,
        hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DaySummary, TimerStats};

    fn record(date: &str, possible: f64, studied: f64, completion: f64) -> DailyRecord {
        DailyRecord {
            date: date.parse().unwrap(),
            summary: DaySummary {
                total_possible_hours: possible,
                total_studied_hours: studied,
                overall_completion: completion,
            },
            timers: BTreeMap::new(),
        }
    }

    fn timer(studied: f64, completion: f64) -> TimerStats {
        TimerStats {
            studied_hours: studied,
            completion_percentage: completion,
        }
    }

    /// Two-day scenario: Math on both days, Reading on day two only.
    fn two_days() -> Vec<DailyRecord> {
        let mut day1 = record("2025-03-01", 5.0, 3.0, 60.0);
        day1.timers.insert("Math".into(), timer(2.0, 50.0));
        let mut day2 = record("2025-03-02", 5.0, 4.0, 80.0);
        day2.timers.insert("Math".into(), timer(3.0, 75.0));
        day2.timers.insert("Reading".into(), timer(1.0, 100.0));
        vec![day1, day2]
    }

    #[test]
    fn summary_has_one_row_per_record() {
        let rows = daily_summary(&two_days());
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            DailySummaryRow {
                date: "2025-03-01".parse().unwrap(),
                possible_hours: 5.0,
                studied_hours: 3.0,
                completion: 60.0,
            }
        );
        assert_eq!(rows[1].studied_hours, 4.0);
        assert_eq!(rows[1].completion, 80.0);
    }

    #[test]
    fn summary_of_empty_input_is_empty() {
        assert!(daily_summary(&[]).is_empty());
        assert!(category_series(&[]).is_empty());
    }

    #[test]
    fn series_tolerate_sparse_category_coverage() {
        let series = category_series(&two_days());
        assert_eq!(series.len(), 2);

        let math = &series["Math"];
        assert_eq!(math.len(), 2);
        assert_eq!(math.studied_hours, [2.0, 3.0]);
        assert_eq!(math.completion, [50.0, 75.0]);

        let reading = &series["Reading"];
        assert_eq!(reading.len(), 1);
        assert_eq!(reading.dates[0], "2025-03-02".parse().unwrap());
        assert_eq!(reading.studied_hours, [1.0]);
        assert_eq!(reading.completion, [100.0]);
    }

    #[test]
    fn stacked_table_zero_fills_missing_combinations() {
        let stacked = stacked_by_date(&category_series(&two_days()));
        assert_eq!(stacked.categories, ["Math", "Reading"]);
        assert_eq!(stacked.dates.len(), 2);
        // Day one has no Reading entry.
        assert_eq!(stacked.hours[0], [2.0, 0.0]);
        assert_eq!(stacked.hours[1], [3.0, 1.0]);
    }

    #[test]
    fn stacked_table_merges_duplicate_dates_additively() {
        let mut dup = two_days();
        let mut extra = record("2025-03-02", 1.0, 1.0, 100.0);
        extra.timers.insert("Math".into(), timer(0.5, 100.0));
        dup.push(extra);

        let stacked = stacked_by_date(&category_series(&dup));
        assert_eq!(stacked.dates.len(), 2);
        assert_eq!(stacked.hours[1][0], 3.5);
    }
}
