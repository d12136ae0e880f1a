//! Renders the four-panel chart image with plotters.
//!
//! Layout mirrors the report page: two full-width trend lines on top, then a
//! stacked per-category bar chart and the last-day completion snapshot side
//! by side.

use crate::aggregate::{DailySummaryRow, StackedHours};
use crate::record::DailyRecord;
use anyhow::Context;
use log::{info, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontDesc;
use std::path::Path;

pub const CHART_WIDTH: u32 = 1500;
pub const CHART_HEIGHT: u32 = 1200;

const PREFERRED_FONT: &str = "DejaVu Sans";
const FALLBACK_FONT: &str = "sans-serif";

/// Render all four panels into a single PNG at `path`.
pub fn render(
    path: &Path,
    rows: &[DailySummaryRow],
    stacked: &StackedHours,
    last: &DailyRecord,
) -> anyhow::Result<()> {
    let font = font_family();
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((3, 1));
    let date_labels: Vec<String> = rows.iter().map(|r| r.date.to_string()).collect();
    let studied: Vec<f64> = rows.iter().map(|r| r.studied_hours).collect();
    let completion: Vec<f64> = rows.iter().map(|r| r.completion).collect();

    draw_trend(
        &panels[0],
        "Total studied hours per day",
        "Studied hours",
        &date_labels,
        &studied,
        &BLUE,
        font,
    )?;
    draw_trend(
        &panels[1],
        "Overall completion per day",
        "Completion (%)",
        &date_labels,
        &completion,
        &GREEN,
        font,
    )?;

    let bottom = panels[2].split_evenly((1, 2));
    draw_stacked_hours(&bottom[0], stacked, font)?;
    draw_completion_snapshot(&bottom[1], last, font)?;

    root.present()
        .with_context(|| format!("failed to write chart image {}", path.display()))?;
    info!("chart image written to {}", path.display());
    Ok(())
}

/// Probe the preferred font family; fall back to the generic family when the
/// backend cannot resolve it. Font selection is best-effort only.
fn font_family() -> &'static str {
    let probe: FontDesc = (PREFERRED_FONT, 12).into_font();
    if probe.layout_box("0").is_ok() {
        PREFERRED_FONT
    } else {
        warn!(
            "font '{}' unavailable, falling back to '{}'",
            PREFERRED_FONT, FALLBACK_FONT
        );
        FALLBACK_FONT
    }
}

fn draw_trend(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
    color: &RGBColor,
    font: &'static str,
) -> anyhow::Result<()> {
    let x_max = labels.len().saturating_sub(1).max(1) as f64;
    let mut chart = ChartBuilder::on(area)
        .caption(title, (font, 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_max + 0.5, 0f64..axis_max(values))?;

    chart
        .configure_mesh()
        .x_labels(labels.len().min(12))
        .x_label_formatter(&|x: &f64| date_label(labels, *x))
        .y_desc(y_desc)
        .label_style((font, 14))
        .draw()?;

    chart.draw_series(LineSeries::new(
        values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
        color.stroke_width(2),
    ))?;
    chart.draw_series(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Circle::new((i as f64, *v), 3, color.filled())),
    )?;
    Ok(())
}

fn draw_stacked_hours(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    stacked: &StackedHours,
    font: &'static str,
) -> anyhow::Result<()> {
    let labels: Vec<String> = stacked.dates.iter().map(|d| d.to_string()).collect();
    let totals: Vec<f64> = stacked.hours.iter().map(|row| row.iter().sum()).collect();
    let x_max = (labels.len() as f64 - 0.5).max(0.5);

    let mut chart = ChartBuilder::on(area)
        .caption("Studied hours by category", (font, 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..axis_max(&totals))?;

    chart
        .configure_mesh()
        .x_labels(labels.len().min(8))
        .x_label_formatter(&|x: &f64| date_label(&labels, *x))
        .y_desc("Studied hours")
        .label_style((font, 14))
        .draw()?;

    for (cat_idx, category) in stacked.categories.iter().enumerate() {
        let color = Palette99::pick(cat_idx);
        let bars = stacked.hours.iter().enumerate().map(|(date_idx, row)| {
            // Stack this category's segment on top of the ones before it.
            let base: f64 = row[..cat_idx].iter().sum();
            let x = date_idx as f64;
            Rectangle::new(
                [(x - 0.35, base), (x + 0.35, base + row[cat_idx])],
                color.filled(),
            )
        });
        chart
            .draw_series(bars)?
            .label(category.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], Palette99::pick(cat_idx).filled())
            });
    }

    if !stacked.categories.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .label_font((font, 14))
            .draw()?;
    }
    Ok(())
}

/// Completion percentage per category for the chronologically last record,
/// with the value written above each bar.
fn draw_completion_snapshot(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    last: &DailyRecord,
    font: &'static str,
) -> anyhow::Result<()> {
    let categories: Vec<&str> = last.timers.keys().map(String::as_str).collect();
    let values: Vec<f64> = last
        .timers
        .values()
        .map(|t| t.completion_percentage)
        .collect();
    let title = format!("Completion by category on {}", last.date);
    let x_max = (categories.len() as f64 - 0.5).max(0.5);

    let mut chart = ChartBuilder::on(area)
        .caption(&title, (font, 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..100f64)?;

    chart
        .configure_mesh()
        .x_labels(categories.len().max(1))
        .x_label_formatter(&|x: &f64| category_label(&categories, *x))
        .y_desc("Completion (%)")
        .label_style((font, 14))
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        Rectangle::new(
            [(i as f64 - 0.3, 0.0), (i as f64 + 0.3, *v)],
            Palette99::pick(i).filled(),
        )
    }))?;
    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        Text::new(
            format!("{v:.1}%"),
            (i as f64 - 0.1, (v + 2.0).min(97.0)),
            (font, 14).into_font(),
        )
    }))?;
    Ok(())
}

/// Pad the y-axis a little above the largest value; keep a non-degenerate
/// range when everything is zero.
fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

fn date_label(labels: &[String], x: f64) -> String {
    if x < -0.25 {
        return String::new();
    }
    labels.get(x.round() as usize).cloned().unwrap_or_default()
}

fn category_label(categories: &[&str], x: f64) -> String {
    if x < -0.25 {
        return String::new();
    }
    categories
        .get(x.round() as usize)
        .map(|c| c.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_max_pads_above_largest_value() {
        assert_eq!(axis_max(&[2.0, 4.0, 3.0]), 4.0 * 1.1);
    }

    #[test]
    fn axis_max_of_empty_or_zero_input_is_one() {
        assert_eq!(axis_max(&[]), 1.0);
        assert_eq!(axis_max(&[0.0, 0.0]), 1.0);
    }

    #[test]
    fn labels_round_to_nearest_index() {
        let labels = vec!["2025-03-01".to_string(), "2025-03-02".to_string()];
        assert_eq!(date_label(&labels, 0.1), "2025-03-01");
        assert_eq!(date_label(&labels, 0.9), "2025-03-02");
        assert_eq!(date_label(&labels, 5.0), "");
        assert_eq!(date_label(&labels, -0.5), "");
    }
}
