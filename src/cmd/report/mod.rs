//! Report command - the full pipeline: load, aggregate, render charts and
//! the HTML report.

use crate::{aggregate, chart, loader};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

mod html;

/// Fixed output file names, overwritten on each run.
pub const CHART_FILE: &str = "study_stats.png";
pub const REPORT_FILE: &str = "study_report.html";

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// Directory containing the stats_*.json daily records
    #[arg(short, long, default_value = "data")]
    data: PathBuf,

    /// Directory the chart image and HTML report are written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Open the HTML report in the default browser
    #[arg(long)]
    open: bool,
}

impl Default for ReportCommand {
    fn default() -> Self {
        ReportCommand {
            data: PathBuf::from("data"),
            out_dir: PathBuf::from("."),
            open: false,
        }
    }
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let records = loader::load_records(&self.data)?;
        let Some(last) = records.last() else {
            println!("No daily stats files found in {}", self.data.display());
            return Ok(());
        };

        let rows = aggregate::daily_summary(&records);
        let series = aggregate::category_series(&records);
        let stacked = aggregate::stacked_by_date(&series);

        let chart_path = self.out_dir.join(CHART_FILE);
        chart::render(&chart_path, &rows, &stacked, last)?;

        let report_path = self.out_dir.join(REPORT_FILE);
        let report = html::generate_html(&rows, CHART_FILE);
        std::fs::write(&report_path, report)
            .with_context(|| format!("failed to write {}", report_path.display()))?;

        println!("Charts written to {}", chart_path.display());
        println!("Report written to {}", report_path.display());

        if self.open {
            opener::open(&report_path)?;
        }
        Ok(())
    }
}
