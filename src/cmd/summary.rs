//! Summary command - the daily summary table on stdout.

use crate::aggregate::{self, DailySummaryRow};
use crate::loader;
use clap::Args;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// Directory containing the stats_*.json daily records
    #[arg(short, long, default_value = "data")]
    data: PathBuf,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,

    /// Output as CSV instead of a formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,
}

/// Row for the summary table and CSV output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
struct SummaryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Possible Hours")]
    possible_hours: String,
    #[tabled(rename = "Studied Hours")]
    studied_hours: String,
    #[tabled(rename = "Completion (%)")]
    completion: String,
}

impl From<&DailySummaryRow> for SummaryRow {
    fn from(row: &DailySummaryRow) -> Self {
        SummaryRow {
            date: row.date.to_string(),
            possible_hours: format!("{:.2}", row.possible_hours),
            studied_hours: format!("{:.2}", row.studied_hours),
            completion: format!("{:.1}", row.completion),
        }
    }
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let records = loader::load_records(&self.data)?;
        if records.is_empty() {
            println!("No daily stats files found in {}", self.data.display());
            return Ok(());
        }
        let rows = aggregate::daily_summary(&records);

        if self.json {
            serde_json::to_writer_pretty(io::stdout(), &rows)?;
            println!();
        } else if self.csv {
            self.write_csv(&rows)?;
        } else {
            self.print_table(&rows);
        }
        Ok(())
    }

    fn print_table(&self, rows: &[DailySummaryRow]) {
        let rows: Vec<SummaryRow> = rows.iter().map(SummaryRow::from).collect();
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn write_csv(&self, rows: &[DailySummaryRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(SummaryRow::from(row))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
