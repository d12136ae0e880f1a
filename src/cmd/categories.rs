//! Categories command - per-category series rows.

use crate::aggregate::{self, CategorySeries};
use crate::loader;
use clap::Args;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CategoriesCommand {
    /// Directory containing the stats_*.json daily records
    #[arg(short, long, default_value = "data")]
    data: PathBuf,

    /// Only show this category (case-insensitive)
    #[arg(short, long)]
    category: Option<String>,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

/// Row for the categories table output
#[derive(Debug, Clone, Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Studied Hours")]
    studied_hours: String,
    #[tabled(rename = "Completion (%)")]
    completion: String,
}

impl CategoriesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let records = loader::load_records(&self.data)?;
        if records.is_empty() {
            println!("No daily stats files found in {}", self.data.display());
            return Ok(());
        }

        let series = aggregate::category_series(&records);
        let filtered: BTreeMap<&String, &CategorySeries> = series
            .iter()
            .filter(|(name, _)| {
                self.category
                    .as_deref()
                    .is_none_or(|filter| name.eq_ignore_ascii_case(filter))
            })
            .collect();

        if filtered.is_empty() {
            println!("No categories found matching filters");
            return Ok(());
        }

        if self.json {
            serde_json::to_writer_pretty(io::stdout(), &filtered)?;
            println!();
        } else {
            self.print_table(&filtered);
        }
        Ok(())
    }

    fn print_table(&self, series: &BTreeMap<&String, &CategorySeries>) {
        let rows: Vec<CategoryRow> = series
            .iter()
            .flat_map(|(name, series)| {
                series
                    .dates
                    .iter()
                    .zip(&series.studied_hours)
                    .zip(&series.completion)
                    .map(|((date, studied), completion)| CategoryRow {
                        category: name.to_string(),
                        date: date.to_string(),
                        studied_hours: format!("{studied:.2}"),
                        completion: format!("{completion:.1}"),
                    })
            })
            .collect();

        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }
}
