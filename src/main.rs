//! studystats - aggregates per-day study tracking records into a summary
//! table, charts, and an HTML report.

use clap::{Parser, Subcommand};

mod aggregate;
mod chart;
mod cmd;
mod loader;
mod record;

#[derive(Parser, Debug)]
#[command(name = "studystats", version, about = "Study time statistics reporter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the chart image and HTML report (the default)
    Report(cmd::report::ReportCommand),
    /// Print the daily summary table
    Summary(cmd::summary::SummaryCommand),
    /// Print the per-category series
    Categories(cmd::categories::CategoriesCommand),
}

impl Default for Command {
    fn default() -> Self {
        Command::Report(cmd::report::ReportCommand::default())
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match cli.command.unwrap_or_default() {
        Command::Report(cmd) => cmd.exec(),
        Command::Summary(cmd) => cmd.exec(),
        Command::Categories(cmd) => cmd.exec(),
    }
}
