mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::kpis::KpisArgs;
use commands::recommend::RecommendArgs;
use commands::report::{PeriodsArgs, ReportArgs};

/// Fiscal KPI and advisory calculations for the Luenser dashboard
#[derive(Parser)]
#[command(
    name = "lcf",
    version,
    about = "Fiscal KPI and advisory calculations",
    long_about = "A CLI over the Luenser fiscal engine. Computes financial KPIs, \
                  period-over-period variances and advisory recommendations from \
                  CONTPAQ statement exports, with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the 15-ratio KPI set from one month's statements
    Kpis(KpisArgs),
    /// Compare two income-statement periods
    Compare(CompareArgs),
    /// Generate threshold advisories from one month's statements
    Recommend(RecommendArgs),
    /// Build the full indicator report for a client month
    Report(ReportArgs),
    /// List the years and months available in a client document
    Periods(PeriodsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Kpis(args) => commands::kpis::run_kpis(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Recommend(args) => commands::recommend::run_recommend(args),
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Periods(args) => commands::report::run_periods(args),
        Commands::Version => {
            println!("lcf {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
