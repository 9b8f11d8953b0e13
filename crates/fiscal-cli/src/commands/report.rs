use clap::Args;
use serde_json::Value;

use fiscal_core::dataset::ClientFinancialData;
use fiscal_core::report::build_period_report;

use crate::input;

/// Arguments for the full indicator report
#[derive(Args)]
pub struct ReportArgs {
    /// Path to the client financial document (data/clients/<slug>.json)
    #[arg(long)]
    pub data: String,

    /// Fiscal year, e.g. 2024
    #[arg(long)]
    pub year: i32,

    /// Month label, e.g. 2024-03
    #[arg(long)]
    pub month: String,
}

/// Arguments for listing available periods
#[derive(Args)]
pub struct PeriodsArgs {
    /// Path to the client financial document
    #[arg(long)]
    pub data: String,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data: ClientFinancialData = input::read_json(&args.data)?;
    let output = build_period_report(&data, args.year, &args.month)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_periods(args: PeriodsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data: ClientFinancialData = input::read_json(&args.data)?;
    let years: Vec<Value> = data
        .available_years()
        .into_iter()
        .map(|year| {
            serde_json::json!({
                "anio": year,
                "meses": data.available_months(year),
            })
        })
        .collect();

    Ok(serde_json::json!({
        "clienteId": data.client_id,
        "clienteNombre": data.client_name,
        "years": years,
    }))
}
