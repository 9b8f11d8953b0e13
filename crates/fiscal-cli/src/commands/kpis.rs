use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use fiscal_core::metrics::compute_kpis;
use fiscal_core::{BalanceSheetSnapshot, IncomeStatementPeriod};

use crate::input;

/// One month's statements as exported for the dashboard.
#[derive(Debug, Deserialize)]
pub struct StatementPair {
    #[serde(rename = "estadoResultados")]
    pub income: IncomeStatementPeriod,
    #[serde(rename = "balanceGeneral")]
    pub balance: BalanceSheetSnapshot,
}

/// Arguments for KPI computation
#[derive(Args)]
pub struct KpisArgs {
    /// Path to a JSON file holding estadoResultados and balanceGeneral
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_kpis(args: KpisArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pair = load_statement_pair(args.input.as_deref())?;
    let kpis = compute_kpis(&pair.income, &pair.balance);
    Ok(serde_json::to_value(kpis)?)
}

/// Load a statement pair from a file path or piped stdin JSON.
pub fn load_statement_pair(
    path: Option<&str>,
) -> Result<StatementPair, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return input::read_json(path);
    }
    if let Some(piped) = input::read_stdin()? {
        return Ok(serde_json::from_value(piped)?);
    }
    Err("provide --input or pipe JSON on stdin".into())
}
