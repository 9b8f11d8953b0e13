use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use fiscal_core::comparison::compare_periods;
use fiscal_core::IncomeStatementPeriod;

use crate::input;

/// Two income-statement periods to compare.
#[derive(Debug, Deserialize)]
pub struct ComparisonInput {
    pub actual: IncomeStatementPeriod,
    pub anterior: IncomeStatementPeriod,
}

/// Arguments for period comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a JSON file holding actual and anterior statements
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let comparison: ComparisonInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(piped) = input::read_stdin()? {
        serde_json::from_value(piped)?
    } else {
        return Err("provide --input or pipe JSON on stdin".into());
    };

    let result = compare_periods(&comparison.actual, &comparison.anterior);
    Ok(serde_json::to_value(result)?)
}
