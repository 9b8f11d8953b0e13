//! Composite per-period analysis: the computation behind the dashboard's
//! fiscal-indicators screen, bundling KPIs, comparisons against the
//! previous month and the prior year, and the advisory list.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::comparison::{compare_periods, PeriodComparison};
use crate::dataset::{month_name, previous_month, ClientFinancialData};
use crate::metrics::{compute_kpis, KpiSet};
use crate::recommendations::{generate_recommendations, Recommendation};
use crate::types::{
    with_metadata, BalanceSheetSnapshot, ComputationOutput, IncomeStatementPeriod,
    IncomeStatementYtd,
};
use crate::{FiscalError, FiscalResult};

// ---------------------------------------------------------------------------
// Output type
// ---------------------------------------------------------------------------

/// Everything the indicator screen renders for one client month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodReport {
    #[serde(rename = "clienteId")]
    pub client_id: String,
    #[serde(rename = "clienteNombre")]
    pub client_name: String,
    #[serde(rename = "anio")]
    pub year: i32,
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "nombreMes")]
    pub month_name: String,
    #[serde(rename = "estadoResultados")]
    pub income: IncomeStatementPeriod,
    #[serde(rename = "estadoResultadosYTD", skip_serializing_if = "Option::is_none")]
    pub ytd: Option<IncomeStatementYtd>,
    #[serde(rename = "balanceGeneral")]
    pub balance: BalanceSheetSnapshot,
    pub kpis: KpiSet,
    #[serde(rename = "variacionMensual", skip_serializing_if = "Option::is_none")]
    pub month_over_month: Option<PeriodComparison>,
    #[serde(rename = "variacionAnual", skip_serializing_if = "Option::is_none")]
    pub year_over_year: Option<PeriodComparison>,
    #[serde(rename = "recomendaciones")]
    pub recommendations: Vec<Recommendation>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the full indicator report for one month of a client document.
///
/// The month's own income statement and balance sheet are required; the
/// YTD statement and both comparison periods degrade to `None` with a
/// warning when the export does not carry them.
pub fn build_period_report(
    data: &ClientFinancialData,
    year: i32,
    month: &str,
) -> FiscalResult<ComputationOutput<PeriodReport>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let month_part = match month.split_once('-') {
        Some((y, m)) if y.parse::<i32>().is_ok() && m.parse::<u32>().is_ok() => m.to_string(),
        _ => {
            return Err(FiscalError::InvalidInput {
                field: "month".to_string(),
                reason: format!("'{month}' is not a YYYY-MM label"),
            })
        }
    };

    let missing = || FiscalError::MissingPeriod {
        year,
        month: month.to_string(),
    };
    let year_data = data.years.get(&year.to_string()).ok_or_else(missing)?;
    let income = year_data
        .period_statements
        .iter()
        .find(|er| er.period == month)
        .ok_or_else(missing)?
        .clone();
    let balance = year_data
        .balance_sheets
        .iter()
        .find(|bg| bg.period == month)
        .ok_or_else(missing)?
        .clone();

    let ytd = year_data
        .ytd_statements
        .iter()
        .find(|er| er.period == month)
        .cloned();
    if ytd.is_none() {
        warnings.push(format!("No YTD statement recorded for {month}"));
    }

    let kpis = compute_kpis(&income, &balance);
    let recommendations = generate_recommendations(&kpis, &income);

    let month_over_month = previous_month(month)
        .and_then(|prev| find_period(data, &prev))
        .map(|prev| compare_periods(&income, prev));
    if month_over_month.is_none() {
        warnings.push(format!("No previous-month statement before {month}"));
    }

    let prior_year_label = format!("{:04}-{month_part}", year - 1);
    let year_over_year = find_period(data, &prior_year_label)
        .map(|prev| compare_periods(&income, prev));
    if year_over_year.is_none() {
        warnings.push(format!("No prior-year statement for {prior_year_label}"));
    }

    let report = PeriodReport {
        client_id: data.client_id.clone(),
        client_name: data.client_name.clone(),
        year,
        month: month.to_string(),
        month_name: month_name(month),
        income,
        ytd,
        balance,
        kpis,
        month_over_month,
        year_over_year,
        recommendations,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "cliente": data.client_id,
        "periodo": month,
        "cost_of_sales": "purchases line",
        "comparison_fallback": "zero percentage on zero base",
    });

    Ok(with_metadata(
        "Monthly fiscal indicator report (KPIs, period variance, advisories)",
        &assumptions,
        warnings,
        elapsed,
        report,
    ))
}

/// Locate a period statement anywhere in the document by its full label.
fn find_period<'a>(
    data: &'a ClientFinancialData,
    label: &str,
) -> Option<&'a IncomeStatementPeriod> {
    let (year, _) = label.split_once('-')?;
    data.years
        .get(year)?
        .period_statements
        .iter()
        .find(|er| er.period == label)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
