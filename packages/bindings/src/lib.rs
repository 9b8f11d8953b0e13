use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// KPI engine
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_kpis(income_json: String, balance_json: String) -> NapiResult<String> {
    let income: fiscal_core::IncomeStatementPeriod =
        serde_json::from_str(&income_json).map_err(to_napi_error)?;
    let balance: fiscal_core::BalanceSheetSnapshot =
        serde_json::from_str(&balance_json).map_err(to_napi_error)?;
    let kpis = fiscal_core::metrics::compute_kpis(&income, &balance);
    serde_json::to_string(&kpis).map_err(to_napi_error)
}

#[napi]
pub fn compare_periods(current_json: String, previous_json: String) -> NapiResult<String> {
    let current: fiscal_core::IncomeStatementPeriod =
        serde_json::from_str(&current_json).map_err(to_napi_error)?;
    let previous: fiscal_core::IncomeStatementPeriod =
        serde_json::from_str(&previous_json).map_err(to_napi_error)?;
    let comparison = fiscal_core::comparison::compare_periods(&current, &previous);
    serde_json::to_string(&comparison).map_err(to_napi_error)
}

#[napi]
pub fn generate_recommendations(income_json: String, balance_json: String) -> NapiResult<String> {
    let income: fiscal_core::IncomeStatementPeriod =
        serde_json::from_str(&income_json).map_err(to_napi_error)?;
    let balance: fiscal_core::BalanceSheetSnapshot =
        serde_json::from_str(&balance_json).map_err(to_napi_error)?;
    let kpis = fiscal_core::metrics::compute_kpis(&income, &balance);
    let recommendations = fiscal_core::recommendations::generate_recommendations(&kpis, &income);
    serde_json::to_string(&recommendations).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

#[napi]
pub fn build_period_report(data_json: String, year: i32, month: String) -> NapiResult<String> {
    let data: fiscal_core::dataset::ClientFinancialData =
        serde_json::from_str(&data_json).map_err(to_napi_error)?;
    let output =
        fiscal_core::report::build_period_report(&data, year, &month).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

#[napi]
pub fn resolve_client(id_or_name: String) -> NapiResult<String> {
    fiscal_core::dataset::resolve_client(&id_or_name)
        .map(str::to_string)
        .map_err(to_napi_error)
}

#[napi]
pub fn client_name(slug: String) -> NapiResult<String> {
    Ok(fiscal_core::dataset::client_name(&slug))
}

#[napi]
pub fn month_name(label: String) -> NapiResult<String> {
    Ok(fiscal_core::dataset::month_name(&label))
}
