//! Client financial data sets: the per-client JSON documents exported from
//! CONTPAQ that back the dashboard, plus the static client and month
//! catalogs used when presenting them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{BalanceSheetSnapshot, IncomeStatementPeriod, IncomeStatementYtd};
use crate::{FiscalError, FiscalResult};

// ---------------------------------------------------------------------------
// Data set types
// ---------------------------------------------------------------------------

/// One fiscal year of statements for a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearData {
    #[serde(rename = "estadoResultadosPeriodo")]
    pub period_statements: Vec<IncomeStatementPeriod>,
    #[serde(rename = "estadoResultadosYTD")]
    pub ytd_statements: Vec<IncomeStatementYtd>,
    #[serde(rename = "balanceGeneral")]
    pub balance_sheets: Vec<BalanceSheetSnapshot>,
}

/// The full financial document for one client, keyed by fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFinancialData {
    #[serde(rename = "clienteId")]
    pub client_id: String,
    #[serde(rename = "clienteNombre")]
    pub client_name: String,
    #[serde(rename = "razonSocial")]
    pub legal_name: String,
    pub years: BTreeMap<String, YearData>,
}

/// The three statements available for one month, any of which may be
/// missing from the export.
#[derive(Debug, Clone, Copy)]
pub struct PeriodData<'a> {
    pub period: Option<&'a IncomeStatementPeriod>,
    pub ytd: Option<&'a IncomeStatementYtd>,
    pub balance: Option<&'a BalanceSheetSnapshot>,
}

/// Current-year and previous-year period statements for trend charts.
#[derive(Debug, Clone, Copy)]
pub struct ComparativeData<'a> {
    pub current_year: &'a [IncomeStatementPeriod],
    pub previous_year: &'a [IncomeStatementPeriod],
    pub has_previous_year: bool,
}

impl ClientFinancialData {
    pub fn from_json_str(json: &str) -> FiscalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fiscal years present in the document, most recent first.
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .years
            .keys()
            .filter_map(|y| y.parse().ok())
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years
    }

    /// Month labels with a period statement in the given year, ascending.
    pub fn available_months(&self, year: i32) -> Vec<String> {
        let Some(year_data) = self.years.get(&year.to_string()) else {
            return Vec::new();
        };
        let mut months: Vec<String> = year_data
            .period_statements
            .iter()
            .map(|er| er.period.clone())
            .collect();
        months.sort();
        months
    }

    /// All statements recorded for one month label, or None when the year
    /// itself is absent.
    pub fn period_data(&self, year: i32, month: &str) -> Option<PeriodData<'_>> {
        let year_data = self.years.get(&year.to_string())?;
        Some(PeriodData {
            period: year_data
                .period_statements
                .iter()
                .find(|er| er.period == month),
            ytd: year_data.ytd_statements.iter().find(|er| er.period == month),
            balance: year_data
                .balance_sheets
                .iter()
                .find(|bg| bg.period == month),
        })
    }

    /// Period statements of the given year alongside the previous year's,
    /// when recorded.
    pub fn comparative_data(&self, year: i32) -> Option<ComparativeData<'_>> {
        let current = self.years.get(&year.to_string())?;
        let previous = self
            .years
            .get(&(year - 1).to_string())
            .map_or(&[][..], |y| y.period_statements.as_slice());
        Some(ComparativeData {
            current_year: current.period_statements.as_slice(),
            previous_year: previous,
            has_previous_year: !previous.is_empty(),
        })
    }
}

// ---------------------------------------------------------------------------
// Month catalog
// ---------------------------------------------------------------------------

/// Spanish display name for a `"YYYY-MM"` label. Unrecognized labels come
/// back unchanged.
pub fn month_name(label: &str) -> String {
    let month = label.split('-').nth(1).unwrap_or(label);
    let name = match month {
        "01" => "Enero",
        "02" => "Febrero",
        "03" => "Marzo",
        "04" => "Abril",
        "05" => "Mayo",
        "06" => "Junio",
        "07" => "Julio",
        "08" => "Agosto",
        "09" => "Septiembre",
        "10" => "Octubre",
        "11" => "Noviembre",
        "12" => "Diciembre",
        _ => return label.to_string(),
    };
    name.to_string()
}

/// The label of the month before the given `"YYYY-MM"` label.
pub fn previous_month(label: &str) -> Option<String> {
    let (year, month) = label.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(if month == 1 {
        format!("{:04}-12", year - 1)
    } else {
        format!("{year:04}-{:02}", month - 1)
    })
}

// ---------------------------------------------------------------------------
// Client catalog
// ---------------------------------------------------------------------------

/// Slug-to-display-name table for the firm's client portfolio.
const CLIENTS: [(&str, &str); 10] = [
    ("luenser", "Luenser"),
    ("mrm", "MRM"),
    ("vilego", "Vilego"),
    ("fiduz", "FIDUZ"),
    ("josivna", "Josivna"),
    ("leret", "Leret Leret"),
    ("sinmsa", "SINMSA"),
    ("sedentarius", "Sedentarius"),
    ("whipple", "Soluciones Whipple"),
    ("luengas", "Jose Manuel Luengas"),
];

/// Display name for a client slug; unknown slugs echo back.
pub fn client_name(id: &str) -> String {
    let slug = id.to_lowercase();
    CLIENTS
        .iter()
        .find(|(s, _)| *s == slug)
        .map_or_else(|| id.to_string(), |(_, name)| (*name).to_string())
}

/// All known client slugs, in portfolio order.
pub fn all_client_ids() -> Vec<&'static str> {
    CLIENTS.iter().map(|(slug, _)| *slug).collect()
}

/// Resolve a display name (possibly abbreviated or with a legal suffix)
/// back to its slug: exact match first, then substring match in either
/// direction, then the known aliases.
pub fn client_slug(name: &str) -> Option<&'static str> {
    let normalized = name.trim().to_lowercase();

    for (slug, display) in CLIENTS {
        if display.to_lowercase() == normalized {
            return Some(slug);
        }
    }

    for (slug, display) in CLIENTS {
        let display = display.to_lowercase();
        if normalized.contains(&display) || display.contains(&normalized) {
            return Some(slug);
        }
    }

    match normalized.as_str() {
        "mrm ingeniería integral" | "mrm ingenieria integral" => Some("mrm"),
        "jose manuel luengas" | "josé manuel luengas" => Some("luengas"),
        "soluciones whipple" => Some("whipple"),
        "leret leret" => Some("leret"),
        _ => None,
    }
}

/// Normalize a caller-supplied identifier (slug or display name) to a
/// known slug.
pub fn resolve_client(id_or_name: &str) -> FiscalResult<&'static str> {
    let lowered = id_or_name.trim().to_lowercase();
    if let Some(slug) = CLIENTS.iter().find(|(s, _)| *s == lowered).map(|(s, _)| *s) {
        return Ok(slug);
    }
    client_slug(id_or_name).ok_or_else(|| FiscalError::UnknownClient(id_or_name.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
