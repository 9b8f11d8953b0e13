use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Ratios and rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// One month of income-statement flow figures.
///
/// Serde names match the CONTPAQ export consumed by the dashboard
/// (`/data/clients/<slug>.json`), so those files deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementPeriod {
    /// Month label in `"YYYY-MM"` form, unique within a client-year data set.
    #[serde(rename = "mes")]
    pub period: String,
    #[serde(rename = "ingresos")]
    pub revenue: Money,
    #[serde(rename = "compras")]
    pub purchases: Money,
    #[serde(rename = "gastos")]
    pub expenses: Money,
    #[serde(rename = "prodFin")]
    pub financial_income: Money,
    #[serde(rename = "gastFin")]
    pub financial_expense: Money,
    #[serde(rename = "utilidad")]
    pub net_income: Money,
}

/// Year-to-date cumulative figures through the labelled month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementYtd {
    #[serde(rename = "mes")]
    pub period: String,
    #[serde(rename = "ingresosYTD")]
    pub revenue: Money,
    #[serde(rename = "comprasYTD")]
    pub purchases: Money,
    #[serde(rename = "gastosYTD")]
    pub expenses: Money,
    #[serde(rename = "prodFinYTD")]
    pub financial_income: Money,
    #[serde(rename = "gastFinYTD")]
    pub financial_expense: Money,
    #[serde(rename = "utilidadYTD")]
    pub net_income: Money,
}

/// One month of balance-sheet stock figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetSnapshot {
    #[serde(rename = "mes")]
    pub period: String,
    #[serde(rename = "ac")]
    pub current_assets: Money,
    #[serde(rename = "pc")]
    pub current_liabilities: Money,
    #[serde(rename = "bancos")]
    pub cash: Money,
    #[serde(rename = "inversiones")]
    pub investments: Money,
    #[serde(rename = "clientes")]
    pub receivables: Money,
    #[serde(rename = "deudores")]
    pub other_debtors: Money,
    #[serde(rename = "inventario")]
    pub inventory: Money,
    #[serde(rename = "anticipoProv")]
    pub prepaid_to_suppliers: Money,
    #[serde(rename = "pagosAnt")]
    pub prepaid_expenses: Money,
    #[serde(rename = "anticipoCli")]
    pub customer_advances: Money,
    #[serde(rename = "capital")]
    pub equity: Money,
    #[serde(rename = "utilidadEj")]
    pub period_profit: Money,
    #[serde(rename = "anc", skip_serializing_if = "Option::is_none")]
    pub non_current_assets: Option<Money>,
    #[serde(rename = "plc", skip_serializing_if = "Option::is_none")]
    pub non_current_liabilities: Option<Money>,
    #[serde(rename = "proveedores", skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<Money>,
    #[serde(rename = "acreedores", skip_serializing_if = "Option::is_none")]
    pub creditors: Option<Money>,
    #[serde(rename = "capitalSocial", skip_serializing_if = "Option::is_none")]
    pub capital_stock: Option<Money>,
    #[serde(rename = "resultadosAcum", skip_serializing_if = "Option::is_none")]
    pub retained_earnings: Option<Money>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn income_statement_parses_contpaq_field_names() {
        let json = r#"{
            "mes": "2024-03",
            "ingresos": 120000.5,
            "compras": 40000,
            "gastos": 30000,
            "prodFin": 120,
            "gastFin": 850,
            "utilidad": 49270.5
        }"#;
        let er: IncomeStatementPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(er.period, "2024-03");
        assert_eq!(er.revenue, dec!(120000.5));
        assert_eq!(er.financial_expense, dec!(850));
    }

    #[test]
    fn balance_sheet_optional_fields_default_to_none() {
        let json = r#"{
            "mes": "2024-03",
            "ac": 600, "pc": 300, "bancos": 150, "inversiones": 0,
            "clientes": 200, "deudores": 10, "inventario": 100,
            "anticipoProv": 20, "pagosAnt": 15, "anticipoCli": 5,
            "capital": 500, "utilidadEj": 80
        }"#;
        let bg: BalanceSheetSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(bg.non_current_assets, None);
        assert_eq!(bg.suppliers, None);
        assert_eq!(bg.current_assets, dec!(600));
    }
}
