use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{BalanceSheetSnapshot, IncomeStatementPeriod, Money, Rate};

/// Days in the commercial year used to convert turnovers into day counts.
const DAYS_PER_YEAR: Decimal = dec!(365);

// ---------------------------------------------------------------------------
// Output type
// ---------------------------------------------------------------------------

/// The full ratio set derived from one (income statement, balance sheet)
/// month pair. Serde names match the dashboard's `KPIFinanciero` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSet {
    #[serde(rename = "razonCirculante")]
    pub current_ratio: Rate,
    #[serde(rename = "pruebaAcida")]
    pub acid_test_ratio: Rate,
    #[serde(rename = "margenOperativo")]
    pub operating_margin: Rate,
    #[serde(rename = "margenNeto")]
    pub net_margin: Rate,
    #[serde(rename = "rotacionActivos")]
    pub asset_turnover: Rate,
    #[serde(rename = "rotacionCuentasCobrar")]
    pub receivables_turnover: Rate,
    #[serde(rename = "diasCuentasCobrar")]
    pub days_receivable: Decimal,
    #[serde(rename = "rotacionInventarios")]
    pub inventory_turnover: Rate,
    #[serde(rename = "diasInventario")]
    pub days_inventory: Decimal,
    #[serde(rename = "razonEndeudamiento")]
    pub debt_ratio: Rate,
    #[serde(rename = "razonDeuda")]
    pub debt_to_equity: Rate,
    #[serde(rename = "coberturaIntereses")]
    pub interest_coverage: Rate,
    #[serde(rename = "ROE")]
    pub return_on_equity: Rate,
    #[serde(rename = "ROA")]
    pub return_on_assets: Rate,
    #[serde(rename = "capitalTrabajo")]
    pub working_capital: Money,
}

// ---------------------------------------------------------------------------
// Shared guard
// ---------------------------------------------------------------------------

/// Division that returns `fallback` when the denominator is exactly zero.
///
/// Only an exact zero triggers the fallback: a negative denominator (e.g.
/// negative equity) flows through and the ratio keeps its sign-flipped
/// value.
pub fn safe_div(numerator: Decimal, denominator: Decimal, fallback: Decimal) -> Decimal {
    if denominator.is_zero() {
        fallback
    } else {
        numerator / denominator
    }
}

// ---------------------------------------------------------------------------
// Derived bases
// ---------------------------------------------------------------------------

/// Revenue minus purchases and operating expenses.
pub fn operating_income(income: &IncomeStatementPeriod) -> Money {
    income.revenue - income.purchases - income.expenses
}

/// Current assets plus non-current assets when reported.
pub fn total_assets(balance: &BalanceSheetSnapshot) -> Money {
    balance.current_assets + balance.non_current_assets.unwrap_or(Decimal::ZERO)
}

/// Current liabilities plus non-current liabilities when reported.
pub fn total_liabilities(balance: &BalanceSheetSnapshot) -> Money {
    balance.current_liabilities + balance.non_current_liabilities.unwrap_or(Decimal::ZERO)
}

// ---------------------------------------------------------------------------
// Ratios
// ---------------------------------------------------------------------------

pub fn operating_margin(income: &IncomeStatementPeriod) -> Rate {
    safe_div(operating_income(income), income.revenue, Decimal::ZERO)
}

pub fn net_margin(income: &IncomeStatementPeriod) -> Rate {
    safe_div(income.net_income, income.revenue, Decimal::ZERO)
}

pub fn current_ratio(balance: &BalanceSheetSnapshot) -> Rate {
    safe_div(
        balance.current_assets,
        balance.current_liabilities,
        Decimal::ZERO,
    )
}

/// Quick ratio: current assets net of inventory and prepayments over
/// current liabilities.
pub fn acid_test_ratio(balance: &BalanceSheetSnapshot) -> Rate {
    let liquid_assets = balance.current_assets
        - balance.inventory
        - balance.prepaid_expenses
        - balance.prepaid_to_suppliers;
    safe_div(liquid_assets, balance.current_liabilities, Decimal::ZERO)
}

pub fn working_capital(balance: &BalanceSheetSnapshot) -> Money {
    balance.current_assets - balance.current_liabilities
}

pub fn asset_turnover(revenue: Money, total_assets: Money) -> Rate {
    safe_div(revenue, total_assets, Decimal::ZERO)
}

pub fn receivables_turnover(revenue: Money, receivables: Money) -> Rate {
    safe_div(revenue, receivables, Decimal::ZERO)
}

pub fn days_receivable(turnover: Rate) -> Decimal {
    safe_div(DAYS_PER_YEAR, turnover, Decimal::ZERO)
}

pub fn inventory_turnover(cost_of_sales: Money, inventory: Money) -> Rate {
    safe_div(cost_of_sales, inventory, Decimal::ZERO)
}

pub fn days_inventory(turnover: Rate) -> Decimal {
    safe_div(DAYS_PER_YEAR, turnover, Decimal::ZERO)
}

pub fn debt_ratio(total_liabilities: Money, total_assets: Money) -> Rate {
    safe_div(total_liabilities, total_assets, Decimal::ZERO)
}

pub fn debt_to_equity(total_liabilities: Money, equity: Money) -> Rate {
    safe_div(total_liabilities, equity, Decimal::ZERO)
}

pub fn interest_coverage(operating_income: Money, financial_expense: Money) -> Rate {
    safe_div(operating_income, financial_expense, Decimal::ZERO)
}

pub fn return_on_equity(net_income: Money, equity: Money) -> Rate {
    safe_div(net_income, equity, Decimal::ZERO)
}

pub fn return_on_assets(net_income: Money, total_assets: Money) -> Rate {
    safe_div(net_income, total_assets, Decimal::ZERO)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the full KPI set for one month.
///
/// Total over all finite inputs: every division falls back to zero on an
/// exactly-zero denominator, so no field is ever NaN or infinite, and the
/// same input always produces the identical output.
pub fn compute_kpis(income: &IncomeStatementPeriod, balance: &BalanceSheetSnapshot) -> KpiSet {
    let assets = total_assets(balance);
    let liabilities = total_liabilities(balance);
    // CONTPAQ exports carry no separate cost-of-sales line; purchases stand in.
    let cost_of_sales = income.purchases;

    let receivables_turn = receivables_turnover(income.revenue, balance.receivables);
    let inventory_turn = inventory_turnover(cost_of_sales, balance.inventory);

    KpiSet {
        current_ratio: current_ratio(balance),
        acid_test_ratio: acid_test_ratio(balance),
        operating_margin: operating_margin(income),
        net_margin: net_margin(income),
        asset_turnover: asset_turnover(income.revenue, assets),
        receivables_turnover: receivables_turn,
        days_receivable: days_receivable(receivables_turn),
        inventory_turnover: inventory_turn,
        days_inventory: days_inventory(inventory_turn),
        debt_ratio: debt_ratio(liabilities, assets),
        debt_to_equity: debt_to_equity(liabilities, balance.equity),
        interest_coverage: interest_coverage(operating_income(income), income.financial_expense),
        return_on_equity: return_on_equity(income.net_income, balance.equity),
        return_on_assets: return_on_assets(income.net_income, assets),
        working_capital: working_capital(balance),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sample_income() -> IncomeStatementPeriod {
        IncomeStatementPeriod {
            period: "2024-03".to_string(),
            revenue: dec!(1000),
            purchases: dec!(400),
            expenses: dec!(300),
            financial_income: dec!(10),
            financial_expense: dec!(50),
            net_income: dec!(200),
        }
    }

    fn sample_balance() -> BalanceSheetSnapshot {
        BalanceSheetSnapshot {
            period: "2024-03".to_string(),
            current_assets: dec!(600),
            current_liabilities: dec!(300),
            cash: dec!(150),
            investments: dec!(0),
            receivables: dec!(200),
            other_debtors: dec!(10),
            inventory: dec!(100),
            prepaid_to_suppliers: dec!(20),
            prepaid_expenses: dec!(15),
            customer_advances: dec!(5),
            equity: dec!(500),
            period_profit: dec!(200),
            non_current_assets: Some(dec!(400)),
            non_current_liabilities: Some(dec!(100)),
            suppliers: None,
            creditors: None,
            capital_stock: None,
            retained_earnings: None,
        }
    }

    #[test]
    fn safe_div_divides_when_denominator_nonzero() {
        assert_eq!(safe_div(dec!(10), dec!(4), Decimal::ZERO), dec!(2.5));
    }

    #[test]
    fn safe_div_returns_fallback_only_on_exact_zero() {
        assert_eq!(safe_div(dec!(10), Decimal::ZERO, dec!(7)), dec!(7));
        // Negative denominators are not clamped.
        assert_eq!(safe_div(dec!(10), dec!(-4), Decimal::ZERO), dec!(-2.5));
    }

    #[test]
    fn worked_example_from_statements() {
        let kpis = compute_kpis(&sample_income(), &sample_balance());
        // 600 / 300
        assert_eq!(kpis.current_ratio, dec!(2.0));
        // (1000 - 400 - 300) / 1000
        assert_eq!(kpis.operating_margin, dec!(0.3));
        // 200 / 1000
        assert_eq!(kpis.net_margin, dec!(0.2));
        // (600 - 100 - 15 - 20) / 300
        assert_eq!(kpis.acid_test_ratio, dec!(465) / dec!(300));
        // 600 - 300
        assert_eq!(kpis.working_capital, dec!(300));
    }

    #[test]
    fn asset_and_liability_totals_include_non_current_halves() {
        let balance = sample_balance();
        assert_eq!(total_assets(&balance), dec!(1000));
        assert_eq!(total_liabilities(&balance), dec!(400));

        let kpis = compute_kpis(&sample_income(), &balance);
        // revenue / total assets = 1000 / 1000
        assert_eq!(kpis.asset_turnover, dec!(1));
        // 400 / 1000
        assert_eq!(kpis.debt_ratio, dec!(0.4));
        // 400 / 500
        assert_eq!(kpis.debt_to_equity, dec!(0.8));
        // net income / total assets = 200 / 1000
        assert_eq!(kpis.return_on_assets, dec!(0.2));
    }

    #[test]
    fn totals_treat_missing_non_current_halves_as_zero() {
        let mut balance = sample_balance();
        balance.non_current_assets = None;
        balance.non_current_liabilities = None;
        assert_eq!(total_assets(&balance), dec!(600));
        assert_eq!(total_liabilities(&balance), dec!(300));
    }

    #[test]
    fn turnover_and_day_counts() {
        let kpis = compute_kpis(&sample_income(), &sample_balance());
        // 1000 / 200
        assert_eq!(kpis.receivables_turnover, dec!(5));
        // 365 / 5
        assert_eq!(kpis.days_receivable, dec!(73));
        // purchases 400 / inventory 100
        assert_eq!(kpis.inventory_turnover, dec!(4));
        // 365 / 4
        assert_eq!(kpis.days_inventory, dec!(91.25));
    }

    #[test]
    fn interest_coverage_uses_operating_income() {
        let kpis = compute_kpis(&sample_income(), &sample_balance());
        // (1000 - 400 - 300) / 50
        assert_eq!(kpis.interest_coverage, dec!(6));
    }

    #[test]
    fn zero_revenue_zeroes_both_margins() {
        let mut income = sample_income();
        income.revenue = Decimal::ZERO;
        let kpis = compute_kpis(&income, &sample_balance());
        assert_eq!(kpis.operating_margin, Decimal::ZERO);
        assert_eq!(kpis.net_margin, Decimal::ZERO);
    }

    #[test]
    fn zero_current_liabilities_zeroes_liquidity_ratios() {
        let mut balance = sample_balance();
        balance.current_liabilities = Decimal::ZERO;
        let kpis = compute_kpis(&sample_income(), &balance);
        assert_eq!(kpis.current_ratio, Decimal::ZERO);
        assert_eq!(kpis.acid_test_ratio, Decimal::ZERO);
        // Working capital is an unguarded subtraction.
        assert_eq!(kpis.working_capital, dec!(600));
    }

    #[test]
    fn zero_turnover_zeroes_day_counts() {
        let mut income = sample_income();
        let mut balance = sample_balance();
        income.revenue = Decimal::ZERO;
        income.purchases = Decimal::ZERO;
        balance.receivables = Decimal::ZERO;
        balance.inventory = Decimal::ZERO;
        let kpis = compute_kpis(&income, &balance);
        assert_eq!(kpis.receivables_turnover, Decimal::ZERO);
        assert_eq!(kpis.days_receivable, Decimal::ZERO);
        assert_eq!(kpis.inventory_turnover, Decimal::ZERO);
        assert_eq!(kpis.days_inventory, Decimal::ZERO);
    }

    #[test]
    fn zero_financial_expense_zeroes_interest_coverage() {
        let mut income = sample_income();
        income.financial_expense = Decimal::ZERO;
        let kpis = compute_kpis(&income, &sample_balance());
        assert_eq!(kpis.interest_coverage, Decimal::ZERO);
    }

    // Documented behavior, not a bug: a zero denominator falls back to
    // zero, but a negative one divides through. Negative net income over
    // negative equity therefore reports a positive ROE.
    #[test]
    fn negative_equity_flips_roe_sign() {
        let mut income = sample_income();
        let mut balance = sample_balance();
        income.net_income = dec!(-200);
        balance.equity = dec!(-500);
        let kpis = compute_kpis(&income, &balance);
        assert_eq!(kpis.return_on_equity, dec!(0.4));
    }

    #[test]
    fn compute_kpis_is_idempotent() {
        let income = sample_income();
        let balance = sample_balance();
        assert_eq!(
            compute_kpis(&income, &balance),
            compute_kpis(&income, &balance)
        );
    }

    #[test]
    fn kpi_set_serializes_dashboard_field_names() {
        let kpis = compute_kpis(&sample_income(), &sample_balance());
        let value = serde_json::to_value(&kpis).unwrap();
        let map = value.as_object().unwrap();
        assert!(map.contains_key("razonCirculante"));
        assert!(map.contains_key("pruebaAcida"));
        assert!(map.contains_key("ROE"));
        assert!(map.contains_key("capitalTrabajo"));
    }
}
