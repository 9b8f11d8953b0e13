use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::metrics::safe_div;
use crate::types::{IncomeStatementPeriod, Money};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Revenue, expense and net-income deltas for one comparison direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationBreakdown {
    #[serde(rename = "ingresos")]
    pub revenue: Money,
    #[serde(rename = "gastos")]
    pub expenses: Money,
    #[serde(rename = "utilidad")]
    pub net_income: Money,
}

/// Period-over-period movement of the headline income-statement lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodComparison {
    #[serde(rename = "periodo")]
    pub period: String,
    #[serde(rename = "periodoAnterior")]
    pub previous_period: String,
    #[serde(rename = "variacionAbsoluta")]
    pub absolute: VariationBreakdown,
    #[serde(rename = "variacionPorcentual")]
    pub percentage: VariationBreakdown,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compare two income-statement periods, current against previous.
///
/// Percentage deltas are expressed ×100 and fall back to zero when the
/// previous figure is exactly zero. The net-income percentage divides by
/// the absolute value of the previous net income so the sign still reads
/// as improvement/deterioration when the prior period was loss-making.
pub fn compare_periods(
    current: &IncomeStatementPeriod,
    previous: &IncomeStatementPeriod,
) -> PeriodComparison {
    let hundred = dec!(100);

    PeriodComparison {
        period: current.period.clone(),
        previous_period: previous.period.clone(),
        absolute: VariationBreakdown {
            revenue: current.revenue - previous.revenue,
            expenses: current.expenses - previous.expenses,
            net_income: current.net_income - previous.net_income,
        },
        percentage: VariationBreakdown {
            revenue: safe_div(
                current.revenue - previous.revenue,
                previous.revenue,
                Decimal::ZERO,
            ) * hundred,
            expenses: safe_div(
                current.expenses - previous.expenses,
                previous.expenses,
                Decimal::ZERO,
            ) * hundred,
            net_income: safe_div(
                current.net_income - previous.net_income,
                previous.net_income.abs(),
                Decimal::ZERO,
            ) * hundred,
        },
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

    fn period(label: &str, revenue: Decimal, expenses: Decimal, net_income: Decimal) -> IncomeStatementPeriod {
        IncomeStatementPeriod {
            period: label.to_string(),
            revenue,
            purchases: Decimal::ZERO,
            expenses,
            financial_income: Decimal::ZERO,
            financial_expense: Decimal::ZERO,
            net_income,
        }
    }

    #[test]
    fn absolute_and_percentage_deltas() {
        let current = period("2024-03", dec!(1200), dec!(330), dec!(240));
        let previous = period("2024-02", dec!(1000), dec!(300), dec!(200));
        let cmp = compare_periods(&current, &previous);

        assert_eq!(cmp.period, "2024-03");
        assert_eq!(cmp.previous_period, "2024-02");
        assert_eq!(cmp.absolute.revenue, dec!(200));
        assert_eq!(cmp.absolute.expenses, dec!(30));
        assert_eq!(cmp.absolute.net_income, dec!(40));
        assert_eq!(cmp.percentage.revenue, dec!(20));
        assert_eq!(cmp.percentage.expenses, dec!(3));
        assert_eq!(cmp.percentage.net_income, dec!(20));
    }

    #[test]
    fn zero_previous_revenue_gives_zero_percentage() {
        let current = period("2024-03", dec!(500), dec!(100), dec!(50));
        let previous = period("2024-02", dec!(0), dec!(0), dec!(0));
        let cmp = compare_periods(&current, &previous);

        assert_eq!(cmp.absolute.revenue, dec!(500));
        assert_eq!(cmp.percentage.revenue, Decimal::ZERO);
        assert_eq!(cmp.percentage.expenses, Decimal::ZERO);
        assert_eq!(cmp.percentage.net_income, Decimal::ZERO);
    }

    // A shrinking loss reads as a positive movement: the denominator is
    // |previous net income|, not the signed figure.
    #[test]
    fn loss_improvement_shows_positive_net_income_delta() {
        let current = period("2024-03", dec!(1000), dec!(300), dec!(-50));
        let previous = period("2024-02", dec!(1000), dec!(300), dec!(-100));
        let cmp = compare_periods(&current, &previous);

        assert_eq!(cmp.absolute.net_income, dec!(50));
        assert_eq!(cmp.percentage.net_income, dec!(50));
    }

    #[test]
    fn deepening_loss_shows_negative_net_income_delta() {
        let current = period("2024-03", dec!(1000), dec!(300), dec!(-150));
        let previous = period("2024-02", dec!(1000), dec!(300), dec!(-100));
        let cmp = compare_periods(&current, &previous);

        assert_eq!(cmp.percentage.net_income, dec!(-50));
    }

    #[test]
    fn serializes_dashboard_field_names() {
        let current = period("2024-03", dec!(1200), dec!(330), dec!(240));
        let previous = period("2024-02", dec!(1000), dec!(300), dec!(200));
        let value = serde_json::to_value(compare_periods(&current, &previous)).unwrap();
        let map = value.as_object().unwrap();
        assert!(map.contains_key("periodo"));
        assert!(map.contains_key("periodoAnterior"));
        assert!(map["variacionAbsoluta"].as_object().unwrap().contains_key("ingresos"));
        assert!(map["variacionPorcentual"].as_object().unwrap().contains_key("utilidad"));
    }
}
