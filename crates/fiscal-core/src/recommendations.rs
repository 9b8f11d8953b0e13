use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metrics::KpiSet;
use crate::types::IncomeStatementPeriod;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Advisory severity. Each level carries the marker glyph the dashboard
/// prefixes to the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Advisory,
    Critical,
    Positive,
}

impl Severity {
    pub fn marker(self) -> &'static str {
        match self {
            Self::Warning => "⚠️",
            Self::Advisory => "💡",
            Self::Critical => "🔴",
            Self::Positive => "✅",
        }
    }
}

/// One advisory line generated from the KPI thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.marker(), self.message)
    }
}

// ---------------------------------------------------------------------------
// Advisory texts
// ---------------------------------------------------------------------------

pub const LOW_CURRENT_RATIO: &str = "La razón circulante es baja. Considere mejorar la liquidez \
     mediante gestión de cuentas por cobrar o reestructuración de pasivos.";
pub const HIGH_CURRENT_RATIO: &str = "La razón circulante es muy alta. Evalúe oportunidades de \
     inversión para optimizar el uso del capital.";
pub const LOW_ACID_TEST: &str = "La prueba ácida indica posible problema de liquidez inmediata. \
     Revise políticas de cobranza.";
pub const NEGATIVE_NET_MARGIN: &str = "Margen neto negativo. Prioridad: reducción de costos y \
     mejora de eficiencia operativa.";
pub const LOW_NET_MARGIN: &str = "Margen neto bajo. Analice estructura de costos y estrategia \
     de precios.";
pub const HIGH_DAYS_RECEIVABLE: &str = "Días de cuentas por cobrar elevados. Implemente \
     políticas de cobranza más agresivas.";
pub const HIGH_DEBT_RATIO: &str = "Alto nivel de endeudamiento. Considere estrategias de \
     reducción de deuda.";
pub const STRONG_OPERATING_MARGIN: &str = "Excelente margen operativo. Mantenga la disciplina \
     en control de costos.";
pub const LOW_ROE: &str = "Retorno sobre capital bajo. Evalúe proyectos de inversión con mayor \
     rentabilidad.";
pub const NEGATIVE_WORKING_CAPITAL: &str = "Capital de trabajo negativo. Situación crítica que \
     requiere atención inmediata.";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate the advisory rule list against a KPI set.
///
/// Rules fire independently and in this fixed order; the output preserves
/// it and is never deduplicated. The two `else` pairs of the dashboard
/// (current ratio low/high, net margin negative/low) are encoded as
/// disjoint predicates so each call still fires at most one branch of a
/// pair.
pub fn generate_recommendations(
    kpis: &KpiSet,
    income: &IncomeStatementPeriod,
) -> Vec<Recommendation> {
    let rules: [(bool, Severity, &str); 10] = [
        (
            kpis.current_ratio < dec!(1.5),
            Severity::Warning,
            LOW_CURRENT_RATIO,
        ),
        (
            kpis.current_ratio > dec!(3),
            Severity::Advisory,
            HIGH_CURRENT_RATIO,
        ),
        (
            kpis.acid_test_ratio < Decimal::ONE,
            Severity::Warning,
            LOW_ACID_TEST,
        ),
        (
            kpis.net_margin < Decimal::ZERO,
            Severity::Critical,
            NEGATIVE_NET_MARGIN,
        ),
        (
            kpis.net_margin >= Decimal::ZERO && kpis.net_margin < dec!(0.05),
            Severity::Warning,
            LOW_NET_MARGIN,
        ),
        (
            kpis.days_receivable > dec!(60),
            Severity::Warning,
            HIGH_DAYS_RECEIVABLE,
        ),
        (
            kpis.debt_ratio > dec!(0.6),
            Severity::Warning,
            HIGH_DEBT_RATIO,
        ),
        (
            income.net_income > Decimal::ZERO && kpis.operating_margin > dec!(0.15),
            Severity::Positive,
            STRONG_OPERATING_MARGIN,
        ),
        (
            kpis.return_on_equity > Decimal::ZERO && kpis.return_on_equity < dec!(0.1),
            Severity::Advisory,
            LOW_ROE,
        ),
        (
            kpis.working_capital < Decimal::ZERO,
            Severity::Critical,
            NEGATIVE_WORKING_CAPITAL,
        ),
    ];

    rules
        .into_iter()
        .filter(|(fired, _, _)| *fired)
        .map(|(_, severity, message)| Recommendation {
            severity,
            message: message.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn healthy_kpis() -> KpiSet {
        KpiSet {
            current_ratio: dec!(2.0),
            acid_test_ratio: dec!(1.4),
            operating_margin: dec!(0.10),
            net_margin: dec!(0.08),
            asset_turnover: dec!(1.1),
            receivables_turnover: dec!(8),
            days_receivable: dec!(45),
            inventory_turnover: dec!(6),
            days_inventory: dec!(60),
            debt_ratio: dec!(0.4),
            debt_to_equity: dec!(0.7),
            interest_coverage: dec!(5),
            return_on_equity: dec!(0.15),
            return_on_assets: dec!(0.08),
            working_capital: dec!(300),
        }
    }

    fn income_with_net(net_income: Decimal) -> IncomeStatementPeriod {
        IncomeStatementPeriod {
            period: "2024-03".to_string(),
            revenue: dec!(1000),
            purchases: dec!(400),
            expenses: dec!(300),
            financial_income: Decimal::ZERO,
            financial_expense: dec!(50),
            net_income,
        }
    }

    #[test]
    fn healthy_company_triggers_nothing() {
        let recs = generate_recommendations(&healthy_kpis(), &income_with_net(dec!(80)));
        assert_eq!(recs, Vec::new());
    }

    #[test]
    fn distressed_company_fires_rules_in_order() {
        let mut kpis = healthy_kpis();
        kpis.current_ratio = dec!(1.0);
        kpis.acid_test_ratio = dec!(0.5);
        kpis.net_margin = dec!(-0.1);
        kpis.days_receivable = dec!(90);
        kpis.debt_ratio = dec!(0.7);
        kpis.working_capital = dec!(-500);
        kpis.return_on_equity = dec!(-0.2);

        let recs = generate_recommendations(&kpis, &income_with_net(dec!(-100)));
        let messages: Vec<&str> = recs.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                LOW_CURRENT_RATIO,
                LOW_ACID_TEST,
                NEGATIVE_NET_MARGIN,
                HIGH_DAYS_RECEIVABLE,
                HIGH_DEBT_RATIO,
                NEGATIVE_WORKING_CAPITAL,
            ]
        );
        assert_eq!(recs[0].severity, Severity::Warning);
        assert_eq!(recs[2].severity, Severity::Critical);
        assert_eq!(recs[5].severity, Severity::Critical);
    }

    #[test]
    fn current_ratio_branches_are_exclusive() {
        let mut kpis = healthy_kpis();
        kpis.current_ratio = dec!(3.5);
        let recs = generate_recommendations(&kpis, &income_with_net(dec!(80)));
        let messages: Vec<&str> = recs.iter().map(|r| r.message.as_str()).collect();
        assert!(messages.contains(&HIGH_CURRENT_RATIO));
        assert!(!messages.contains(&LOW_CURRENT_RATIO));
    }

    #[test]
    fn net_margin_low_branch_requires_non_negative_margin() {
        let mut kpis = healthy_kpis();
        kpis.net_margin = dec!(0.03);
        let recs = generate_recommendations(&kpis, &income_with_net(dec!(30)));
        let messages: Vec<&str> = recs.iter().map(|r| r.message.as_str()).collect();
        assert!(messages.contains(&LOW_NET_MARGIN));
        assert!(!messages.contains(&NEGATIVE_NET_MARGIN));

        kpis.net_margin = dec!(-0.03);
        let recs = generate_recommendations(&kpis, &income_with_net(dec!(-30)));
        let messages: Vec<&str> = recs.iter().map(|r| r.message.as_str()).collect();
        assert!(messages.contains(&NEGATIVE_NET_MARGIN));
        assert!(!messages.contains(&LOW_NET_MARGIN));
    }

    #[test]
    fn commendation_needs_profit_and_margin_together() {
        let mut kpis = healthy_kpis();
        kpis.operating_margin = dec!(0.2);
        let recs = generate_recommendations(&kpis, &income_with_net(dec!(150)));
        assert!(recs.iter().any(|r| r.message == STRONG_OPERATING_MARGIN));
        assert_eq!(recs[0].severity, Severity::Positive);

        // Same margin but a net loss: no commendation.
        let recs = generate_recommendations(&kpis, &income_with_net(dec!(-10)));
        assert!(recs.iter().all(|r| r.message != STRONG_OPERATING_MARGIN));
    }

    #[test]
    fn low_roe_advisory_only_fires_between_zero_and_ten_percent() {
        let mut kpis = healthy_kpis();
        kpis.return_on_equity = dec!(0.05);
        let recs = generate_recommendations(&kpis, &income_with_net(dec!(80)));
        assert!(recs.iter().any(|r| r.message == LOW_ROE));

        kpis.return_on_equity = dec!(-0.05);
        let recs = generate_recommendations(&kpis, &income_with_net(dec!(80)));
        assert!(recs.iter().all(|r| r.message != LOW_ROE));
    }

    #[test]
    fn display_prefixes_the_severity_marker() {
        let rec = Recommendation {
            severity: Severity::Critical,
            message: NEGATIVE_WORKING_CAPITAL.to_string(),
        };
        let rendered = rec.to_string();
        assert!(rendered.starts_with("🔴 "));
        assert!(rendered.ends_with(NEGATIVE_WORKING_CAPITAL));
    }
}
