use clap::Args;
use serde_json::Value;

use fiscal_core::metrics::compute_kpis;
use fiscal_core::recommendations::generate_recommendations;

use crate::commands::kpis::load_statement_pair;

/// Arguments for advisory generation
#[derive(Args)]
pub struct RecommendArgs {
    /// Path to a JSON file holding estadoResultados and balanceGeneral
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_recommend(args: RecommendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pair = load_statement_pair(args.input.as_deref())?;
    let kpis = compute_kpis(&pair.income, &pair.balance);
    let recommendations = generate_recommendations(&kpis, &pair.income);
    let rendered: Vec<String> = recommendations.iter().map(ToString::to_string).collect();

    Ok(serde_json::json!({
        "kpis": kpis,
        "recomendaciones": recommendations,
        "texto": rendered,
    }))
}
