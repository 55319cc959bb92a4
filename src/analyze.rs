use crate::error::Result;
use crate::scoring::badge::badge_for_score;
use crate::scoring::{calculate_score, Scorer};
use crate::source::{AnalysisRequest, MetricsSource};
use crate::types::report::Analysis;

/// Runs one wallet analysis: fetch metrics once, score them, pick the badge.
/// Without a `scorer` the built-in ETH price is used.
pub fn analyze_wallet(
    request: &AnalysisRequest,
    source: &dyn MetricsSource,
    scorer: Option<&Scorer>,
) -> Result<Analysis> {
    tracing::info!(
        address = %request.address,
        network = request.network.slug(),
        source = source.name(),
        "Reading wallet data..."
    );

    tracing::info!("Analyzing blockchain activity...");
    let metrics = source.fetch(request)?;
    tracing::debug!(?metrics, "metrics assembled");

    tracing::info!("Calculating reputation score...");
    let score = match scorer {
        Some(scorer) => scorer.score(&metrics),
        None => calculate_score(&metrics),
    };
    let badge = badge_for_score(score.total).clone();

    tracing::info!(total = score.total, badge = badge.name, "Analysis complete!");
    Ok(Analysis {
        address: request.address.to_string(),
        network: request.network,
        source: source.name().to_string(),
        demo: source.is_demo(),
        metrics,
        score,
        badge,
    })
}
