use crate::scoring::wei_to_eth;
use crate::types::report::Analysis;

pub fn to_markdown(analysis: &Analysis) -> String {
    let mut output = String::new();
    output.push_str("# ProofDrop Report\n\n");
    output.push_str(&format!("Wallet: {}\n", analysis.address));
    output.push_str(&format!(
        "Network: {} (chain {})\n",
        analysis.network.display_name(),
        analysis.network.chain_id()
    ));
    output.push_str(&format!("Source: {}\n\n", analysis.source));

    if analysis.demo {
        output.push_str(
            "> Demo data: no metrics source configured, scores are illustrative only.\n\n",
        );
    }

    output.push_str("## Activity\n\n");
    let metrics = &analysis.metrics;
    output.push_str(&format!(
        "- account age: {} months\n- gas spent: {:.4} ETH\n- unique contracts: {}\n- governance votes: {}\n- proposals created: {}\n- defi engagement: {}\n- airdrops claimed: {}\n\n",
        metrics.account_age_months,
        wei_to_eth(metrics.gas_spent_wei),
        metrics.unique_contracts,
        metrics.governance_votes,
        metrics.proposals_created,
        metrics.defi_engagement,
        metrics.airdrops_claimed
    ));

    output.push_str("## Score Breakdown\n\n");
    for (name, score, cap) in analysis.score.sub_scores() {
        output.push_str(&format!("- {name}: {score:.1} / {cap}\n"));
    }
    output.push('\n');

    let badge = &analysis.badge;
    output.push_str(&format!("Total: {} / 100\n", analysis.score.total));
    output.push_str(&format!(
        "Badge: {} {} ({}-{}) - {}\n",
        badge.icon, badge.name, badge.min_score, badge.max_score, badge.description
    ));
    output.push_str(&format!(
        "Mint eligible: {}\n",
        if analysis.score.can_mint { "yes" } else { "no" }
    ));

    output
}
